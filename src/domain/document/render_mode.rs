//! Render mode classification.

use std::fmt;

use crate::domain::foundation::DocumentId;

/// How a document is turned into a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Stored bytes are returned verbatim.
    Raw,
    /// Stored markdown is rendered and wrapped in the page template.
    MarkdownTemplated,
}

impl RenderMode {
    /// Classifies a document by its identifier alone.
    ///
    /// Any `.` anywhere in the identifier selects [`RenderMode::Raw`]. This is a
    /// plain substring test: `v1.2-notes` is raw even if it holds markdown.
    pub fn classify(id: &DocumentId) -> Self {
        if id.as_str().contains('.') {
            RenderMode::Raw
        } else {
            RenderMode::MarkdownTemplated
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, RenderMode::Raw)
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Raw => write!(f, "raw"),
            RenderMode::MarkdownTemplated => write!(f, "markdown_templated"),
        }
    }
}
