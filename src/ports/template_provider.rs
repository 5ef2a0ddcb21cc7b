//! Template Provider Port - supplies the parsed page template.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::DocumentId;
use crate::domain::template::{RenderTemplate, TemplateParseError};

/// Well-known identifier of the page template document.
pub const DEFAULT_TEMPLATE_ID: &str = "doc-template.html";

/// Port for obtaining the page template used to wrap rendered markdown.
#[async_trait]
pub trait TemplateProvider: Send + Sync {
    /// Fetch and parse the page template.
    ///
    /// # Errors
    ///
    /// - `TemplateError::Missing` if the template document does not exist
    /// - `TemplateError::Invalid` if its source cannot be used as a template
    /// - `TemplateError::Unavailable` if the store fails while fetching it
    async fn get_template(&self) -> Result<Arc<RenderTemplate>, TemplateError>;
}

/// Errors that can occur while providing the page template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Template document missing: {id}")]
    Missing { id: DocumentId },

    #[error("Template document {id} is invalid: {reason}")]
    Invalid { id: DocumentId, reason: String },

    #[error("Template document {id} could not be fetched: {message}")]
    Unavailable { id: DocumentId, message: String },
}

impl TemplateError {
    pub fn missing(id: DocumentId) -> Self {
        Self::Missing { id }
    }

    pub fn invalid(id: DocumentId, reason: impl Into<String>) -> Self {
        Self::Invalid {
            id,
            reason: reason.into(),
        }
    }

    pub fn unavailable(id: DocumentId, message: impl Into<String>) -> Self {
        Self::Unavailable {
            id,
            message: message.into(),
        }
    }

    /// Wraps a parse failure for the template stored under `id`.
    pub fn from_parse(id: DocumentId, err: TemplateParseError) -> Self {
        Self::invalid(id, err.to_string())
    }
}
