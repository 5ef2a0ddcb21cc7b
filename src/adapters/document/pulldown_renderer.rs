//! Pulldown-cmark based markdown renderer adapter.
//!
//! Converts markdown to an HTML fragment using the pure Rust `pulldown-cmark`
//! library. The fragment is not wrapped in a document; page structure comes
//! from the page template.

use pulldown_cmark::{html, Options, Parser};

use crate::ports::MarkdownRenderer;

/// Markdown renderer using pulldown-cmark.
///
/// # Example
///
/// ```rust,ignore
/// let renderer = PulldownMarkdownRenderer::new();
/// let html = renderer.render(b"# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
#[derive(Debug, Clone)]
pub struct PulldownMarkdownRenderer {
    options: Options,
}

impl PulldownMarkdownRenderer {
    /// Create a renderer with the common extensions enabled
    /// (tables, strikethrough, footnotes, task lists).
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }

    /// Create a renderer accepting only CommonMark.
    pub fn commonmark() -> Self {
        Self {
            options: Options::empty(),
        }
    }
}

impl Default for PulldownMarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for PulldownMarkdownRenderer {
    fn render(&self, source: &[u8]) -> String {
        let markdown = String::from_utf8_lossy(source);
        let parser = Parser::new_ext(&markdown, self.options);

        let mut html_body = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_body, parser);
        html_body
    }
}
