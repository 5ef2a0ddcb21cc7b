//! Markdown Renderer Port - markdown source to HTML.

/// Port for converting markdown to HTML.
///
/// # Contract
///
/// Rendering is pure and total: any byte sequence produces HTML. Invalid UTF-8
/// is decoded lossily and malformed markdown degrades to best-effort output.
pub trait MarkdownRenderer: Send + Sync {
    /// Render markdown source bytes as an HTML fragment.
    fn render(&self, source: &[u8]) -> String;
}
