//! Ports - Interfaces between the render pipeline and the outside world.
//!
//! The application layer depends on these traits only:
//! - `DocumentStore` - fetches documents and revision metadata
//! - `MarkdownRenderer` - converts markdown to HTML
//! - `TemplateProvider` - supplies the parsed page template

mod document_store;
mod markdown_renderer;
mod template_provider;

pub use document_store::{DocumentStore, StoreError};
pub use markdown_renderer::MarkdownRenderer;
pub use template_provider::{TemplateError, TemplateProvider, DEFAULT_TEMPLATE_ID};
