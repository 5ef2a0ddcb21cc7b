//! Document adapters - Implementations for document storage and rendering.
//!
//! This module provides adapters for the document-related ports:
//! - `InMemoryDocumentStore` - Revisioned in-memory storage (tests, development)
//! - `LocalFileDocumentStore` - Revision files on the local filesystem
//! - `PulldownMarkdownRenderer` - Markdown to HTML via pulldown-cmark

mod in_memory_store;
mod local_file_store;
mod pulldown_renderer;

pub use in_memory_store::InMemoryDocumentStore;
pub use local_file_store::LocalFileDocumentStore;
pub use pulldown_renderer::PulldownMarkdownRenderer;
