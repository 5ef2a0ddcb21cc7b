//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the render pipeline to external systems:
//! - `document` - Document stores (in-memory, filesystem) and the markdown renderer
//! - `postgres` - PostgreSQL document store
//! - `template` - Page template provider backed by the document store
//! - `http` - axum routes exposing the render handler

pub mod document;
pub mod http;
pub mod postgres;
pub mod template;

pub use document::{InMemoryDocumentStore, LocalFileDocumentStore, PulldownMarkdownRenderer};
pub use postgres::PostgresDocumentStore;
pub use template::StoreTemplateProvider;
