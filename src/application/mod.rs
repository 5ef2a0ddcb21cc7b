//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    RenderDocumentHandler, RenderDocumentQuery, RenderError, RenderedPage, HTML_CONTENT_TYPE,
};
