//! Application handlers.
//!
//! Query handlers that orchestrate the render pipeline across ports.

pub mod render_document;

pub use render_document::{
    RenderDocumentHandler, RenderDocumentQuery, RenderError, RenderedPage, HTML_CONTENT_TYPE,
};
