//! HTTP routes for document rendering.

use axum::{routing::get, Router};

use super::handlers::{render_document, render_without_id, DocumentHandlers};

/// Creates the document router.
///
/// # Routes
///
/// - `GET /:doc_id` - Render the document stored under `doc_id`
/// - `GET /` - Request without an identifier; always fails lookup
pub fn document_routes(handlers: DocumentHandlers) -> Router {
    Router::new()
        .route("/", get(render_without_id))
        .route("/:doc_id", get(render_document))
        .with_state(handlers)
}
