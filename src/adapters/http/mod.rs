//! HTTP adapters - axum routing for the render service.

pub mod document;

use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use document::{document_routes, DocumentHandlers};

/// Builds the service router with request tracing and a per-request deadline.
///
/// Requests exceeding `request_timeout` are answered with `408 Request Timeout`.
pub fn app_router(handlers: DocumentHandlers, request_timeout: Duration) -> Router {
    document_routes(handlers)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
