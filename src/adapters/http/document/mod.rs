//! HTTP adapter for document rendering endpoints.

mod handlers;
mod routes;

pub use handlers::DocumentHandlers;
pub use routes::document_routes;
