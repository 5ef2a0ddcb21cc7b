//! HTTP handlers for document rendering.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::application::handlers::{RenderDocumentHandler, RenderDocumentQuery, RenderError};
use crate::domain::foundation::DocumentId;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DocumentHandlers {
    render_handler: Arc<RenderDocumentHandler>,
}

impl DocumentHandlers {
    pub fn new(render_handler: Arc<RenderDocumentHandler>) -> Self {
        Self { render_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /:doc_id - Render a stored document as HTML
///
/// An identifier that does not decode to UTF-8 can never name a stored
/// document, so it is answered like any other unknown document.
pub async fn render_document(
    State(handlers): State<DocumentHandlers>,
    doc_id: Result<Path<String>, PathRejection>,
) -> Response {
    match doc_id {
        Ok(Path(doc_id)) => render(&handlers, DocumentId::new(doc_id)).await,
        Err(rejection) => {
            tracing::info!(operation = "fetch_document", error = %rejection, "Undecodable document id");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// GET / - No identifier in the path; treated as the empty identifier
pub async fn render_without_id(State(handlers): State<DocumentHandlers>) -> Response {
    render(&handlers, DocumentId::new("")).await
}

async fn render(handlers: &DocumentHandlers, doc_id: DocumentId) -> Response {
    match handlers
        .render_handler
        .handle(RenderDocumentQuery { doc_id })
        .await
    {
        Ok(page) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, page.content_type())],
            page.body,
        )
            .into_response(),
        Err(e) => handle_render_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Maps render failures to bare status responses; error details stay in the logs.
fn handle_render_error(error: RenderError) -> Response {
    match error {
        RenderError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        RenderError::StorageUnavailable { .. }
        | RenderError::Template(_)
        | RenderError::Composition(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::CompositionError;
    use crate::ports::TemplateError;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_render_error(RenderError::NotFound(DocumentId::new("x")));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_unavailable_maps_to_500() {
        let response = handle_render_error(RenderError::StorageUnavailable {
            id: DocumentId::new("x"),
            message: "down".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn template_errors_map_to_500() {
        let missing = TemplateError::missing(DocumentId::new("doc-template.html"));
        let response = handle_render_error(RenderError::Template(missing));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn composition_error_maps_to_500() {
        let response = handle_render_error(RenderError::Composition(
            CompositionError::UnknownField {
                template: "page".to_string(),
                field: "Author".to_string(),
            },
        ));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
