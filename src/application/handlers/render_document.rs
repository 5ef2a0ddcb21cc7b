//! RenderDocumentHandler - Query handler turning a stored document into a page.
//!
//! Decision sequence per request:
//! 1. Fetch the document (absent → not found, backend failure → unavailable)
//! 2. Classify by identifier
//! 3. Raw documents are returned verbatim
//! 4. Markdown documents are rendered, then composed into the page template
//!    together with title, revision timestamp and version
//!
//! Every failure discards the request's work; nothing partial is returned.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::document::{PageMetadata, RenderMode};
use crate::domain::foundation::DocumentId;
use crate::domain::template::{compose, CompositionError};
use crate::ports::{DocumentStore, MarkdownRenderer, StoreError, TemplateError, TemplateProvider};

/// Content type of every successful render.
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// Query to render a document by identifier.
#[derive(Debug, Clone)]
pub struct RenderDocumentQuery {
    pub doc_id: DocumentId,
}

impl RenderDocumentQuery {
    pub fn new(doc_id: impl Into<DocumentId>) -> Self {
        Self {
            doc_id: doc_id.into(),
        }
    }
}

/// A successfully rendered response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub mode: RenderMode,
    pub body: Vec<u8>,
}

impl RenderedPage {
    pub fn content_type(&self) -> &'static str {
        HTML_CONTENT_TYPE
    }
}

/// Errors that end a render request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Document not found: {0}")]
    NotFound(DocumentId),

    #[error("Document {id} could not be read: {message}")]
    StorageUnavailable { id: DocumentId, message: String },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Page composition failed: {0}")]
    Composition(#[from] CompositionError),
}

impl RenderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RenderError::NotFound(_))
    }

    fn from_store(id: &DocumentId, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => RenderError::NotFound(id.clone()),
            StoreError::Unavailable { message } => RenderError::StorageUnavailable {
                id: id.clone(),
                message,
            },
        }
    }
}

/// Handler for rendering documents.
///
/// Holds shared handles only; one instance serves all concurrent requests.
pub struct RenderDocumentHandler {
    store: Arc<dyn DocumentStore>,
    renderer: Arc<dyn MarkdownRenderer>,
    templates: Arc<dyn TemplateProvider>,
}

impl RenderDocumentHandler {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        renderer: Arc<dyn MarkdownRenderer>,
        templates: Arc<dyn TemplateProvider>,
    ) -> Self {
        Self {
            store,
            renderer,
            templates,
        }
    }

    pub async fn handle(&self, query: RenderDocumentQuery) -> Result<RenderedPage, RenderError> {
        let doc_id = query.doc_id;

        let document = match self.store.fetch(&doc_id).await {
            Ok(document) => document,
            Err(e) => {
                let err = RenderError::from_store(&doc_id, e);
                if err.is_not_found() {
                    tracing::info!(operation = "fetch_document", doc_id = %doc_id, "Document not found");
                } else {
                    tracing::error!(operation = "fetch_document", doc_id = %doc_id, error = %err, "Failed to fetch document");
                }
                return Err(err);
            }
        };

        let mode = RenderMode::classify(&doc_id);
        if mode.is_raw() {
            tracing::debug!(doc_id = %doc_id, version = document.revision.version, "Serving raw document");
            return Ok(RenderedPage {
                mode,
                body: document.content,
            });
        }

        let html = self.renderer.render(&document.content);

        let template = self.templates.get_template().await.map_err(|e| {
            tracing::error!(operation = "get_template", doc_id = %doc_id, error = %e, "Failed to load page template");
            RenderError::from(e)
        })?;

        let metadata = PageMetadata::extract(&document.content, &document.revision);

        let page = compose(&template, &html, &metadata).map_err(|e| {
            tracing::error!(operation = "compose_page", doc_id = %doc_id, error = %e, "Failed to compose page");
            RenderError::from(e)
        })?;

        tracing::debug!(doc_id = %doc_id, version = metadata.version, "Rendered markdown document");
        Ok(RenderedPage {
            mode,
            body: page.into_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document::{InMemoryDocumentStore, PulldownMarkdownRenderer};
    use crate::adapters::template::StoreTemplateProvider;
    use crate::domain::document::Document;
    use crate::domain::foundation::Timestamp;
    use crate::domain::template::RenderTemplate;
    use crate::ports::DEFAULT_TEMPLATE_ID;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PAGE_TEMPLATE: &str =
        "<title>{{.Title}}</title>{{.DocBody}}v{{.Version}} {{.Timestamp}}";

    struct UnavailableStore;

    #[async_trait]
    impl DocumentStore for UnavailableStore {
        async fn fetch(&self, _id: &DocumentId) -> Result<Document, StoreError> {
            Err(StoreError::unavailable("backend timeout"))
        }
    }

    /// Renderer that counts invocations and echoes its input.
    #[derive(Default)]
    struct CountingRenderer {
        calls: AtomicUsize,
    }

    impl MarkdownRenderer for CountingRenderer {
        fn render(&self, source: &[u8]) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            String::from_utf8_lossy(source).into_owned()
        }
    }

    /// Template provider that always returns the given result.
    struct FixedTemplates(Result<Arc<RenderTemplate>, TemplateError>);

    #[async_trait]
    impl TemplateProvider for FixedTemplates {
        async fn get_template(&self) -> Result<Arc<RenderTemplate>, TemplateError> {
            self.0.clone()
        }
    }

    fn may_4_2021() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2021, 5, 4, 10, 0, 0).unwrap())
    }

    fn handler_for(store: InMemoryDocumentStore) -> RenderDocumentHandler {
        let store: Arc<dyn DocumentStore> = Arc::new(store);
        RenderDocumentHandler::new(
            Arc::clone(&store),
            Arc::new(PulldownMarkdownRenderer::new()),
            Arc::new(StoreTemplateProvider::new(store)),
        )
    }

    fn body_text(page: &RenderedPage) -> &str {
        std::str::from_utf8(&page.body).unwrap()
    }

    #[tokio::test]
    async fn renders_templated_page_with_metadata() {
        let store = InMemoryDocumentStore::new();
        store.put(DEFAULT_TEMPLATE_ID, PAGE_TEMPLATE).await;
        store.put_at("intro", "first", may_4_2021()).await;
        store.put_at("intro", "draft", may_4_2021()).await;
        store
            .put_at("intro", "# Welcome\nBody text", may_4_2021())
            .await;
        let handler = handler_for(store);

        let page = handler.handle(RenderDocumentQuery::new("intro")).await.unwrap();

        assert_eq!(page.mode, RenderMode::MarkdownTemplated);
        assert_eq!(page.content_type(), "text/html");
        assert_eq!(
            body_text(&page),
            "<title># Welcome</title><h1>Welcome</h1>\n<p>Body text</p>\nv3 Tuesday, 04-May-21 10:00:00 UTC"
        );
    }

    #[tokio::test]
    async fn raw_document_is_returned_verbatim() {
        let store = InMemoryDocumentStore::new();
        store.put("notes.txt", "<b>hi</b>").await;
        let renderer = Arc::new(CountingRenderer::default());
        let handler = RenderDocumentHandler::new(
            Arc::new(store),
            renderer.clone(),
            Arc::new(FixedTemplates(Err(TemplateError::missing(
                DocumentId::new(DEFAULT_TEMPLATE_ID),
            )))),
        );

        let page = handler
            .handle(RenderDocumentQuery::new("notes.txt"))
            .await
            .unwrap();

        assert_eq!(page.mode, RenderMode::Raw);
        assert_eq!(page.body, b"<b>hi</b>");
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_document_is_not_found() {
        let handler = handler_for(InMemoryDocumentStore::new());

        let err = handler
            .handle(RenderDocumentQuery::new("no-such-doc"))
            .await
            .unwrap_err();

        assert_eq!(err, RenderError::NotFound(DocumentId::new("no-such-doc")));
    }

    #[tokio::test]
    async fn empty_identifier_is_not_found() {
        let handler = handler_for(InMemoryDocumentStore::new());

        let err = handler.handle(RenderDocumentQuery::new("")).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn store_failure_is_storage_unavailable() {
        let store: Arc<dyn DocumentStore> = Arc::new(UnavailableStore);
        let handler = RenderDocumentHandler::new(
            Arc::clone(&store),
            Arc::new(PulldownMarkdownRenderer::new()),
            Arc::new(StoreTemplateProvider::new(store)),
        );

        let err = handler
            .handle(RenderDocumentQuery::new("intro"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RenderError::StorageUnavailable {
                id: DocumentId::new("intro"),
                message: "backend timeout".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn missing_template_fails_markdown_render() {
        let store = InMemoryDocumentStore::new();
        store.put("intro", "# Welcome").await;
        let handler = handler_for(store);

        let err = handler
            .handle(RenderDocumentQuery::new("intro"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RenderError::Template(TemplateError::missing(DocumentId::new(DEFAULT_TEMPLATE_ID)))
        );
    }

    #[tokio::test]
    async fn invalid_template_fails_markdown_render() {
        let store = InMemoryDocumentStore::new();
        store.put(DEFAULT_TEMPLATE_ID, "{{.Title").await;
        store.put("intro", "# Welcome").await;
        let handler = handler_for(store);

        let err = handler
            .handle(RenderDocumentQuery::new("intro"))
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::Template(TemplateError::Invalid { .. })));
    }

    #[tokio::test]
    async fn unknown_template_field_is_composition_error() {
        let store = InMemoryDocumentStore::new();
        store.put(DEFAULT_TEMPLATE_ID, "{{.Title}} by {{.Author}}").await;
        store.put("intro", "# Welcome").await;
        let handler = handler_for(store);

        let err = handler
            .handle(RenderDocumentQuery::new("intro"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RenderError::Composition(CompositionError::UnknownField { ref field, .. }) if field == "Author"
        ));
    }

    #[tokio::test]
    async fn markdown_is_rendered_before_composition() {
        let store = InMemoryDocumentStore::new();
        store.put("intro", "plain").await;
        let renderer = Arc::new(CountingRenderer::default());
        let template = RenderTemplate::parse("page", "[{{.DocBody}}]").unwrap();
        let handler = RenderDocumentHandler::new(
            Arc::new(store),
            renderer.clone(),
            Arc::new(FixedTemplates(Ok(Arc::new(template)))),
        );

        let page = handler.handle(RenderDocumentQuery::new("intro")).await.unwrap();

        assert_eq!(body_text(&page), "[plain]");
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 1);
    }
}
