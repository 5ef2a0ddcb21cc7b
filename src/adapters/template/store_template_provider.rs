//! Template provider reading the page template from the document store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::document::Document;
use crate::domain::foundation::DocumentId;
use crate::domain::template::{RenderTemplate, PAGE_FIELDS};
use crate::ports::{DocumentStore, StoreError, TemplateError, TemplateProvider, DEFAULT_TEMPLATE_ID};

/// A parsed template and the template document version it came from.
#[derive(Debug, Clone)]
struct CachedTemplate {
    version: i64,
    template: Arc<RenderTemplate>,
}

/// Fetches the page template document through the shared store and parses it.
///
/// By default every call fetches and parses the template. With
/// [`with_cache`](Self::with_cache) the document is still fetched on every call,
/// but the parse is reused until the template document's version changes.
///
/// With [`strict`](Self::strict) a template that lacks any placeholder the page
/// composer supplies is rejected as invalid instead of rendering an incomplete
/// page.
pub struct StoreTemplateProvider {
    store: Arc<dyn DocumentStore>,
    template_id: DocumentId,
    strict: bool,
    cache: Option<RwLock<Option<CachedTemplate>>>,
}

impl StoreTemplateProvider {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            template_id: DocumentId::new(DEFAULT_TEMPLATE_ID),
            strict: false,
            cache: None,
        }
    }

    /// Read the template from a different document.
    pub fn with_template_id(mut self, template_id: impl Into<DocumentId>) -> Self {
        self.template_id = template_id.into();
        self
    }

    /// Reuse the parsed template while the template document's version is unchanged.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(RwLock::new(None));
        self
    }

    /// Require every page field placeholder to be present.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn template_id(&self) -> &DocumentId {
        &self.template_id
    }

    async fn fetch_document(&self) -> Result<Document, TemplateError> {
        self.store
            .fetch(&self.template_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound { .. } => TemplateError::missing(self.template_id.clone()),
                StoreError::Unavailable { message } => {
                    TemplateError::unavailable(self.template_id.clone(), message)
                }
            })
    }

    fn parse(&self, document: &Document) -> Result<RenderTemplate, TemplateError> {
        let source = document.content_lossy();
        let template = RenderTemplate::parse(self.template_id.as_str(), &source)
            .map_err(|e| TemplateError::from_parse(self.template_id.clone(), e))?;

        if self.strict {
            let missing = template.missing_fields(&PAGE_FIELDS);
            if !missing.is_empty() {
                return Err(TemplateError::invalid(
                    self.template_id.clone(),
                    format!("missing placeholders: {}", missing.join(", ")),
                ));
            }
        }

        Ok(template)
    }

    async fn cached(&self, version: i64) -> Option<Arc<RenderTemplate>> {
        let cache = self.cache.as_ref()?.read().await;
        let template = cache
            .as_ref()
            .filter(|cached| cached.version == version)
            .map(|cached| Arc::clone(&cached.template));
        template
    }
}

#[async_trait]
impl TemplateProvider for StoreTemplateProvider {
    async fn get_template(&self) -> Result<Arc<RenderTemplate>, TemplateError> {
        let document = self.fetch_document().await?;
        let version = document.revision.version;

        if let Some(template) = self.cached(version).await {
            tracing::debug!(template_id = %self.template_id, version, "Using cached page template");
            return Ok(template);
        }

        let template = Arc::new(self.parse(&document)?);

        if let Some(cache) = &self.cache {
            *cache.write().await = Some(CachedTemplate {
                version,
                template: Arc::clone(&template),
            });
            tracing::debug!(template_id = %self.template_id, version, "Cached page template");
        }

        Ok(template)
    }
}
