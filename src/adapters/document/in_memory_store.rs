//! In-Memory Document Store Adapter
//!
//! Keeps every revision of every document in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::document::{Document, RevisionMetadata};
use crate::domain::foundation::{DocumentId, Timestamp};
use crate::ports::{DocumentStore, StoreError};

#[derive(Debug, Clone)]
struct StoredRevision {
    content: Vec<u8>,
    revision: RevisionMetadata,
}

/// In-memory, revisioned document storage.
///
/// Each `put` appends a new immutable revision; `fetch` returns the latest.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<DocumentId, Vec<StoredRevision>>>>,
}

impl InMemoryDocumentStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new revision created now. Returns its metadata.
    pub async fn put(&self, id: impl Into<DocumentId>, content: impl Into<Vec<u8>>) -> RevisionMetadata {
        self.put_at(id, content, Timestamp::now()).await
    }

    /// Store a new revision with an explicit creation time. Returns its metadata.
    ///
    /// The version is one more than the document's latest version, starting at 1.
    pub async fn put_at(
        &self,
        id: impl Into<DocumentId>,
        content: impl Into<Vec<u8>>,
        timestamp: Timestamp,
    ) -> RevisionMetadata {
        let mut documents = self.documents.write().await;
        let revisions = documents.entry(id.into()).or_default();
        let version = revisions.last().map_or(1, |r| r.revision.version + 1);
        let revision = RevisionMetadata::new(version, timestamp);
        revisions.push(StoredRevision {
            content: content.into(),
            revision,
        });
        revision
    }

    /// Number of revisions stored for a document
    pub async fn revision_count(&self, id: &DocumentId) -> usize {
        self.documents
            .read()
            .await
            .get(id)
            .map_or(0, |revisions| revisions.len())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch(&self, id: &DocumentId) -> Result<Document, StoreError> {
        let documents = self.documents.read().await;
        let latest = documents
            .get(id)
            .and_then(|revisions| revisions.last())
            .ok_or_else(|| StoreError::not_found(id.clone()))?;

        Ok(Document::new(
            id.clone(),
            latest.content.clone(),
            latest.revision,
        ))
    }
}
