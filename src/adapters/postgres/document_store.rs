//! PostgreSQL implementation of DocumentStore.
//!
//! Documents live in the `document_revisions` table, one row per immutable
//! revision. The latest revision is the row with the highest version.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::document::{Document, RevisionMetadata};
use crate::domain::foundation::{DocumentId, Timestamp};
use crate::ports::{DocumentStore, StoreError};

/// PostgreSQL implementation of the DocumentStore port.
///
/// The pool is created once at startup and cloned into this adapter; clones
/// share the same connections.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresDocumentStore")
            .field("pool", &"PgPool")
            .finish()
    }
}

impl PostgresDocumentStore {
    /// Creates a new store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for the latest revision of a document.
#[derive(Debug, sqlx::FromRow)]
struct RevisionRow {
    version: i64,
    content: Vec<u8>,
    created_at: DateTime<Utc>,
}

impl RevisionRow {
    fn into_document(self, id: DocumentId) -> Document {
        Document::new(
            id,
            self.content,
            RevisionMetadata::new(self.version, Timestamp::from_datetime(self.created_at)),
        )
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn fetch(&self, id: &DocumentId) -> Result<Document, StoreError> {
        let row: Option<RevisionRow> = sqlx::query_as(
            r#"
            SELECT version, content, created_at
            FROM document_revisions
            WHERE document_id = $1
            ORDER BY version DESC
            LIMIT 1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::unavailable(format!("Failed to fetch document: {}", e)))?;

        row.map(|row| row.into_document(id.clone()))
            .ok_or_else(|| StoreError::not_found(id.clone()))
    }
}
