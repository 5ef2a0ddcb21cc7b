//! Document Store Port - Read access to stored, versioned documents.
//!
//! The render pipeline depends on this trait; adapters (in-memory, local
//! filesystem, PostgreSQL) provide the implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::document::Document;
use crate::domain::foundation::DocumentId;

/// Port for fetching documents by identifier.
///
/// # Contract
///
/// Implementations must:
/// - Return the latest revision of the document with its content and metadata
/// - Report an absent document as [`StoreError::NotFound`], never as `Unavailable`
/// - Report transport, backend and read failures as [`StoreError::Unavailable`]
/// - Be safe to share across concurrent requests (one handle per process)
///
/// # Usage
///
/// ```rust,ignore
/// let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
///
/// match store.fetch(&DocumentId::new("intro")).await {
///     Ok(doc) => println!("v{}: {} bytes", doc.revision.version, doc.content.len()),
///     Err(StoreError::NotFound { id }) => println!("no document {id}"),
///     Err(e) => eprintln!("store failed: {e}"),
/// }
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the latest revision of a document.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if the identifier has no stored document
    /// - `StoreError::Unavailable` on backend or read failure
    async fn fetch(&self, id: &DocumentId) -> Result<Document, StoreError>;
}

/// Errors that can occur while fetching documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No document is stored under the identifier.
    #[error("Document not found: {id}")]
    NotFound { id: DocumentId },

    /// The backend could not be reached or the content could not be read.
    #[error("Document store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    /// Creates a not found error.
    pub fn not_found(id: DocumentId) -> Self {
        Self::NotFound { id }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_identifier() {
        let err = StoreError::not_found(DocumentId::new("no-such-doc"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Document not found: no-such-doc");
    }

    #[test]
    fn unavailable_displays_message() {
        let err = StoreError::unavailable("connection refused");
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Document store unavailable: connection refused"
        );
    }
}
