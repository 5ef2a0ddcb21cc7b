//! Stored documents and their revision metadata.

use crate::domain::foundation::{DocumentId, Timestamp};

/// Metadata of one immutable revision of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionMetadata {
    /// Monotonically increasing per document lineage.
    pub version: i64,

    /// When the revision was created.
    pub timestamp: Timestamp,
}

impl RevisionMetadata {
    pub fn new(version: i64, timestamp: Timestamp) -> Self {
        Self { version, timestamp }
    }
}

/// A document as returned by a store: its latest revision's content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub content: Vec<u8>,
    pub revision: RevisionMetadata,
}

impl Document {
    pub fn new(id: DocumentId, content: impl Into<Vec<u8>>, revision: RevisionMetadata) -> Self {
        Self {
            id,
            content: content.into(),
            revision,
        }
    }

    /// Content decoded as text, replacing invalid UTF-8 sequences.
    pub fn content_lossy(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}
