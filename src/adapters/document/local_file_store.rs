//! Local Filesystem Document Store Adapter - Implementation of DocumentStore.
//!
//! Reads documents stored as one file per revision in a per-document directory.
//! The revision timestamp is the revision file's modification time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs;

use crate::domain::document::{Document, RevisionMetadata};
use crate::domain::foundation::{DocumentId, Timestamp};
use crate::ports::{DocumentStore, StoreError};

const REVISION_EXTENSION: &str = "rev";

/// Local filesystem storage for documents.
///
/// # Directory Structure
///
/// ```text
/// {root}/
/// ├── intro/
/// │   ├── 1.rev
/// │   ├── 2.rev
/// │   └── 3.rev
/// └── doc-template.html/
///     └── 1.rev
/// ```
///
/// The highest numbered revision is the current one. Files that do not match
/// `{version}.rev` are ignored. Identifiers that are not a single path segment
/// (empty, `..`, containing a separator) are never looked up.
///
/// # Usage
///
/// ```rust,ignore
/// let store = LocalFileDocumentStore::new("/var/lib/doc-renderer");
/// let doc = store.fetch(&DocumentId::new("intro")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalFileDocumentStore {
    root: PathBuf,
}

impl LocalFileDocumentStore {
    /// Creates a store reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory holding a document's revisions.
    fn document_dir(&self, id: &DocumentId) -> PathBuf {
        self.root.join(id.as_str())
    }

    /// Parses a version number from a file name like "3.rev".
    fn parse_version(file_name: &str) -> Option<i64> {
        let stem = file_name.strip_suffix(REVISION_EXTENSION)?.strip_suffix('.')?;
        if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        stem.parse().ok()
    }

    /// Finds the highest numbered revision file in a document directory.
    async fn latest_revision(
        &self,
        id: &DocumentId,
        dir: &Path,
    ) -> Result<Option<(i64, PathBuf)>, StoreError> {
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::not_found(id.clone()))
            }
            Err(e) => {
                return Err(StoreError::unavailable(format!(
                    "Failed to read document directory {}: {}",
                    dir.display(),
                    e
                )))
            }
        };

        let mut latest: Option<(i64, PathBuf)> = None;
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StoreError::unavailable(format!("Failed to read directory entry: {}", e))
        })? {
            let file_name = entry.file_name();
            let Some(version) = Self::parse_version(&file_name.to_string_lossy()) else {
                continue;
            };
            if latest.as_ref().map_or(true, |(current, _)| version > *current) {
                latest = Some((version, entry.path()));
            }
        }

        Ok(latest)
    }

    /// Converts SystemTime to Timestamp.
    fn system_time_to_timestamp(system_time: SystemTime) -> Timestamp {
        let datetime: DateTime<Utc> = system_time.into();
        Timestamp::from_datetime(datetime)
    }
}

#[async_trait]
impl DocumentStore for LocalFileDocumentStore {
    async fn fetch(&self, id: &DocumentId) -> Result<Document, StoreError> {
        if !id.is_single_path_segment() {
            return Err(StoreError::not_found(id.clone()));
        }

        let dir = self.document_dir(id);
        let (version, path) = self
            .latest_revision(id, &dir)
            .await?
            .ok_or_else(|| StoreError::not_found(id.clone()))?;

        let read_error = |e: std::io::Error| match e.kind() {
            ErrorKind::NotFound => StoreError::not_found(id.clone()),
            _ => StoreError::unavailable(format!("Failed to read {}: {}", path.display(), e)),
        };

        let content = fs::read(&path).await.map_err(read_error)?;
        let modified = fs::metadata(&path)
            .await
            .and_then(|meta| meta.modified())
            .map_err(read_error)?;

        Ok(Document::new(
            id.clone(),
            content,
            RevisionMetadata::new(version, Self::system_time_to_timestamp(modified)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_revision(root: &Path, id: &str, file_name: &str, content: &[u8]) {
        let dir = root.join(id);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(file_name), content).unwrap();
    }

    #[test]
    fn parse_version_accepts_numbered_revisions() {
        assert_eq!(LocalFileDocumentStore::parse_version("1.rev"), Some(1));
        assert_eq!(LocalFileDocumentStore::parse_version("42.rev"), Some(42));
    }

    #[test]
    fn parse_version_rejects_other_files() {
        assert_eq!(LocalFileDocumentStore::parse_version("rev"), None);
        assert_eq!(LocalFileDocumentStore::parse_version(".rev"), None);
        assert_eq!(LocalFileDocumentStore::parse_version("-1.rev"), None);
        assert_eq!(LocalFileDocumentStore::parse_version("1.rev.tmp"), None);
        assert_eq!(LocalFileDocumentStore::parse_version("notes.txt"), None);
    }

    #[tokio::test]
    async fn fetch_returns_latest_revision() {
        let temp = TempDir::new().unwrap();
        write_revision(temp.path(), "intro", "1.rev", b"old");
        write_revision(temp.path(), "intro", "10.rev", b"newest");
        write_revision(temp.path(), "intro", "2.rev", b"older");
        write_revision(temp.path(), "intro", "README", b"ignored");
        let store = LocalFileDocumentStore::new(temp.path());

        let doc = store.fetch(&DocumentId::new("intro")).await.unwrap();

        assert_eq!(doc.content, b"newest");
        assert_eq!(doc.revision.version, 10);
        let age = Utc::now().signed_duration_since(*doc.revision.timestamp.as_datetime());
        assert!(age.num_seconds() < 60);
    }

    #[tokio::test]
    async fn fetch_reads_dotted_identifiers() {
        let temp = TempDir::new().unwrap();
        write_revision(temp.path(), "notes.txt", "1.rev", b"<b>hi</b>");
        let store = LocalFileDocumentStore::new(temp.path());

        let doc = store.fetch(&DocumentId::new("notes.txt")).await.unwrap();

        assert_eq!(doc.content, b"<b>hi</b>");
    }

    #[tokio::test]
    async fn missing_document_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = LocalFileDocumentStore::new(temp.path());

        let err = store.fetch(&DocumentId::new("no-such-doc")).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn directory_without_revisions_is_not_found() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("empty")).unwrap();
        let store = LocalFileDocumentStore::new(temp.path());

        let err = store.fetch(&DocumentId::new("empty")).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn unsafe_identifiers_are_not_found() {
        let temp = TempDir::new().unwrap();
        write_revision(temp.path(), "secret", "1.rev", b"x");
        let store = LocalFileDocumentStore::new(temp.path().join("docs"));

        for id in ["", "..", "../secret", "a/b"] {
            let err = store.fetch(&DocumentId::new(id)).await.unwrap_err();
            assert!(err.is_not_found(), "expected not found for {id:?}");
        }
    }
}
