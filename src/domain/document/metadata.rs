//! Page metadata derived from a document and its revision.

use super::RevisionMetadata;

/// Request-scoped values injected into the page template alongside the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    /// First line of the raw document content.
    pub title: String,

    /// Revision time formatted for display.
    pub timestamp: String,

    /// Revision version, unchanged.
    pub version: i64,
}

impl PageMetadata {
    /// Projects raw content and revision metadata into page metadata.
    pub fn extract(raw: &[u8], revision: &RevisionMetadata) -> Self {
        Self {
            title: first_line(raw),
            timestamp: revision.timestamp.to_page_string(),
            version: revision.version,
        }
    }
}

/// Returns the content up to the first line break, without the break itself.
///
/// A `\r` preceding the `\n` is dropped as well. Empty content yields an empty
/// title.
pub fn first_line(raw: &[u8]) -> String {
    let line = match raw.iter().position(|&b| b == b'\n') {
        Some(end) => &raw[..end],
        None => raw,
    };
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
