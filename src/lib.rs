//! Doc Renderer - Stored documents rendered to HTML pages on demand
//!
//! Each request names one document. Identifiers containing a `.` are served
//! verbatim; all others are rendered from markdown and wrapped in a page
//! template populated with the document's title, revision timestamp and version.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
