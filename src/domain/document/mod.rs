//! Document domain - stored documents, render mode classification and
//! page metadata extraction.

mod metadata;
mod render_mode;
mod revision;

pub use metadata::{first_line, PageMetadata};
pub use render_mode::RenderMode;
pub use revision::{Document, RevisionMetadata};
