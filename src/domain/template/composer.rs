//! Page composition: executes a parsed template against a rendered document.

use thiserror::Error;

use super::{RenderTemplate, Segment};
use crate::domain::document::PageMetadata;

pub const TITLE_FIELD: &str = "Title";
pub const DOC_BODY_FIELD: &str = "DocBody";
pub const TIMESTAMP_FIELD: &str = "Timestamp";
pub const VERSION_FIELD: &str = "Version";

/// Every field the composer supplies to a page template.
pub const PAGE_FIELDS: [&str; 4] = [TITLE_FIELD, DOC_BODY_FIELD, TIMESTAMP_FIELD, VERSION_FIELD];

/// Template execution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    #[error("template '{template}' references unknown field '{field}'")]
    UnknownField { template: String, field: String },
}

/// Executes `template` with the rendered `body` and page metadata.
///
/// Values are inserted verbatim; the body is already HTML and the title is
/// copied from the document as-is.
pub fn compose(
    template: &RenderTemplate,
    body: &str,
    metadata: &PageMetadata,
) -> Result<String, CompositionError> {
    let version = metadata.version.to_string();
    let mut page = String::with_capacity(body.len() + 512);

    for segment in template.segments() {
        match segment {
            Segment::Text(text) => page.push_str(text),
            Segment::Field(name) => {
                let value = match name.as_str() {
                    TITLE_FIELD => metadata.title.as_str(),
                    DOC_BODY_FIELD => body,
                    TIMESTAMP_FIELD => metadata.timestamp.as_str(),
                    VERSION_FIELD => version.as_str(),
                    _ => {
                        return Err(CompositionError::UnknownField {
                            template: template.name().to_string(),
                            field: name.clone(),
                        })
                    }
                };
                page.push_str(value);
            }
        }
    }

    Ok(page)
}
