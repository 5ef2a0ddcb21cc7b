//! Template domain - parsing page templates and composing pages from them.

mod composer;
mod parser;

pub use composer::{
    compose, CompositionError, DOC_BODY_FIELD, PAGE_FIELDS, TIMESTAMP_FIELD, TITLE_FIELD,
    VERSION_FIELD,
};
pub use parser::{RenderTemplate, Segment, TemplateParseError};
