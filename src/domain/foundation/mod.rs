//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects that form the vocabulary of the renderer domain.

mod ids;
mod timestamp;

pub use ids::DocumentId;
pub use timestamp::{Timestamp, PAGE_TIMESTAMP_FORMAT};
