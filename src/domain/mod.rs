//! Domain layer containing the render pipeline's pure logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps)
//! - `document` - Documents, revisions, render mode classification, page metadata
//! - `template` - Page template parsing and page composition

pub mod document;
pub mod foundation;
pub mod template;
