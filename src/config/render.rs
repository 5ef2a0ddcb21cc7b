//! Render pipeline configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::DEFAULT_TEMPLATE_ID;

/// Settings for the page template and markdown rendering
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Identifier of the page template document
    #[serde(default = "default_template_id")]
    pub template_id: String,

    /// Reuse the parsed template until the template document changes
    #[serde(default)]
    pub cache_template: bool,

    /// Reject templates lacking any page field placeholder
    #[serde(default)]
    pub strict_template: bool,

    /// Disable markdown extensions (tables, footnotes, ...) and accept only CommonMark
    #[serde(default)]
    pub commonmark_only: bool,
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.template_id.trim().is_empty() {
            return Err(ValidationError::EmptyTemplateId);
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template_id: default_template_id(),
            cache_template: false,
            strict_template: false,
            commonmark_only: false,
        }
    }
}

fn default_template_id() -> String {
    DEFAULT_TEMPLATE_ID.to_string()
}
