//! Template adapters - Implementations of the TemplateProvider port.

mod store_template_provider;

pub use store_template_provider::StoreTemplateProvider;
