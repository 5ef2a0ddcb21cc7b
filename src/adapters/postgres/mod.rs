//! PostgreSQL adapters - Database implementations for storage ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresDocumentStore` - Latest-revision document reads

mod document_store;

pub use document_store::PostgresDocumentStore;
