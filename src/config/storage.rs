//! Document storage configuration

use serde::Deserialize;

use super::database::DatabaseConfig;
use super::error::ValidationError;

/// Which DocumentStore adapter backs the service
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Revision files under `root_dir`
    #[default]
    Filesystem,
    /// `document_revisions` table in PostgreSQL
    Postgres,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Root directory for the filesystem backend
    #[serde(default = "default_root_dir")]
    pub root_dir: String,

    /// Connection settings for the postgres backend
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

impl StorageConfig {
    /// Validate storage configuration for the selected backend
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.backend {
            StorageBackend::Filesystem => {
                if self.root_dir.trim().is_empty() {
                    return Err(ValidationError::MissingRequired("STORAGE__ROOT_DIR"));
                }
                Ok(())
            }
            StorageBackend::Postgres => self
                .database
                .as_ref()
                .ok_or(ValidationError::MissingRequired("STORAGE__DATABASE__URL"))?
                .validate(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            root_dir: default_root_dir(),
            database: None,
        }
    }
}

fn default_root_dir() -> String {
    "./documents".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_filesystem_backend() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Filesystem);
        assert_eq!(config.root_dir, "./documents");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn filesystem_requires_root_dir() {
        let config = StorageConfig {
            root_dir: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("STORAGE__ROOT_DIR"))
        );
    }

    #[test]
    fn postgres_requires_database_section() {
        let config = StorageConfig {
            backend: StorageBackend::Postgres,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("STORAGE__DATABASE__URL"))
        );
    }

    #[test]
    fn deserializes_postgres_backend() {
        let json = r#"{
            "backend": "postgres",
            "database": { "url": "postgres://localhost/docs" }
        }"#;

        let config: StorageConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.backend, StorageBackend::Postgres);
        assert!(config.validate().is_ok());
        let database = config.database.unwrap();
        assert_eq!(database.max_connections, 10);
        assert!(!database.run_migrations);
    }
}
