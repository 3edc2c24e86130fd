use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::storage::{PostgresConfig, StorageConfig};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests running longer than this are cancelled with 408
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

/// Storage section as it appears in configuration files
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub postgres: PostgresConfig,
    /// Apply pending migrations when the server starts
    pub run_migrations: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            postgres: PostgresConfig::default(),
            run_migrations: true,
        }
    }
}

impl StorageSettings {
    /// Resolve the runtime storage configuration
    pub fn to_storage_config(&self) -> StorageConfig {
        match self.backend {
            StorageBackend::Memory => StorageConfig::in_memory(),
            StorageBackend::Postgres => StorageConfig::Postgres {
                config: self.postgres.clone(),
                run_migrations: self.run_migrations,
            },
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `APP__*` variables, in
    /// increasing order of precedence
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn from_toml(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(matches!(
            config.storage.to_storage_config(),
            StorageConfig::InMemory
        ));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = from_toml(
            r#"
            [logging]
            format = "json"
            "#,
        );

        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_postgres_storage_section() {
        let config = from_toml(
            r#"
            [storage]
            backend = "postgres"
            run_migrations = false

            [storage.postgres]
            url = "postgres://db/registry"
            max_connections = 4
            "#,
        );

        match config.storage.to_storage_config() {
            StorageConfig::Postgres {
                config,
                run_migrations,
            } => {
                assert_eq!(config.url, "postgres://db/registry");
                assert_eq!(config.max_connections, 4);
                assert_eq!(config.min_connections, 1);
                assert!(!run_migrations);
            }
            other => panic!("expected postgres storage, got {:?}", other),
        }
    }
}
