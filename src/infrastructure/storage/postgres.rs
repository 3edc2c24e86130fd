//! PostgreSQL connection pooling and error mapping shared by the repositories

use std::time::Duration;

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::domain::DomainError;

/// PostgreSQL storage configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/model_registry".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

/// Open a connection pool for the given configuration
pub async fn connect(config: &PostgresConfig) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
}

/// Map a sqlx error to a domain error
///
/// Unique-constraint violations become `AlreadyExists` with `conflict_message`;
/// everything else is reported as a storage failure prefixed with `context`.
pub fn map_sqlx_error(error: sqlx::Error, context: &str, conflict_message: &str) -> DomainError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            return DomainError::already_exists(conflict_message);
        }
    }

    DomainError::storage(format!("{}: {}", context, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_config_default() {
        let config = PostgresConfig::default();

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.connect_timeout_secs, 30);
        assert_eq!(config.idle_timeout_secs, 600);
    }

    #[test]
    fn test_map_non_database_error_to_storage() {
        let error = map_sqlx_error(sqlx::Error::RowNotFound, "Failed to get model", "dup");

        assert!(matches!(error, DomainError::Storage { .. }));
        assert!(error.to_string().contains("Failed to get model"));
    }

    #[test]
    fn test_map_pool_timeout_to_storage() {
        let error = map_sqlx_error(sqlx::Error::PoolTimedOut, "Failed to insert model", "dup");
        assert!(matches!(error, DomainError::Storage { .. }));
    }
}
