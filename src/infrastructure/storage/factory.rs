//! Storage factory for runtime backend selection

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, HfModelRepoRepository, ModelRepository};
use crate::infrastructure::hf_repo::{InMemoryHfModelRepoRepository, PostgresHfModelRepoRepository};
use crate::infrastructure::model::{InMemoryModelRepository, PostgresModelRepository};

use super::migrations::run_storage_migrations;
use super::postgres::{connect, PostgresConfig};

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres {
        config: PostgresConfig,
        run_migrations: bool,
    },
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }
}

/// The repositories backing the registry, sharing one backend
#[derive(Clone)]
pub struct Repositories {
    pub models: Arc<dyn ModelRepository>,
    pub hf_model_repos: Arc<dyn HfModelRepoRepository>,
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}

/// Factory for creating repository instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates the repositories for the configured backend
    pub async fn create(config: &StorageConfig) -> Result<Repositories, DomainError> {
        match config {
            StorageConfig::InMemory => {
                info!("Using in-memory storage");
                Ok(Self::create_in_memory())
            }
            StorageConfig::Postgres {
                config,
                run_migrations,
            } => {
                info!(
                    max_connections = config.max_connections,
                    "Using PostgreSQL storage"
                );
                let pool = connect(config).await?;

                if *run_migrations {
                    run_storage_migrations(&pool).await?;
                }

                Ok(Repositories {
                    models: Arc::new(PostgresModelRepository::new(pool.clone())),
                    hf_model_repos: Arc::new(PostgresHfModelRepoRepository::new(pool)),
                })
            }
        }
    }

    /// Creates in-memory repositories
    pub fn create_in_memory() -> Repositories {
        Repositories {
            models: Arc::new(InMemoryModelRepository::new()),
            hf_model_repos: Arc::new(InMemoryHfModelRepoRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_repositories() {
        let repos = StorageFactory::create(&StorageConfig::in_memory()).await.unwrap();

        let models = repos.models.find(&Default::default()).await.unwrap();
        assert!(models.is_empty());
    }
}
