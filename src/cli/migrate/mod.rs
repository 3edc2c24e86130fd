//! Migrate command - applies pending schema migrations

use anyhow::bail;
use tracing::info;

use crate::config::StorageBackend;
use crate::infrastructure::storage::{connect, Migrator, PostgresMigrator};

pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    if config.storage.backend != StorageBackend::Postgres {
        bail!("Migrations require the postgres storage backend");
    }

    let migrator = PostgresMigrator::new(connect(&config.storage.postgres).await?);
    migrator.run().await?;

    let version = migrator.version().await?;
    info!(version = ?version, "Migrations complete");

    Ok(())
}
