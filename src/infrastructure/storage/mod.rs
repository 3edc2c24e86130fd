//! Storage infrastructure - Backend selection, pooling and migrations

mod factory;
pub mod migrations;
mod postgres;

pub use factory::{Repositories, StorageConfig, StorageFactory};
pub use migrations::{run_storage_migrations, Migration, Migrator, PostgresMigrator};
pub use postgres::{connect, map_sqlx_error, PostgresConfig};
