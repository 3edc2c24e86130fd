//! HF repository registration repository implementations

mod in_memory;
mod postgres_repository;

pub use in_memory::InMemoryHfModelRepoRepository;
pub use postgres_repository::PostgresHfModelRepoRepository;
