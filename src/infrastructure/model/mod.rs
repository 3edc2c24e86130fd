//! Model repository implementations

mod in_memory;
mod postgres_repository;

pub use in_memory::InMemoryModelRepository;
pub use postgres_repository::PostgresModelRepository;
