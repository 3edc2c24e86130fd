//! HTTP API layer

pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;
pub mod v1;
pub mod worker;

pub use router::create_router;
pub use state::AppState;
