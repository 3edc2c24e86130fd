//! API middleware components

pub mod logging;
pub mod scope;

pub use logging::logging_middleware;
pub use scope::RequireScope;
