//! Model Registry
//!
//! Multi-tenant metadata store for machine-learning models:
//! - Globally unique model IDs, owned by a tenant, organization and project
//! - Project-scoped and published-catalog lookups
//! - Tenant registrations of external (HF) model repositories
//! - In-memory or PostgreSQL storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
