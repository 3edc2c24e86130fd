//! Infrastructure layer - Storage backends and the services built on them

pub mod hf_repo;
pub mod logging;
pub mod model;
pub mod services;
pub mod storage;
