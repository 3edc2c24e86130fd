//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::{HfModelRepoRegistrar, ModelStore};
use crate::infrastructure::storage::Repositories;

/// Shared services handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub model_store: Arc<ModelStore>,
    pub hf_model_repos: Arc<HfModelRepoRegistrar>,
}

impl AppState {
    pub fn new(model_store: ModelStore, hf_model_repos: HfModelRepoRegistrar) -> Self {
        Self {
            model_store: Arc::new(model_store),
            hf_model_repos: Arc::new(hf_model_repos),
        }
    }

    /// Wire the services over a set of repositories
    pub fn from_repositories(repositories: Repositories) -> Self {
        Self::new(
            ModelStore::new(repositories.models),
            HfModelRepoRegistrar::new(repositories.hf_model_repos),
        )
    }
}
