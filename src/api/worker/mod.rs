//! Worker-facing API endpoints
//!
//! Internal callers resolve and publish models without project scoping and
//! manage HF repository registrations on behalf of a tenant. Callers still
//! present a scope; model IDs and repository names may contain `/`.

pub mod hf_model_repos;
pub mod models;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

pub fn create_worker_router() -> Router<AppState> {
    Router::new()
        .route(
            "/models/{*model_id}",
            get(models::get_model).patch(models::update_model),
        )
        .route("/hf-model-repos", post(hf_model_repos::create_hf_model_repo))
        .route("/hf-model-repos/{*name}", get(hf_model_repos::get_hf_model_repo))
}
