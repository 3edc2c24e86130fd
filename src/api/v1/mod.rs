//! Tenant-facing API endpoints
//!
//! Every route requires a caller scope; models are created, listed and
//! mutated within the caller's project. Model IDs may contain `/`, so the
//! ID segments are catch-all captures.

pub mod models;

use axum::{
    routing::get,
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/models", get(models::list_models).post(models::create_model))
        .route(
            "/models/{*model_id}",
            get(models::get_model)
                .patch(models::update_model)
                .delete(models::delete_model),
        )
        .route("/published-models", get(models::list_published_models))
        .route(
            "/published-models/{*model_id}",
            get(models::get_published_model),
        )
}
