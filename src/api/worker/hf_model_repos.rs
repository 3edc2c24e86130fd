//! HF repository registration handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::middleware::RequireScope;
use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateHfModelRepoRequest, HfModelRepoResponse, Json};
use crate::domain::{DomainError, HfRepoName};

fn parse_name(name: String) -> Result<HfRepoName, ApiError> {
    HfRepoName::new(name).map_err(|e| ApiError::from(DomainError::from(e)))
}

/// POST /worker/hf-model-repos
pub async fn create_hf_model_repo(
    State(state): State<AppState>,
    RequireScope(scope): RequireScope,
    Json(request): Json<CreateHfModelRepoRequest>,
) -> Result<(StatusCode, Json<HfModelRepoResponse>), ApiError> {
    let name = parse_name(request.name)?;
    let repo = state.hf_model_repos.create_hf_model_repo(name, &scope).await?;

    Ok((StatusCode::CREATED, Json(HfModelRepoResponse::from(&repo))))
}

/// GET /worker/hf-model-repos/{name}
pub async fn get_hf_model_repo(
    State(state): State<AppState>,
    RequireScope(scope): RequireScope,
    Path(name): Path<String>,
) -> Result<Json<HfModelRepoResponse>, ApiError> {
    let name = parse_name(name)?;
    let repo = state.hf_model_repos.get_hf_model_repo(&name, &scope).await?;

    Ok(Json(HfModelRepoResponse::from(&repo)))
}
