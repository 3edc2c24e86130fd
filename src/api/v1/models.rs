//! Model endpoint handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use crate::api::middleware::RequireScope;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CreateModelRequest, Json, ListModelsQuery, ModelResponse, ModelsResponse,
    UpdateModelRequest,
};
use crate::domain::{DomainError, ModelId, ModelSpec};

pub(crate) fn parse_model_id(model_id: String) -> Result<ModelId, ApiError> {
    ModelId::new(model_id).map_err(|e| ApiError::from(DomainError::from(e)))
}

/// POST /v1/models
pub async fn create_model(
    State(state): State<AppState>,
    RequireScope(scope): RequireScope,
    Json(request): Json<CreateModelRequest>,
) -> Result<(StatusCode, Json<ModelResponse>), ApiError> {
    let spec = ModelSpec {
        model_id: parse_model_id(request.model_id)?,
        tenant_id: scope.tenant_id,
        organization_id: scope.organization_id,
        project_id: scope.project_id,
        path: request.path,
        is_published: request.is_published,
    };

    let model = state.model_store.create_model(spec).await?;

    Ok((StatusCode::CREATED, Json(ModelResponse::from(&model))))
}

/// GET /v1/models
pub async fn list_models(
    State(state): State<AppState>,
    RequireScope(scope): RequireScope,
    Query(query): Query<ListModelsQuery>,
) -> Result<Json<ModelsResponse>, ApiError> {
    let models = state
        .model_store
        .list_models_by_project_id(&scope.project_id, query.only_published)
        .await?;

    Ok(Json(ModelsResponse::new(&models)))
}

/// GET /v1/models/{model_id}
pub async fn get_model(
    State(state): State<AppState>,
    RequireScope(scope): RequireScope,
    Path(model_id): Path<String>,
) -> Result<Json<ModelResponse>, ApiError> {
    let model_id = parse_model_id(model_id)?;

    let model = state
        .model_store
        .get_published_model_by_model_id_and_project_id(&model_id, &scope.project_id)
        .await?;

    Ok(Json(ModelResponse::from(&model)))
}

/// PATCH /v1/models/{model_id}
pub async fn update_model(
    State(state): State<AppState>,
    RequireScope(scope): RequireScope,
    Path(model_id): Path<String>,
    Json(request): Json<UpdateModelRequest>,
) -> Result<Json<ModelResponse>, ApiError> {
    let model_id = parse_model_id(model_id)?;

    state
        .model_store
        .update_model_in_project(&model_id, &scope.project_id, request.is_published)
        .await?;

    let updated = state.model_store.get_model_by_model_id(&model_id).await?;
    Ok(Json(ModelResponse::from(&updated)))
}

/// DELETE /v1/models/{model_id}
pub async fn delete_model(
    State(state): State<AppState>,
    RequireScope(scope): RequireScope,
    Path(model_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let model_id = parse_model_id(model_id)?;

    state
        .model_store
        .delete_model(&model_id, &scope.project_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/published-models
pub async fn list_published_models(
    State(state): State<AppState>,
    RequireScope(_scope): RequireScope,
) -> Result<Json<ModelsResponse>, ApiError> {
    let models = state.model_store.list_all_published_models().await?;

    Ok(Json(ModelsResponse::new(&models)))
}

/// GET /v1/published-models/{model_id}
pub async fn get_published_model(
    State(state): State<AppState>,
    RequireScope(_scope): RequireScope,
    Path(model_id): Path<String>,
) -> Result<Json<ModelResponse>, ApiError> {
    let model_id = parse_model_id(model_id)?;

    let model = state
        .model_store
        .get_published_model_by_model_id(&model_id)
        .await?;

    Ok(Json(ModelResponse::from(&model)))
}
