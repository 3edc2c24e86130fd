use axum::extract::{Path, State};

use crate::api::middleware::RequireScope;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ModelResponse, UpdateModelRequest};
use crate::api::v1::models::parse_model_id;

/// GET /worker/models/{model_id}
pub async fn get_model(
    State(state): State<AppState>,
    RequireScope(_scope): RequireScope,
    Path(model_id): Path<String>,
) -> Result<Json<ModelResponse>, ApiError> {
    let model_id = parse_model_id(model_id)?;
    let model = state.model_store.get_model_by_model_id(&model_id).await?;

    Ok(Json(ModelResponse::from(&model)))
}

/// PATCH /worker/models/{model_id}
///
/// Unscoped: the worker acts for whichever project owns the model.
pub async fn update_model(
    State(state): State<AppState>,
    RequireScope(_scope): RequireScope,
    Path(model_id): Path<String>,
    Json(request): Json<UpdateModelRequest>,
) -> Result<Json<ModelResponse>, ApiError> {
    let model_id = parse_model_id(model_id)?;

    state
        .model_store
        .update_model(&model_id, request.is_published)
        .await?;

    let model = state.model_store.get_model_by_model_id(&model_id).await?;
    Ok(Json(ModelResponse::from(&model)))
}
