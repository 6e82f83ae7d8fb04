// ============================================================================
// GPA API - Variable Action Handlers
// File: crates/gpa-api/src/handlers/variable_actions.rs
// ============================================================================
//! HTTP surface of the variable-action hierarchy.

use axum::extract::{Path, Query, State};
use axum::Json;
use validator::Validate;

use gpa_core::domain::VariableAction;
use gpa_core::hierarchy::HierarchyNode;

use crate::dto::{
    FigeRequest, HierarchyQuery, MoveQuery, VariableActionDetailDto, VariableActionRequest,
};
use crate::error::ErrorResponse;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ErrorResponse>;

/// GET /api/variable-actions
pub async fn list(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Vec<VariableAction>> {
    let list = state.variable_actions.list().await?;
    Ok(Json(ApiResponse::success(list)))
}

/// GET /api/variable-actions/{id}
pub async fn detail(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<VariableActionDetailDto> {
    let detail = state.variable_actions.detail(id).await?;
    Ok(Json(ApiResponse::success(detail.into())))
}

/// GET /api/variable-actions/hierarchy?planActionId=<id>
pub async fn hierarchy(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<HierarchyQuery>,
) -> ApiResult<Vec<HierarchyNode>> {
    let forest = state.variable_actions.hierarchy(query.plan_action_id).await?;
    Ok(Json(ApiResponse::success(forest)))
}

/// GET /api/variable-actions/dropdown/{planId}
pub async fn dropdown(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(plan_id): Path<i64>,
) -> ApiResult<Vec<VariableAction>> {
    let list = state.variable_actions.dropdown(plan_id).await?;
    Ok(Json(ApiResponse::success(list)))
}

/// POST /api/variable-actions
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<VariableActionRequest>,
) -> ApiResult<VariableAction> {
    payload.validate()?;
    let created = state
        .variable_actions
        .create(payload.into(), Some(user.id))
        .await?;
    Ok(Json(ApiResponse::success(created)))
}

/// POST /api/variable-actions/{parentId}/children
pub async fn create_child(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(parent_id): Path<i64>,
    Json(payload): Json<VariableActionRequest>,
) -> ApiResult<VariableAction> {
    payload.validate()?;
    let created = state
        .variable_actions
        .create_child(parent_id, payload.into(), Some(user.id))
        .await?;
    Ok(Json(ApiResponse::success(created)))
}

/// PUT /api/variable-actions/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<VariableActionRequest>,
) -> ApiResult<VariableAction> {
    payload.validate()?;
    let updated = state
        .variable_actions
        .update(id, payload.into(), Some(user.id))
        .await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// DELETE /api/variable-actions/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    state.variable_actions.delete(id, Some(user.id)).await?;
    Ok(Json(ApiResponse::success(())))
}

/// PUT /api/variable-actions/{id}/move?newParentId=<id>
pub async fn move_variable(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Query(query): Query<MoveQuery>,
) -> ApiResult<VariableAction> {
    let moved = state
        .variable_actions
        .move_variable(id, query.new_parent_id, Some(user.id))
        .await?;
    Ok(Json(ApiResponse::success(moved)))
}

/// PUT /api/variable-actions/{parentId}/recalculate-weights
pub async fn recalculate_weights(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(parent_id): Path<i64>,
) -> ApiResult<String> {
    state.variable_actions.recalculate_weights(parent_id).await?;
    Ok(Json(ApiResponse::success(
        "Poids recalculés avec succès".to_string(),
    )))
}

/// PUT /api/variable-actions/{id}/fige
pub async fn set_fige(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<FigeRequest>,
) -> ApiResult<VariableAction> {
    let saved = state
        .variable_actions
        .set_fige(id, payload.fige, Some(user.id))
        .await?;
    Ok(Json(ApiResponse::success(saved)))
}
