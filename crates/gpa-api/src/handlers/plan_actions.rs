//! Plan action handlers

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use gpa_core::domain::PlanAction;

use crate::dto::{PlanActionRequest, StatusRequest};
use crate::error::ErrorResponse;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ErrorResponse>;

/// GET /api/plan-actions
pub async fn list(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Vec<PlanAction>> {
    let list = state.plan_actions.list().await?;
    Ok(Json(ApiResponse::success(list)))
}

/// GET /api/plan-actions/{id}
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<PlanAction> {
    let plan = state.plan_actions.get(id).await?;
    Ok(Json(ApiResponse::success(plan)))
}

/// POST /api/plan-actions
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<PlanActionRequest>,
) -> ApiResult<PlanAction> {
    payload.validate()?;
    let created = state.plan_actions.create(payload.into(), Some(user.id)).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// PUT /api/plan-actions/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<PlanActionRequest>,
) -> ApiResult<PlanAction> {
    payload.validate()?;
    let updated = state
        .plan_actions
        .update(id, payload.into(), Some(user.id))
        .await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// PUT /api/plan-actions/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<StatusRequest>,
) -> ApiResult<PlanAction> {
    let updated = state
        .plan_actions
        .change_status(id, payload.statut, Some(user.id))
        .await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// DELETE /api/plan-actions/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    state.plan_actions.delete(id, Some(user.id)).await?;
    Ok(Json(ApiResponse::success(())))
}
