//! Service line handlers (admin scope)

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use gpa_core::domain::ServiceLine;

use crate::dto::ServiceLineRequest;
use crate::error::ErrorResponse;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ErrorResponse>;

/// GET /api/service-lines
pub async fn list(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Vec<ServiceLine>> {
    let list = state.service_lines.list().await?;
    Ok(Json(ApiResponse::success(list)))
}

/// POST /api/service-lines
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ServiceLineRequest>,
) -> ApiResult<ServiceLine> {
    user.require_admin()?;
    payload.validate()?;
    let created = state.service_lines.create(&payload.nom).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// PUT /api/service-lines/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<ServiceLineRequest>,
) -> ApiResult<ServiceLine> {
    user.require_admin()?;
    payload.validate()?;
    let renamed = state.service_lines.rename(id, &payload.nom).await?;
    Ok(Json(ApiResponse::success(renamed)))
}

/// DELETE /api/service-lines/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    user.require_admin()?;
    state.service_lines.delete(id).await?;
    Ok(Json(ApiResponse::success(())))
}
