//! Notification handlers

use axum::extract::{Path, State};
use axum::Json;

use gpa_core::domain::Notification;

use crate::error::ErrorResponse;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ErrorResponse>;

/// GET /api/notifications
pub async fn list(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Vec<Notification>> {
    let list = state.notifications.list_for_user(user.id).await?;
    Ok(Json(ApiResponse::success(list)))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    state.notifications.mark_read(id).await?;
    Ok(Json(ApiResponse::success(())))
}
