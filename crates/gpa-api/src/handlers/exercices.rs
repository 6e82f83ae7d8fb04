//! Exercice handlers

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use gpa_core::domain::Exercice;

use crate::dto::ExerciceRequest;
use crate::error::ErrorResponse;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ErrorResponse>;

/// GET /api/exercices
pub async fn list(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Vec<Exercice>> {
    let list = state.exercices.list().await?;
    Ok(Json(ApiResponse::success(list)))
}

/// GET /api/exercices/{id}
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Exercice> {
    let exercice = state.exercices.get(id).await?;
    Ok(Json(ApiResponse::success(exercice)))
}

/// POST /api/exercices
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ExerciceRequest>,
) -> ApiResult<Exercice> {
    user.require_admin()?;
    payload.validate()?;
    let created = state.exercices.create(payload.into()).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// PUT /api/exercices/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<ExerciceRequest>,
) -> ApiResult<Exercice> {
    user.require_admin()?;
    payload.validate()?;
    let updated = state.exercices.update(id, payload.into()).await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// DELETE /api/exercices/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    user.require_admin()?;
    state.exercices.delete(id).await?;
    Ok(Json(ApiResponse::success(())))
}
