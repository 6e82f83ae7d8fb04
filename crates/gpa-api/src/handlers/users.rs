//! User and profil handlers (admin scope)

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use gpa_core::domain::{Profil, User};

use crate::dto::{ProfilRequest, UserRequest};
use crate::error::ErrorResponse;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ErrorResponse>;

/// GET /api/users
pub async fn list(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Vec<User>> {
    user.require_admin()?;
    let list = state.users.list().await?;
    Ok(Json(ApiResponse::success(list)))
}

/// GET /api/users/{id}
pub async fn get(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<User> {
    // A user may read their own record; anything else is admin-only.
    if user.id != id {
        user.require_admin()?;
    }
    let found = state.users.get(id).await?;
    Ok(Json(ApiResponse::success(found)))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<UserRequest>,
) -> ApiResult<User> {
    user.require_admin()?;
    payload.validate()?;
    let created = state.users.create(payload.into()).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UserRequest>,
) -> ApiResult<User> {
    user.require_admin()?;
    payload.validate()?;
    let updated = state.users.update(id, payload.into()).await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// DELETE /api/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    user.require_admin()?;
    state.users.delete(id).await?;
    Ok(Json(ApiResponse::success(())))
}

/// GET /api/profils
pub async fn list_profils(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Vec<Profil>> {
    let list = state.users.list_profils().await?;
    Ok(Json(ApiResponse::success(list)))
}

/// POST /api/profils
pub async fn create_profil(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ProfilRequest>,
) -> ApiResult<Profil> {
    user.require_admin()?;
    payload.validate()?;
    let created = state.users.create_profil(&payload.nom).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// DELETE /api/profils/{id}
pub async fn delete_profil(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    user.require_admin()?;
    state.users.delete_profil(id).await?;
    Ok(Json(ApiResponse::success(())))
}
