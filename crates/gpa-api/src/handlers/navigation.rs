//! Role-filtered navigation handler

use std::collections::BTreeSet;

use axum::extract::State;
use axum::Json;

use gpa_core::navigation::{filter_menu_by_roles, MenuItem};

use crate::error::ErrorResponse;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/navigation
///
/// Returns the menu subset visible to the caller's role set. The full
/// menu is static; filtering happens per request against the token's
/// role claims.
pub async fn navigation(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, ErrorResponse> {
    let roles: BTreeSet<String> = user.roles.iter().cloned().collect();
    let filtered = filter_menu_by_roles(&state.menu, &roles);
    Ok(Json(ApiResponse::success(filtered)))
}
