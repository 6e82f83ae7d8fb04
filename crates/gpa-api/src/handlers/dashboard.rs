//! Dashboard handler

use axum::extract::State;
use axum::Json;

use gpa_core::services::DashboardStats;

use crate::error::ErrorResponse;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<DashboardStats>>, ErrorResponse> {
    let stats = state.dashboard.stats_for(user.id).await?;
    Ok(Json(ApiResponse::success(stats)))
}
