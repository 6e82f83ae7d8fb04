//! Audit log handlers (admin scope)

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use gpa_core::domain::AuditLog;

use crate::error::ErrorResponse;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    pub limit: Option<i64>,
}

/// GET /api/audit-logs?limit=<n>
pub async fn recent(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<AuditQuery>,
) -> Result<Json<ApiResponse<Vec<AuditLog>>>, ErrorResponse> {
    user.require_admin()?;
    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    let logs = state.audit.recent(limit).await?;
    Ok(Json(ApiResponse::success(logs)))
}
