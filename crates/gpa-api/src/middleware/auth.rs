//! Bearer-token authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use gpa_core::navigation::ensure_any_role;
use gpa_shared::constants::ROLE_ADMINISTRATEUR;

use crate::error::ErrorResponse;
use crate::state::AppState;

/// Caller identity recovered from the access token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub roles: Vec<String>,
}

impl CurrentUser {
    /// Admin gate for user/profile/service-line management routes.
    pub fn require_admin(&self) -> Result<(), ErrorResponse> {
        ensure_any_role(&self.roles, &[ROLE_ADMINISTRATEUR])?;
        Ok(())
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ErrorResponse::unauthorized("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ErrorResponse::unauthorized("Expected a bearer token"))?;

        let claims = state.jwt.validate_token(token)?;
        let id = claims.user_id()?;
        Ok(CurrentUser { id, roles: claims.roles })
    }
}
