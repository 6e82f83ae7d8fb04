//! HTTP error mapping for domain errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use gpa_core::error::DomainError;
use gpa_security::JwtError;

use crate::response::ApiResponse;

/// Error reply carrying the envelope and the mapped status code.
pub struct ErrorResponse {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self { status, code, message: message.into() }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiResponse::<()>::error(self.code, &self.message)),
        )
            .into_response()
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let (status, code) = match &err {
            DomainError::ValidationError(_) | DomainError::WeightSumInvalid { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            DomainError::Authorization(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            DomainError::VariableActionNotFound(_)
            | DomainError::PlanActionNotFound(_)
            | DomainError::ExerciceNotFound(_)
            | DomainError::ServiceLineNotFound(_)
            | DomainError::UserNotFound(_)
            | DomainError::ProfilNotFound(_)
            | DomainError::NotificationNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            DomainError::HasChildren(_) => (StatusCode::CONFLICT, "HAS_CHILDREN"),
            DomainError::CycleDetected(_) => (StatusCode::CONFLICT, "CYCLE_DETECTED"),
            DomainError::ParentLocked(_) => (StatusCode::CONFLICT, "PARENT_LOCKED"),
            DomainError::VariableActionLocked(_) => {
                (StatusCode::CONFLICT, "VARIABLE_ACTION_LOCKED")
            }
            DomainError::PlanLocked(_) => (StatusCode::CONFLICT, "PLAN_LOCKED"),
            DomainError::MaxDepthExceeded { .. } => (StatusCode::CONFLICT, "MAX_DEPTH_EXCEEDED"),
            DomainError::InvalidStatusTransition { .. } => {
                (StatusCode::CONFLICT, "INVALID_STATUS_TRANSITION")
            }
            DomainError::DatabaseError(_) | DomainError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };
        Self::new(status, code, err.to_string())
    }
}

impl From<JwtError> for ErrorResponse {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => Self::unauthorized("Token expired"),
            other => Self::unauthorized(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ErrorResponse {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_family_maps_to_409() {
        for err in [
            DomainError::HasChildren(1),
            DomainError::CycleDetected(1),
            DomainError::ParentLocked(1),
            DomainError::VariableActionLocked(1),
            DomainError::PlanLocked(1),
            DomainError::MaxDepthExceeded { parent_id: 1, level: 4 },
            DomainError::InvalidStatusTransition {
                from: "VERROUILLE".to_string(),
                to: "EN_COURS".to_string(),
            },
        ] {
            assert_eq!(ErrorResponse::from(err).status, StatusCode::CONFLICT);
        }
    }

    #[test]
    fn test_not_found_and_validation() {
        assert_eq!(
            ErrorResponse::from(DomainError::VariableActionNotFound(1)).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorResponse::from(DomainError::ValidationError("x".to_string())).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorResponse::from(DomainError::Authorization("x".to_string())).status,
            StatusCode::FORBIDDEN
        );
    }
}
