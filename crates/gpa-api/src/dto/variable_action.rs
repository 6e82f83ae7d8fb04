// ============================================================================
// GPA API - Variable Action DTOs
// File: crates/gpa-api/src/dto/variable_action.rs
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use gpa_core::domain::{AuditLog, VariableAction};
use gpa_core::services::{VariableActionDetail, VariableActionInput};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VariableActionRequest {
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(range(min = 0.0, max = 1.0, message = "poids must be within 0..=1"))]
    pub poids: Option<f64>,
    pub fige: Option<bool>,
    pub responsable_id: Option<i64>,
    pub plan_action_id: Option<i64>,
    pub va_mere_id: Option<i64>,
}

impl From<VariableActionRequest> for VariableActionInput {
    fn from(req: VariableActionRequest) -> Self {
        VariableActionInput {
            description: req.description,
            poids: req.poids,
            fige: req.fige,
            responsable_id: req.responsable_id,
            plan_action_id: req.plan_action_id,
            va_mere_id: req.va_mere_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FigeRequest {
    pub fige: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveQuery {
    /// Absent means "promote to root".
    pub new_parent_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyQuery {
    pub plan_action_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableActionDetailDto {
    #[serde(flatten)]
    pub action: VariableAction,
    pub audit_logs: Vec<AuditLog>,
}

impl From<VariableActionDetail> for VariableActionDetailDto {
    fn from(detail: VariableActionDetail) -> Self {
        VariableActionDetailDto {
            action: detail.action,
            audit_logs: detail.audit_logs,
        }
    }
}
