//! Plan action DTOs

use serde::Deserialize;
use validator::Validate;

use gpa_core::domain::PlanStatus;
use gpa_core::services::PlanActionInput;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanActionRequest {
    #[validate(length(min = 1, message = "titre is required"))]
    pub titre: String,
    pub description: Option<String>,
    pub statut: Option<PlanStatus>,
    pub exercice_id: i64,
}

impl From<PlanActionRequest> for PlanActionInput {
    fn from(req: PlanActionRequest) -> Self {
        PlanActionInput {
            titre: req.titre,
            description: req.description,
            statut: req.statut,
            exercice_id: req.exercice_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub statut: PlanStatus,
}
