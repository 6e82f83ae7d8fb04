//! User DTOs

use serde::Deserialize;
use validator::Validate;

use gpa_core::services::UserInput;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(length(min = 1, message = "nom is required"))]
    pub nom: String,
    #[validate(length(min = 1, message = "prenom is required"))]
    pub prenom: String,
    #[validate(length(min = 2, message = "username must be at least 2 characters"))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(default = "default_actif")]
    pub actif: bool,
    pub service_line_id: Option<i64>,
    #[serde(default)]
    pub profils: Vec<String>,
}

fn default_actif() -> bool {
    true
}

impl From<UserRequest> for UserInput {
    fn from(req: UserRequest) -> Self {
        UserInput {
            nom: req.nom,
            prenom: req.prenom,
            username: req.username,
            email: req.email,
            actif: req.actif,
            service_line_id: req.service_line_id,
            profils: req.profils,
        }
    }
}
