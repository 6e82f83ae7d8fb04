//! Exercice DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use gpa_core::repositories::NewExercice;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExerciceRequest {
    #[validate(range(min = 2000, max = 2100))]
    pub annee: i32,
    #[serde(default)]
    pub verrouille: bool,
    pub description: Option<String>,
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
}

impl From<ExerciceRequest> for NewExercice {
    fn from(req: ExerciceRequest) -> Self {
        NewExercice {
            annee: req.annee,
            verrouille: req.verrouille,
            description: req.description,
            date_debut: req.date_debut,
            date_fin: req.date_fin,
        }
    }
}
