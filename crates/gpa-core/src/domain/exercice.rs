//! Exercice entity: a yearly period scoping one or more plans.

use chrono::{DateTime, NaiveDate, Utc};
use gpa_shared::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercice {
    pub id: EntityId,
    pub annee: i32,
    pub verrouille: bool,
    pub description: Option<String>,
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
