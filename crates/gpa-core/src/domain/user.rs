//! User domain entity

use chrono::{DateTime, Utc};
use gpa_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub nom: String,
    pub prenom: String,
    pub username: String,

    #[validate(email)]
    pub email: String,

    pub actif: bool,
    pub service_line_id: Option<EntityId>,

    /// Role names (profils) held by this user, e.g. ADMINISTRATEUR.
    pub profils: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nom, self.prenom)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.profils.iter().any(|p| p == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_role() {
        let user = User {
            id: 1,
            nom: "Dupont".to_string(),
            prenom: "Jean".to_string(),
            username: "jdupont".to_string(),
            email: "jean.dupont@example.com".to_string(),
            actif: true,
            service_line_id: None,
            profils: vec!["COLLABORATEUR".to_string()],
            created_at: Utc::now(),
            updated_at: None,
        };
        assert!(user.has_role("COLLABORATEUR"));
        assert!(!user.has_role("ADMINISTRATEUR"));
        assert_eq!(user.full_name(), "Dupont Jean");
    }
}
