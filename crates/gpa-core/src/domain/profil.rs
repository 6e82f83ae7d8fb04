//! Profil entity (role catalog)

use gpa_shared::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profil {
    pub id: EntityId,
    pub nom: String,
}
