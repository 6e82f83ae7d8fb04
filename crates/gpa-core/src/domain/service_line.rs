//! Service line entity

use gpa_shared::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLine {
    pub id: EntityId,
    pub nom: String,
}
