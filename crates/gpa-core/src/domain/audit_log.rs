//! Audit log entry for entity mutations

use chrono::{DateTime, Utc};
use gpa_shared::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: EntityId,
    /// Action tag, e.g. "variableaction_created".
    pub action: String,
    pub user_id: Option<EntityId>,
    pub details: String,
    pub entity_type: String,
    pub entity_id: EntityId,
    pub created_at: DateTime<Utc>,
}
