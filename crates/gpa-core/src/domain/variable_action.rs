// ============================================================================
// GPA Core - Variable Action Entity
// File: crates/gpa-core/src/domain/variable_action.rs
// Description: Weighted, hierarchical sub-goal belonging to an action plan
// ============================================================================

use chrono::{DateTime, Utc};
use gpa_shared::constants::MAX_HIERARCHY_LEVEL;
use gpa_shared::EntityId;
use serde::{Deserialize, Serialize};

/// A variable action ("variable d'action"): a weighted node of a plan's
/// hierarchy, optionally nested under a parent variable action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableAction {
    pub id: EntityId,

    /// Hierarchical code: "VA1", "VA11", "VA111", ... The digit count is
    /// the node's level.
    pub code: Option<String>,

    pub description: String,

    /// Fractional share (0..=1) of the parent's allocation among siblings.
    pub poids: f64,

    /// Locked flag ("fige"): a locked node refuses new children.
    pub fige: bool,

    /// Depth within the plan's tree, root = 1.
    pub niveau: i32,

    /// Display order among siblings.
    pub ordre: Option<i32>,

    pub responsable_id: EntityId,
    pub plan_action_id: EntityId,

    /// Parent reference ("vaMere"); `None` marks a root node.
    pub va_mere_id: Option<EntityId>,

    pub created_by: Option<EntityId>,
    pub created_at: DateTime<Utc>,
}

impl VariableAction {
    pub fn is_root(&self) -> bool {
        self.va_mere_id.is_none()
    }

    /// Depth cap: nodes at the maximum level cannot acquire children.
    pub fn can_have_children(&self) -> bool {
        self.niveau < MAX_HIERARCHY_LEVEL
    }

    pub fn display_name(&self) -> String {
        match &self.code {
            Some(code) => format!("{} - {}", code, self.description),
            None => self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(niveau: i32) -> VariableAction {
        VariableAction {
            id: 1,
            code: Some("VA1".to_string()),
            description: "Augmenter la satisfaction client".to_string(),
            poids: 1.0,
            fige: false,
            niveau,
            ordre: Some(1),
            responsable_id: 7,
            plan_action_id: 3,
            va_mere_id: None,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_depth_cap() {
        assert!(sample(1).can_have_children());
        assert!(sample(3).can_have_children());
        assert!(!sample(4).can_have_children());
    }

    #[test]
    fn test_display_name() {
        let va = sample(1);
        assert_eq!(va.display_name(), "VA1 - Augmenter la satisfaction client");
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let json = serde_json::to_value(sample(2)).unwrap();
        assert!(json.get("vaMereId").is_some());
        assert!(json.get("planActionId").is_some());
        assert!(json.get("responsableId").is_some());
        assert!(json.get("va_mere_id").is_none());
    }
}
