// ============================================================================
// GPA Core - Plan Action Entity
// File: crates/gpa-core/src/domain/plan_action.rs
// Description: Yearly strategic plan owning a tree of variable actions
// ============================================================================

use chrono::{DateTime, Utc};
use gpa_shared::EntityId;
use serde::{Deserialize, Serialize};

/// Plan lifecycle. Transitions are forward-only; there is no way back
/// once a plan reaches `Verrouille`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStatus {
    #[serde(rename = "PLANIFICATION")]
    Planification,
    #[serde(rename = "EN_COURS")]
    EnCours,
    #[serde(rename = "SUIVI_REALISATION")]
    SuiviRealisation,
    #[serde(rename = "VERROUILLE")]
    Verrouille,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Planification => "PLANIFICATION",
            PlanStatus::EnCours => "EN_COURS",
            PlanStatus::SuiviRealisation => "SUIVI_REALISATION",
            PlanStatus::Verrouille => "VERROUILLE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PLANIFICATION" => Some(PlanStatus::Planification),
            "EN_COURS" => Some(PlanStatus::EnCours),
            "SUIVI_REALISATION" => Some(PlanStatus::SuiviRealisation),
            "VERROUILLE" => Some(PlanStatus::Verrouille),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            PlanStatus::Planification => 0,
            PlanStatus::EnCours => 1,
            PlanStatus::SuiviRealisation => 2,
            PlanStatus::Verrouille => 3,
        }
    }

    /// Forward-only state machine; skipping ahead is allowed.
    pub fn can_transition_to(&self, next: PlanStatus) -> bool {
        next.rank() > self.rank()
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, PlanStatus::Verrouille)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAction {
    pub id: EntityId,
    pub titre: String,
    pub description: Option<String>,
    pub statut: PlanStatus,
    pub exercice_id: EntityId,
    pub created_by: Option<EntityId>,
    pub created_at: DateTime<Utc>,
}

impl PlanAction {
    /// Variable-action edits are rejected once the plan is locked.
    pub fn allows_variable_edits(&self) -> bool {
        !self.statut.is_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_allowed() {
        assert!(PlanStatus::Planification.can_transition_to(PlanStatus::EnCours));
        assert!(PlanStatus::Planification.can_transition_to(PlanStatus::Verrouille));
        assert!(PlanStatus::EnCours.can_transition_to(PlanStatus::SuiviRealisation));
        assert!(PlanStatus::SuiviRealisation.can_transition_to(PlanStatus::Verrouille));
    }

    #[test]
    fn test_reverse_transitions_rejected() {
        assert!(!PlanStatus::Verrouille.can_transition_to(PlanStatus::SuiviRealisation));
        assert!(!PlanStatus::EnCours.can_transition_to(PlanStatus::Planification));
        assert!(!PlanStatus::EnCours.can_transition_to(PlanStatus::EnCours));
    }

    #[test]
    fn test_locked_plan_blocks_edits() {
        let plan = PlanAction {
            id: 1,
            titre: "Plan 2025".to_string(),
            description: None,
            statut: PlanStatus::Verrouille,
            exercice_id: 1,
            created_by: None,
            created_at: Utc::now(),
        };
        assert!(!plan.allows_variable_edits());
    }

    #[test]
    fn test_status_roundtrip() {
        for s in [
            PlanStatus::Planification,
            PlanStatus::EnCours,
            PlanStatus::SuiviRealisation,
            PlanStatus::Verrouille,
        ] {
            assert_eq!(PlanStatus::from_str(s.as_str()), Some(s));
        }
        assert_eq!(PlanStatus::from_str("UNKNOWN"), None);
    }
}
