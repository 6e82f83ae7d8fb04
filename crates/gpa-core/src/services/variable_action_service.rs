// ============================================================================
// GPA Core - Variable Action Service
// File: crates/gpa-core/src/services/variable_action_service.rs
// ============================================================================
//! Mutation boundary for the variable-action hierarchy. Every structural
//! invariant is enforced here with a typed error before any row changes:
//! non-empty description and assigned responsible, plan not locked,
//! node not `fige`, parent not `fige`, depth cap, no cycles, no delete
//! while children exist. Sibling weights are rebalanced after every
//! structural change, and a direct weight edit redistributes the
//! remainder so the sibling sum stays at 1.0.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{AuditLog, PlanAction, VariableAction};
use crate::error::DomainError;
use crate::hierarchy::{self, HierarchyNode};
use crate::repositories::{
    NewVariableAction, PlanActionRepository, UserRepository, VariableActionRepository,
};
use crate::services::{AuditService, NotificationService};

const ENTITY_TYPE: &str = "VariableAction";

/// Caller-supplied fields for create and update.
#[derive(Debug, Clone, Default)]
pub struct VariableActionInput {
    pub description: String,
    pub poids: Option<f64>,
    pub fige: Option<bool>,
    pub responsable_id: Option<i64>,
    pub plan_action_id: Option<i64>,
    pub va_mere_id: Option<i64>,
}

/// Detail view: the node plus its recent audit trail.
#[derive(Debug, Clone)]
pub struct VariableActionDetail {
    pub action: VariableAction,
    pub audit_logs: Vec<AuditLog>,
}

pub struct VariableActionService {
    va_repo: Arc<dyn VariableActionRepository>,
    plan_repo: Arc<dyn PlanActionRepository>,
    user_repo: Arc<dyn UserRepository>,
    audit: Arc<AuditService>,
    notifications: Arc<NotificationService>,
}

impl VariableActionService {
    pub fn new(
        va_repo: Arc<dyn VariableActionRepository>,
        plan_repo: Arc<dyn PlanActionRepository>,
        user_repo: Arc<dyn UserRepository>,
        audit: Arc<AuditService>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self { va_repo, plan_repo, user_repo, audit, notifications }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub async fn get(&self, id: i64) -> Result<VariableAction, DomainError> {
        self.va_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::VariableActionNotFound(id))
    }

    pub async fn detail(&self, id: i64) -> Result<VariableActionDetail, DomainError> {
        let action = self.get(id).await?;
        let audit_logs = self.audit.for_entity(ENTITY_TYPE, id).await?;
        Ok(VariableActionDetail { action, audit_logs })
    }

    pub async fn list(&self) -> Result<Vec<VariableAction>, DomainError> {
        self.va_repo.find_all().await
    }

    /// Full tree for one plan, rebuilt from the flat list.
    pub async fn hierarchy(&self, plan_action_id: i64) -> Result<Vec<HierarchyNode>, DomainError> {
        let flat = self.va_repo.find_by_plan(plan_action_id).await?;
        hierarchy::build_forest(&flat)
    }

    /// Flat list for parent-selection dropdowns, sorted by level then
    /// sibling order. Codes are not sorted lexicographically: "VA10"
    /// would land before "VA2".
    pub async fn dropdown(&self, plan_action_id: i64) -> Result<Vec<VariableAction>, DomainError> {
        let mut list = self.va_repo.find_by_plan(plan_action_id).await?;
        list.sort_by_key(|va| (va.niveau, va.ordre.unwrap_or(i32::MAX), va.id));
        Ok(list)
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub async fn create(
        &self,
        input: VariableActionInput,
        actor: Option<i64>,
    ) -> Result<VariableAction, DomainError> {
        let (responsable_id, plan_action_id) = validate_required(&input)?;
        let plan = self.require_unlocked_plan(plan_action_id).await?;

        if self.user_repo.find_by_id(responsable_id).await?.is_none() {
            return Err(DomainError::UserNotFound(responsable_id));
        }

        let parent = match input.va_mere_id {
            Some(parent_id) => Some(self.validate_parent(parent_id, plan.id).await?),
            None => None,
        };

        let siblings = self.va_repo.find_children(plan.id, input.va_mere_id).await?;
        let code = hierarchy::next_code(
            parent.as_ref().and_then(|p| p.code.as_deref()),
            &sibling_codes(&siblings),
        );
        let niveau = parent.as_ref().map_or(1, |p| p.niveau + 1);
        let ordre = self.va_repo.max_ordre(plan.id, input.va_mere_id).await?.unwrap_or(0) + 1;

        let new = NewVariableAction {
            code: Some(code),
            description: input.description.trim().to_string(),
            poids: input.poids.unwrap_or(0.0),
            fige: input.fige.unwrap_or(false),
            niveau,
            ordre: Some(ordre),
            responsable_id,
            plan_action_id: plan.id,
            va_mere_id: input.va_mere_id,
            created_by: actor,
        };
        let created = self.va_repo.create(&new).await?;
        info!("Created variable action {} ({})", created.id, created.display_name());

        self.rebalance_siblings(plan.id, created.va_mere_id).await?;

        self.audit
            .log_action(
                "variableaction_created",
                actor,
                format!("Created variable action: \"{}\"", created.description),
                ENTITY_TYPE,
                created.id,
            )
            .await;
        self.notifications
            .notify_variable_assigned(created.responsable_id, &created.display_name())
            .await;

        // Re-read: the rebalance above rewrote the new node's weight.
        self.get(created.id).await
    }

    /// Create-with-parent convenience: the path parameter wins over any
    /// parent carried in the body.
    pub async fn create_child(
        &self,
        parent_id: i64,
        mut input: VariableActionInput,
        actor: Option<i64>,
    ) -> Result<VariableAction, DomainError> {
        input.va_mere_id = Some(parent_id);
        self.create(input, actor).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: VariableActionInput,
        actor: Option<i64>,
    ) -> Result<VariableAction, DomainError> {
        let (responsable_id, plan_action_id) = validate_required(&input)?;
        let mut existing = self.get(id).await?;
        let plan = self.require_unlocked_plan(existing.plan_action_id).await?;

        if plan_action_id != existing.plan_action_id {
            return Err(DomainError::ValidationError(
                "the owning plan of a variable action cannot change".to_string(),
            ));
        }
        // A fige node refuses edits; unlocking goes through set_fige.
        if existing.fige {
            warn!("Rejecting edit: variable action {} is locked", id);
            return Err(DomainError::VariableActionLocked(id));
        }
        if self.user_repo.find_by_id(responsable_id).await?.is_none() {
            return Err(DomainError::UserNotFound(responsable_id));
        }

        let old_parent = existing.va_mere_id;
        let poids_changed = input
            .poids
            .is_some_and(|poids| (poids - existing.poids).abs() > f64::EPSILON);
        existing.description = input.description.trim().to_string();
        existing.responsable_id = responsable_id;
        if let Some(poids) = input.poids {
            existing.poids = poids;
        }
        if let Some(fige) = input.fige {
            existing.fige = fige;
        }

        if input.va_mere_id != old_parent {
            self.reparent(&mut existing, input.va_mere_id, plan.id).await?;
        } else if poids_changed {
            // The sum check runs before any row changes.
            let sibling_updates = self.absorb_weight_edit(&existing).await?;
            self.va_repo.update(&existing).await?;
            for sibling in &sibling_updates {
                self.va_repo.update(sibling).await?;
            }
        } else {
            self.va_repo.update(&existing).await?;
        }

        self.audit
            .log_action(
                "variableaction_updated",
                actor,
                format!("Updated variable action: \"{}\"", existing.description),
                ENTITY_TYPE,
                id,
            )
            .await;

        if input.va_mere_id != old_parent {
            self.rebalance_siblings(plan.id, old_parent).await?;
            self.rebalance_siblings(plan.id, input.va_mere_id).await?;
        }

        self.get(id).await
    }

    /// Delete a leaf node. The children check runs against the database,
    /// not client-held state, so a stale client view cannot bypass it.
    pub async fn delete(&self, id: i64, actor: Option<i64>) -> Result<(), DomainError> {
        let existing = self.get(id).await?;
        let plan = self.require_unlocked_plan(existing.plan_action_id).await?;

        let children = self.va_repo.count_children(id).await?;
        if children > 0 {
            warn!("Refusing to delete variable action {}: {} children", id, children);
            return Err(DomainError::HasChildren(id));
        }

        self.va_repo.delete(id).await?;
        self.rebalance_siblings(plan.id, existing.va_mere_id).await?;

        self.audit
            .log_action(
                "variableaction_deleted",
                actor,
                format!("Deleted variable action: \"{}\"", existing.description),
                ENTITY_TYPE,
                id,
            )
            .await;
        Ok(())
    }

    /// Reparent a node (or promote it to root with `None`). Levels and
    /// codes are recomputed for the whole moved subtree; weights of both
    /// the old and the new sibling set are rebalanced.
    pub async fn move_variable(
        &self,
        id: i64,
        new_parent_id: Option<i64>,
        actor: Option<i64>,
    ) -> Result<VariableAction, DomainError> {
        let mut existing = self.get(id).await?;
        let plan = self.require_unlocked_plan(existing.plan_action_id).await?;
        let old_parent = existing.va_mere_id;

        if new_parent_id == old_parent {
            return Ok(existing);
        }

        self.reparent(&mut existing, new_parent_id, plan.id).await?;

        self.rebalance_siblings(plan.id, old_parent).await?;
        self.rebalance_siblings(plan.id, new_parent_id).await?;

        self.audit
            .log_action(
                "variableaction_moved",
                actor,
                format!(
                    "Moved variable action \"{}\" under {}",
                    existing.description,
                    new_parent_id.map_or("root".to_string(), |p| p.to_string()),
                ),
                ENTITY_TYPE,
                id,
            )
            .await;

        self.get(id).await
    }

    /// Rebalance the direct children of `parent_id` (equal split among
    /// unlocked children, locked weights untouched).
    pub async fn recalculate_weights(&self, parent_id: i64) -> Result<(), DomainError> {
        let parent = self.get(parent_id).await?;
        self.require_unlocked_plan(parent.plan_action_id).await?;
        self.rebalance_siblings(parent.plan_action_id, Some(parent_id)).await
    }

    /// Toggle the `fige` flag on a single node. Deliberately
    /// non-cascading: the subtree stays editable, but create and move
    /// refuse new children under a locked parent.
    pub async fn set_fige(
        &self,
        id: i64,
        fige: bool,
        actor: Option<i64>,
    ) -> Result<VariableAction, DomainError> {
        let mut existing = self.get(id).await?;
        self.require_unlocked_plan(existing.plan_action_id).await?;

        existing.fige = fige;
        let saved = self.va_repo.update(&existing).await?;

        self.audit
            .log_action(
                "variableaction_fige_updated",
                actor,
                format!(
                    "Changed fixed status for \"{}\" to {}",
                    saved.description,
                    if fige { "fixed" } else { "not fixed" },
                ),
                ENTITY_TYPE,
                id,
            )
            .await;
        Ok(saved)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    async fn require_unlocked_plan(&self, plan_id: i64) -> Result<PlanAction, DomainError> {
        let plan = self
            .plan_repo
            .find_by_id(plan_id)
            .await?
            .ok_or(DomainError::PlanActionNotFound(plan_id))?;
        if !plan.allows_variable_edits() {
            warn!("Rejecting edit: plan {} is locked", plan_id);
            return Err(DomainError::PlanLocked(plan_id));
        }
        Ok(plan)
    }

    /// A valid parent exists, belongs to the same plan, is not `fige`,
    /// and sits above the depth cap.
    async fn validate_parent(
        &self,
        parent_id: i64,
        plan_id: i64,
    ) -> Result<VariableAction, DomainError> {
        let parent = self.get(parent_id).await?;
        if parent.plan_action_id != plan_id {
            return Err(DomainError::ValidationError(
                "parent belongs to a different plan".to_string(),
            ));
        }
        if parent.fige {
            return Err(DomainError::ParentLocked(parent_id));
        }
        if !parent.can_have_children() {
            return Err(DomainError::MaxDepthExceeded {
                parent_id,
                level: parent.niveau,
            });
        }
        Ok(parent)
    }

    /// Reject a reparent that would make `id` its own ancestor. The walk
    /// tracks visited ids so pre-existing bad data cannot loop it.
    async fn ensure_no_cycle(&self, id: i64, new_parent_id: i64) -> Result<(), DomainError> {
        let mut seen: HashSet<i64> = HashSet::new();
        let mut current = Some(new_parent_id);
        while let Some(ancestor_id) = current {
            if ancestor_id == id {
                return Err(DomainError::CycleDetected(id));
            }
            if !seen.insert(ancestor_id) {
                return Err(DomainError::CycleDetected(ancestor_id));
            }
            current = self
                .va_repo
                .find_by_id(ancestor_id)
                .await?
                .and_then(|va| va.va_mere_id);
        }
        Ok(())
    }

    /// Apply a parent change: cycle/lock/depth checks, then regenerate
    /// code, level, and ordre, cascading through the moved subtree.
    async fn reparent(
        &self,
        existing: &mut VariableAction,
        new_parent_id: Option<i64>,
        plan_id: i64,
    ) -> Result<(), DomainError> {
        let new_parent = match new_parent_id {
            Some(parent_id) => {
                self.ensure_no_cycle(existing.id, parent_id).await?;
                Some(self.validate_parent(parent_id, plan_id).await?)
            }
            None => None,
        };

        let siblings = self.va_repo.find_children(plan_id, new_parent_id).await?;
        existing.va_mere_id = new_parent_id;
        existing.code = Some(hierarchy::next_code(
            new_parent.as_ref().and_then(|p| p.code.as_deref()),
            &sibling_codes(&siblings),
        ));
        existing.niveau = new_parent.as_ref().map_or(1, |p| p.niveau + 1);
        existing.ordre =
            Some(self.va_repo.max_ordre(plan_id, new_parent_id).await?.unwrap_or(0) + 1);

        let saved = self.va_repo.update(existing).await?;
        self.cascade_subtree(&saved).await?;
        *existing = saved;
        Ok(())
    }

    /// Depth changes propagate downward: every descendant's level and
    /// code are rewritten from its (possibly re-leveled) parent.
    async fn cascade_subtree(&self, parent: &VariableAction) -> Result<(), DomainError> {
        let children = self
            .va_repo
            .find_children(parent.plan_action_id, Some(parent.id))
            .await?;
        for (index, child) in children.into_iter().enumerate() {
            let mut child = child;
            child.niveau = parent.niveau + 1;
            child.code = parent
                .code
                .as_ref()
                .map(|code| format!("{}{}", code, index + 1));
            let saved = self.va_repo.update(&child).await?;
            Box::pin(self.cascade_subtree(&saved)).await?;
        }
        Ok(())
    }

    /// An explicit weight edit holds the edited node's weight fixed and
    /// redistributes the remainder across its unlocked siblings, so the
    /// set keeps summing to 1.0. Fails with `WeightSumInvalid` when no
    /// redistribution can restore the sum (every sibling is fige).
    /// Returns the siblings whose weight changed; nothing is persisted.
    async fn absorb_weight_edit(
        &self,
        edited: &VariableAction,
    ) -> Result<Vec<VariableAction>, DomainError> {
        let mut siblings = self
            .va_repo
            .find_children(edited.plan_action_id, edited.va_mere_id)
            .await?;
        let before: Vec<f64> = siblings.iter().map(|va| va.poids).collect();
        for va in siblings.iter_mut() {
            if va.id == edited.id {
                va.poids = edited.poids;
                // Pin the edited weight during redistribution.
                va.fige = true;
            }
        }
        hierarchy::rebalance(&mut siblings)?;
        hierarchy::check_sum(&siblings)?;
        Ok(siblings
            .into_iter()
            .zip(before)
            .filter(|(va, old)| va.id != edited.id && (va.poids - old).abs() > f64::EPSILON)
            .map(|(va, _)| va)
            .collect())
    }

    async fn rebalance_siblings(
        &self,
        plan_id: i64,
        parent_id: Option<i64>,
    ) -> Result<(), DomainError> {
        let mut siblings = self.va_repo.find_children(plan_id, parent_id).await?;
        let before: Vec<f64> = siblings.iter().map(|va| va.poids).collect();
        hierarchy::rebalance(&mut siblings)?;
        for (va, old) in siblings.iter().zip(before) {
            if (va.poids - old).abs() > f64::EPSILON {
                self.va_repo.update(va).await?;
            }
        }
        Ok(())
    }
}

fn validate_required(input: &VariableActionInput) -> Result<(i64, i64), DomainError> {
    if input.description.trim().is_empty() {
        return Err(DomainError::ValidationError("description is required".to_string()));
    }
    let responsable_id = input
        .responsable_id
        .ok_or_else(|| DomainError::ValidationError("responsable is required".to_string()))?;
    let plan_action_id = input
        .plan_action_id
        .ok_or_else(|| DomainError::ValidationError("plan action is required".to_string()))?;
    Ok((responsable_id, plan_action_id))
}

fn sibling_codes(siblings: &[VariableAction]) -> Vec<String> {
    siblings.iter().filter_map(|va| va.code.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlanStatus, User};
    use crate::repositories::audit_repository::MockAuditRepository;
    use crate::repositories::notification_repository::MockNotificationRepository;
    use crate::repositories::plan_action_repository::MockPlanActionRepository;
    use crate::repositories::user_repository::MockUserRepository;
    use crate::repositories::variable_action_repository::MockVariableActionRepository;
    use chrono::Utc;

    fn plan(id: i64, statut: PlanStatus) -> PlanAction {
        PlanAction {
            id,
            titre: "Plan 2025".to_string(),
            description: None,
            statut,
            exercice_id: 1,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    fn node(id: i64, parent: Option<i64>, niveau: i32) -> VariableAction {
        VariableAction {
            id,
            code: Some(format!("VA{}", id)),
            description: format!("VA {}", id),
            poids: 0.5,
            fige: false,
            niveau,
            ordre: Some(1),
            responsable_id: 7,
            plan_action_id: 1,
            va_mere_id: parent,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    fn user(id: i64) -> User {
        User {
            id,
            nom: "Dupont".to_string(),
            prenom: "Jean".to_string(),
            username: "jdupont".to_string(),
            email: "jean@example.com".to_string(),
            actif: true,
            service_line_id: None,
            profils: vec!["COLLABORATEUR".to_string()],
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    struct Mocks {
        va: MockVariableActionRepository,
        plan: MockPlanActionRepository,
        user: MockUserRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                va: MockVariableActionRepository::new(),
                plan: MockPlanActionRepository::new(),
                user: MockUserRepository::new(),
            }
        }

        fn into_service(self) -> VariableActionService {
            let mut audit_repo = MockAuditRepository::new();
            audit_repo.expect_record().returning(|entry| {
                Ok(AuditLog {
                    id: 1,
                    action: entry.action.clone(),
                    user_id: entry.user_id,
                    details: entry.details.clone(),
                    entity_type: entry.entity_type.clone(),
                    entity_id: entry.entity_id,
                    created_at: Utc::now(),
                })
            });
            let mut notif_repo = MockNotificationRepository::new();
            notif_repo.expect_create().returning(|new| {
                Ok(crate::domain::Notification {
                    id: 1,
                    titre: new.titre.clone(),
                    contenu: new.contenu.clone(),
                    kind: new.kind,
                    user_id: new.user_id,
                    recu: false,
                    created_at: Utc::now(),
                })
            });
            VariableActionService::new(
                Arc::new(self.va),
                Arc::new(self.plan),
                Arc::new(self.user),
                Arc::new(AuditService::new(Arc::new(audit_repo))),
                Arc::new(NotificationService::new(Arc::new(notif_repo))),
            )
        }
    }

    fn input(description: &str) -> VariableActionInput {
        VariableActionInput {
            description: description.to_string(),
            poids: None,
            fige: None,
            responsable_id: Some(7),
            plan_action_id: Some(1),
            va_mere_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_requires_description() {
        let service = Mocks::new().into_service();
        let err = service.create(input("   "), None).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_requires_responsable() {
        let service = Mocks::new().into_service();
        let mut bad = input("Valid description");
        bad.responsable_id = None;
        let err = service.create(bad, None).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_rejected_when_plan_locked() {
        let mut mocks = Mocks::new();
        mocks
            .plan
            .expect_find_by_id()
            .returning(|id| Ok(Some(plan(id, PlanStatus::Verrouille))));
        let service = mocks.into_service();
        let err = service.create(input("Nouvelle VA"), None).await.unwrap_err();
        assert!(matches!(err, DomainError::PlanLocked(1)));
    }

    #[tokio::test]
    async fn test_create_under_fige_parent_rejected() {
        let mut mocks = Mocks::new();
        mocks
            .plan
            .expect_find_by_id()
            .returning(|id| Ok(Some(plan(id, PlanStatus::Planification))));
        mocks.user.expect_find_by_id().returning(|id| Ok(Some(user(id))));
        mocks.va.expect_find_by_id().returning(|id| {
            let mut parent = node(id, None, 1);
            parent.fige = true;
            Ok(Some(parent))
        });
        let service = mocks.into_service();

        let mut child = input("Sous-variable");
        child.va_mere_id = Some(10);
        let err = service.create(child, None).await.unwrap_err();
        assert!(matches!(err, DomainError::ParentLocked(10)));
    }

    #[tokio::test]
    async fn test_create_beyond_depth_cap_rejected() {
        let mut mocks = Mocks::new();
        mocks
            .plan
            .expect_find_by_id()
            .returning(|id| Ok(Some(plan(id, PlanStatus::Planification))));
        mocks.user.expect_find_by_id().returning(|id| Ok(Some(user(id))));
        mocks
            .va
            .expect_find_by_id()
            .returning(|id| Ok(Some(node(id, Some(1), 4))));
        let service = mocks.into_service();

        let mut child = input("Trop profond");
        child.va_mere_id = Some(10);
        let err = service.create(child, None).await.unwrap_err();
        assert!(matches!(err, DomainError::MaxDepthExceeded { parent_id: 10, level: 4 }));
    }

    #[tokio::test]
    async fn test_delete_with_children_rejected_before_delete() {
        let mut mocks = Mocks::new();
        mocks.va.expect_find_by_id().returning(|id| Ok(Some(node(id, None, 1))));
        mocks
            .plan
            .expect_find_by_id()
            .returning(|id| Ok(Some(plan(id, PlanStatus::Planification))));
        mocks.va.expect_count_children().returning(|_| Ok(1));
        // No expect_delete: the call would panic if delete were reached.
        let service = mocks.into_service();

        let err = service.delete(5, None).await.unwrap_err();
        assert!(matches!(err, DomainError::HasChildren(5)));
    }

    #[tokio::test]
    async fn test_move_under_own_descendant_rejected() {
        let mut mocks = Mocks::new();
        // 1 -> 2 -> 3; moving 1 under 3 closes a cycle.
        mocks.va.expect_find_by_id().returning(|id| match id {
            1 => Ok(Some(node(1, None, 1))),
            2 => Ok(Some(node(2, Some(1), 2))),
            3 => Ok(Some(node(3, Some(2), 3))),
            _ => Ok(None),
        });
        mocks
            .plan
            .expect_find_by_id()
            .returning(|id| Ok(Some(plan(id, PlanStatus::Planification))));
        let service = mocks.into_service();

        let err = service.move_variable(1, Some(3), None).await.unwrap_err();
        assert!(matches!(err, DomainError::CycleDetected(1)));
    }

    #[tokio::test]
    async fn test_recalculate_weights_equal_split() {
        let mut mocks = Mocks::new();
        mocks.va.expect_find_by_id().returning(|id| Ok(Some(node(id, None, 1))));
        mocks
            .plan
            .expect_find_by_id()
            .returning(|id| Ok(Some(plan(id, PlanStatus::EnCours))));
        mocks.va.expect_find_children().returning(|_, parent| {
            Ok(vec![
                node(11, parent, 2),
                node(12, parent, 2),
                node(13, parent, 2),
            ])
        });
        mocks
            .va
            .expect_update()
            .times(3)
            .withf(|va| (va.poids - 1.0 / 3.0).abs() < 1e-9)
            .returning(|va| Ok(va.clone()));
        let service = mocks.into_service();

        service.recalculate_weights(10).await.unwrap();
    }

    #[tokio::test]
    async fn test_set_fige_does_not_cascade() {
        let mut mocks = Mocks::new();
        mocks.va.expect_find_by_id().returning(|id| Ok(Some(node(id, None, 1))));
        mocks
            .plan
            .expect_find_by_id()
            .returning(|id| Ok(Some(plan(id, PlanStatus::EnCours))));
        // Exactly one update: the toggled node itself.
        mocks
            .va
            .expect_update()
            .times(1)
            .withf(|va| va.fige)
            .returning(|va| Ok(va.clone()));
        let service = mocks.into_service();

        let saved = service.set_fige(4, true, Some(9)).await.unwrap();
        assert!(saved.fige);
    }

    #[tokio::test]
    async fn test_dropdown_sorted_by_level_then_order() {
        let mut mocks = Mocks::new();
        mocks.va.expect_find_by_plan().returning(|_| {
            let mut va10 = node(10, None, 1);
            va10.code = Some("VA10".to_string());
            va10.ordre = Some(10);
            let mut va2 = node(2, None, 1);
            va2.code = Some("VA2".to_string());
            va2.ordre = Some(2);
            let mut child = node(21, Some(2), 2);
            child.code = Some("VA21".to_string());
            Ok(vec![va10, child, va2])
        });
        let service = mocks.into_service();

        let list = service.dropdown(1).await.unwrap();
        let codes: Vec<_> = list.iter().filter_map(|va| va.code.as_deref()).collect();
        assert_eq!(codes, ["VA2", "VA10", "VA21"]);
    }

    #[tokio::test]
    async fn test_update_weight_redistributes_remainder() {
        let mut mocks = Mocks::new();
        mocks.va.expect_find_by_id().returning(|id| Ok(Some(node(id, None, 1))));
        mocks
            .plan
            .expect_find_by_id()
            .returning(|id| Ok(Some(plan(id, PlanStatus::EnCours))));
        mocks.user.expect_find_by_id().returning(|id| Ok(Some(user(id))));
        // Two root siblings at 0.5 each.
        mocks
            .va
            .expect_find_children()
            .returning(|_, parent| Ok(vec![node(1, parent, 1), node(2, parent, 1)]));
        mocks
            .va
            .expect_update()
            .times(1)
            .withf(|va| va.id == 1 && (va.poids - 0.9).abs() < 1e-9 && !va.fige)
            .returning(|va| Ok(va.clone()));
        mocks
            .va
            .expect_update()
            .times(1)
            .withf(|va| va.id == 2 && (va.poids - 0.1).abs() < 1e-9)
            .returning(|va| Ok(va.clone()));
        let service = mocks.into_service();

        let mut edit = input("VA 1");
        edit.poids = Some(0.9);
        service.update(1, edit, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_weight_rejected_when_sum_cannot_be_restored() {
        let mut mocks = Mocks::new();
        mocks.va.expect_find_by_id().returning(|id| Ok(Some(node(id, None, 1))));
        mocks
            .plan
            .expect_find_by_id()
            .returning(|id| Ok(Some(plan(id, PlanStatus::EnCours))));
        mocks.user.expect_find_by_id().returning(|id| Ok(Some(user(id))));
        // The only sibling is fige, so nothing can absorb the edit.
        mocks.va.expect_find_children().returning(|_, parent| {
            let mut locked = node(2, parent, 1);
            locked.fige = true;
            Ok(vec![node(1, parent, 1), locked])
        });
        // No expect_update: nothing may be persisted.
        let service = mocks.into_service();

        let mut edit = input("VA 1");
        edit.poids = Some(0.9);
        let err = service.update(1, edit, None).await.unwrap_err();
        assert!(matches!(err, DomainError::WeightSumInvalid { .. }));
    }

    #[tokio::test]
    async fn test_update_of_fige_node_rejected() {
        let mut mocks = Mocks::new();
        mocks.va.expect_find_by_id().returning(|id| {
            let mut locked = node(id, None, 1);
            locked.fige = true;
            Ok(Some(locked))
        });
        mocks
            .plan
            .expect_find_by_id()
            .returning(|id| Ok(Some(plan(id, PlanStatus::EnCours))));
        // No expect_update: the locked node may not be touched.
        let service = mocks.into_service();

        let err = service.update(4, input("Nouvelle description"), None).await.unwrap_err();
        assert!(matches!(err, DomainError::VariableActionLocked(4)));
    }

    #[tokio::test]
    async fn test_stale_update_reports_not_found() {
        let mut mocks = Mocks::new();
        mocks.va.expect_find_by_id().returning(|_| Ok(None));
        let service = mocks.into_service();
        let err = service.update(42, input("Quelconque"), None).await.unwrap_err();
        assert!(matches!(err, DomainError::VariableActionNotFound(42)));
    }
}
