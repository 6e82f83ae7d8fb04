// ============================================================================
// GPA Core - Plan Action Service
// File: crates/gpa-core/src/services/plan_action_service.rs
// ============================================================================
//! Plan lifecycle management. Status changes run through the
//! forward-only state machine; a locked plan can never be reopened.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{PlanAction, PlanStatus};
use crate::error::DomainError;
use crate::repositories::{ExerciceRepository, NewPlanAction, PlanActionRepository};
use crate::services::AuditService;

const ENTITY_TYPE: &str = "PlanAction";

#[derive(Debug, Clone)]
pub struct PlanActionInput {
    pub titre: String,
    pub description: Option<String>,
    pub statut: Option<PlanStatus>,
    pub exercice_id: i64,
}

pub struct PlanActionService {
    plan_repo: Arc<dyn PlanActionRepository>,
    exercice_repo: Arc<dyn ExerciceRepository>,
    audit: Arc<AuditService>,
}

impl PlanActionService {
    pub fn new(
        plan_repo: Arc<dyn PlanActionRepository>,
        exercice_repo: Arc<dyn ExerciceRepository>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self { plan_repo, exercice_repo, audit }
    }

    pub async fn get(&self, id: i64) -> Result<PlanAction, DomainError> {
        self.plan_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PlanActionNotFound(id))
    }

    pub async fn list(&self) -> Result<Vec<PlanAction>, DomainError> {
        self.plan_repo.find_all().await
    }

    pub async fn create(
        &self,
        input: PlanActionInput,
        actor: Option<i64>,
    ) -> Result<PlanAction, DomainError> {
        validate_input(&input)?;
        if self.exercice_repo.find_by_id(input.exercice_id).await?.is_none() {
            return Err(DomainError::ExerciceNotFound(input.exercice_id));
        }

        let new = NewPlanAction {
            titre: input.titre.trim().to_string(),
            description: input.description,
            statut: input.statut.unwrap_or(PlanStatus::Planification),
            exercice_id: input.exercice_id,
            created_by: actor,
        };
        let created = self.plan_repo.create(&new).await?;
        info!("Created plan action {} \"{}\"", created.id, created.titre);

        self.audit
            .log_action(
                "planaction_created",
                actor,
                format!("Created plan action: \"{}\"", created.titre),
                ENTITY_TYPE,
                created.id,
            )
            .await;
        Ok(created)
    }

    /// Update title, description and exercice. Status is deliberately
    /// not touched here: it only moves through `change_status`.
    pub async fn update(
        &self,
        id: i64,
        input: PlanActionInput,
        actor: Option<i64>,
    ) -> Result<PlanAction, DomainError> {
        validate_input(&input)?;
        let mut existing = self.get(id).await?;

        if input.exercice_id != existing.exercice_id {
            if self.exercice_repo.find_by_id(input.exercice_id).await?.is_none() {
                return Err(DomainError::ExerciceNotFound(input.exercice_id));
            }
            existing.exercice_id = input.exercice_id;
        }
        existing.titre = input.titre.trim().to_string();
        existing.description = input.description;

        let saved = self.plan_repo.update(&existing).await?;
        self.audit
            .log_action(
                "planaction_updated",
                actor,
                format!("Updated plan action: \"{}\"", saved.titre),
                ENTITY_TYPE,
                id,
            )
            .await;
        Ok(saved)
    }

    pub async fn change_status(
        &self,
        id: i64,
        next: PlanStatus,
        actor: Option<i64>,
    ) -> Result<PlanAction, DomainError> {
        let mut existing = self.get(id).await?;
        if !existing.statut.can_transition_to(next) {
            warn!(
                "Rejected status change for plan {}: {} -> {}",
                id,
                existing.statut.as_str(),
                next.as_str(),
            );
            return Err(DomainError::InvalidStatusTransition {
                from: existing.statut.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }

        let from = existing.statut;
        existing.statut = next;
        let saved = self.plan_repo.update(&existing).await?;
        info!("Plan {} moved {} -> {}", id, from.as_str(), next.as_str());

        self.audit
            .log_action(
                "planaction_status_changed",
                actor,
                format!(
                    "Changed plan \"{}\" status from {} to {}",
                    saved.titre,
                    from.as_str(),
                    next.as_str(),
                ),
                ENTITY_TYPE,
                id,
            )
            .await;
        Ok(saved)
    }

    pub async fn delete(&self, id: i64, actor: Option<i64>) -> Result<(), DomainError> {
        let existing = self.get(id).await?;
        self.plan_repo.delete(id).await?;
        self.audit
            .log_action(
                "planaction_deleted",
                actor,
                format!("Deleted plan action: \"{}\"", existing.titre),
                ENTITY_TYPE,
                id,
            )
            .await;
        Ok(())
    }
}

fn validate_input(input: &PlanActionInput) -> Result<(), DomainError> {
    if input.titre.trim().is_empty() {
        return Err(DomainError::ValidationError("titre is required".to_string()));
    }
    Ok(())
}
