//! Plan action repository trait (port)

use async_trait::async_trait;

use crate::domain::{PlanAction, PlanStatus};
use crate::error::DomainError;

#[derive(Debug, Clone)]
pub struct NewPlanAction {
    pub titre: String,
    pub description: Option<String>,
    pub statut: PlanStatus,
    pub exercice_id: i64,
    pub created_by: Option<i64>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanActionRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<PlanAction>, DomainError>;
    async fn find_all(&self) -> Result<Vec<PlanAction>, DomainError>;
    async fn create(&self, new: &NewPlanAction) -> Result<PlanAction, DomainError>;
    async fn update(&self, plan: &PlanAction) -> Result<PlanAction, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
    async fn count_by_status(&self, statut: PlanStatus) -> Result<i64, DomainError>;
}
