//! Variable action repository trait (port)

use async_trait::async_trait;

use crate::domain::VariableAction;
use crate::error::DomainError;

/// Insert payload; `id` and `created_at` are backend-assigned.
#[derive(Debug, Clone)]
pub struct NewVariableAction {
    pub code: Option<String>,
    pub description: String,
    pub poids: f64,
    pub fige: bool,
    pub niveau: i32,
    pub ordre: Option<i32>,
    pub responsable_id: i64,
    pub plan_action_id: i64,
    pub va_mere_id: Option<i64>,
    pub created_by: Option<i64>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VariableActionRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<VariableAction>, DomainError>;
    async fn find_all(&self) -> Result<Vec<VariableAction>, DomainError>;
    async fn find_by_plan(&self, plan_action_id: i64) -> Result<Vec<VariableAction>, DomainError>;
    /// Direct children of `parent_id`, or a plan's roots when `parent_id`
    /// is `None`.
    async fn find_children(
        &self,
        plan_action_id: i64,
        parent_id: Option<i64>,
    ) -> Result<Vec<VariableAction>, DomainError>;
    async fn count_children(&self, id: i64) -> Result<i64, DomainError>;
    async fn max_ordre(
        &self,
        plan_action_id: i64,
        parent_id: Option<i64>,
    ) -> Result<Option<i32>, DomainError>;
    async fn create(&self, new: &NewVariableAction) -> Result<VariableAction, DomainError>;
    async fn update(&self, va: &VariableAction) -> Result<VariableAction, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
