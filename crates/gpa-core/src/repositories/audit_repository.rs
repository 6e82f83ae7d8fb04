//! Audit repository trait (port)

use async_trait::async_trait;

use crate::domain::AuditLog;
use crate::error::DomainError;

#[derive(Debug, Clone)]
pub struct NewAuditLog {
    pub action: String,
    pub user_id: Option<i64>,
    pub details: String,
    pub entity_type: String,
    pub entity_id: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditRepository: Send + Sync {
    async fn record(&self, entry: &NewAuditLog) -> Result<AuditLog, DomainError>;
    async fn find_for_entity(
        &self,
        entity_type: &str,
        entity_id: i64,
    ) -> Result<Vec<AuditLog>, DomainError>;
    async fn find_recent(&self, limit: i64) -> Result<Vec<AuditLog>, DomainError>;
}
