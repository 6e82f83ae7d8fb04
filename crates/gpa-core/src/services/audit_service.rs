//! Audit trail service

use std::sync::Arc;

use tracing::error;

use crate::domain::AuditLog;
use crate::error::DomainError;
use crate::repositories::{AuditRepository, NewAuditLog};

pub struct AuditService {
    repo: Arc<dyn AuditRepository>,
}

impl AuditService {
    pub fn new(repo: Arc<dyn AuditRepository>) -> Self {
        Self { repo }
    }

    /// Record an action. Audit failures are logged and swallowed: they
    /// must never fail the mutation they describe.
    pub async fn log_action(
        &self,
        action: &str,
        user_id: Option<i64>,
        details: String,
        entity_type: &str,
        entity_id: i64,
    ) {
        let entry = NewAuditLog {
            action: action.to_string(),
            user_id,
            details,
            entity_type: entity_type.to_string(),
            entity_id,
        };
        if let Err(e) = self.repo.record(&entry).await {
            error!("Failed to record audit entry '{}': {}", action, e);
        }
    }

    pub async fn for_entity(
        &self,
        entity_type: &str,
        entity_id: i64,
    ) -> Result<Vec<AuditLog>, DomainError> {
        self.repo.find_for_entity(entity_type, entity_id).await
    }

    pub async fn recent(&self, limit: i64) -> Result<Vec<AuditLog>, DomainError> {
        self.repo.find_recent(limit).await
    }
}
