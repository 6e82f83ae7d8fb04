//! PostgreSQL audit log repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

use gpa_core::domain::AuditLog;
use gpa_core::error::DomainError;
use gpa_core::repositories::{AuditRepository, NewAuditLog};

const COLUMNS: &str = "id, action, user_id, details, entity_type, entity_id, created_at";

pub struct PgAuditRepository {
    pool: PgPool,
}

impl PgAuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    pub id: i64,
    pub action: String,
    pub user_id: Option<i64>,
    pub details: String,
    pub entity_type: String,
    pub entity_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<AuditLogRow> for AuditLog {
    fn from(row: AuditLogRow) -> Self {
        AuditLog {
            id: row.id,
            action: row.action,
            user_id: row.user_id,
            details: row.details,
            entity_type: row.entity_type,
            entity_id: row.entity_id,
            created_at: row.created_at,
        }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl AuditRepository for PgAuditRepository {
    async fn record(&self, entry: &NewAuditLog) -> Result<AuditLog, DomainError> {
        let row: AuditLogRow = sqlx::query_as(&format!(
            "INSERT INTO audit_logs (action, user_id, details, entity_type, entity_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {}",
            COLUMNS
        ))
        .bind(&entry.action)
        .bind(entry.user_id)
        .bind(&entry.details)
        .bind(&entry.entity_type)
        .bind(entry.entity_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("recording audit entry", e))?;
        Ok(row.into())
    }

    async fn find_for_entity(
        &self,
        entity_type: &str,
        entity_id: i64,
    ) -> Result<Vec<AuditLog>, DomainError> {
        let rows: Vec<AuditLogRow> = sqlx::query_as(&format!(
            "SELECT {} FROM audit_logs \
             WHERE entity_type = $1 AND entity_id = $2 \
             ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(entity_type)
        .bind(entity_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing audit entries for entity", e))?;
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<AuditLog>, DomainError> {
        let rows: Vec<AuditLogRow> = sqlx::query_as(&format!(
            "SELECT {} FROM audit_logs ORDER BY created_at DESC LIMIT $1",
            COLUMNS
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing recent audit entries", e))?;
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
