// ============================================================================
// GPA Infrastructure - PostgreSQL Variable Action Repository
// File: crates/gpa-infrastructure/src/database/postgres/variable_action_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

use gpa_core::domain::VariableAction;
use gpa_core::error::DomainError;
use gpa_core::repositories::{NewVariableAction, VariableActionRepository};

const COLUMNS: &str = "id, code, description, poids, fige, niveau, ordre, \
                       responsable_id, plan_action_id, va_mere_id, created_by, created_at";

pub struct PgVariableActionRepository {
    pool: PgPool,
}

impl PgVariableActionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct VariableActionRow {
    pub id: i64,
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
    pub created_at: DateTime<Utc>,
}

impl From<VariableActionRow> for VariableAction {
    fn from(row: VariableActionRow) -> Self {
        VariableAction {
            id: row.id,
            code: row.code,
            description: row.description,
            poids: row.poids,
            fige: row.fige,
            niveau: row.niveau,
            ordre: row.ordre,
            responsable_id: row.responsable_id,
            plan_action_id: row.plan_action_id,
            va_mere_id: row.va_mere_id,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl VariableActionRepository for PgVariableActionRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<VariableAction>, DomainError> {
        let row: Option<VariableActionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM variable_actions WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding variable action by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<VariableAction>, DomainError> {
        let rows: Vec<VariableActionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM variable_actions ORDER BY plan_action_id, code",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing variable actions", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_plan(&self, plan_action_id: i64) -> Result<Vec<VariableAction>, DomainError> {
        let rows: Vec<VariableActionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM variable_actions WHERE plan_action_id = $1 ORDER BY ordre, id",
            COLUMNS
        ))
        .bind(plan_action_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing variable actions by plan", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_children(
        &self,
        plan_action_id: i64,
        parent_id: Option<i64>,
    ) -> Result<Vec<VariableAction>, DomainError> {
        let rows: Vec<VariableActionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM variable_actions \
             WHERE plan_action_id = $1 AND va_mere_id IS NOT DISTINCT FROM $2 \
             ORDER BY ordre, id",
            COLUMNS
        ))
        .bind(plan_action_id)
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing child variable actions", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn count_children(&self, id: i64) -> Result<i64, DomainError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM variable_actions WHERE va_mere_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_error("counting child variable actions", e))?;
        Ok(count)
    }

    async fn max_ordre(
        &self,
        plan_action_id: i64,
        parent_id: Option<i64>,
    ) -> Result<Option<i32>, DomainError> {
        let (max,): (Option<i32>,) = sqlx::query_as(
            "SELECT MAX(ordre) FROM variable_actions \
             WHERE plan_action_id = $1 AND va_mere_id IS NOT DISTINCT FROM $2",
        )
        .bind(plan_action_id)
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("reading max ordre", e))?;
        Ok(max)
    }

    async fn create(&self, new: &NewVariableAction) -> Result<VariableAction, DomainError> {
        let row: VariableActionRow = sqlx::query_as(&format!(
            "INSERT INTO variable_actions \
             (code, description, poids, fige, niveau, ordre, \
              responsable_id, plan_action_id, va_mere_id, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {}",
            COLUMNS
        ))
        .bind(&new.code)
        .bind(&new.description)
        .bind(new.poids)
        .bind(new.fige)
        .bind(new.niveau)
        .bind(new.ordre)
        .bind(new.responsable_id)
        .bind(new.plan_action_id)
        .bind(new.va_mere_id)
        .bind(new.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating variable action", e))?;

        Ok(row.into())
    }

    async fn update(&self, va: &VariableAction) -> Result<VariableAction, DomainError> {
        let row: VariableActionRow = sqlx::query_as(&format!(
            "UPDATE variable_actions \
             SET code = $2, description = $3, poids = $4, fige = $5, niveau = $6, \
                 ordre = $7, responsable_id = $8, va_mere_id = $9 \
             WHERE id = $1 \
             RETURNING {}",
            COLUMNS
        ))
        .bind(va.id)
        .bind(&va.code)
        .bind(&va.description)
        .bind(va.poids)
        .bind(va.fige)
        .bind(va.niveau)
        .bind(va.ordre)
        .bind(va.responsable_id)
        .bind(va.va_mere_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("updating variable action", e))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM variable_actions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting variable action", e))?;
        Ok(())
    }
}
