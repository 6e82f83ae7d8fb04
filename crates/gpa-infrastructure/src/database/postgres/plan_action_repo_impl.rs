// ============================================================================
// GPA Infrastructure - PostgreSQL Plan Action Repository
// File: crates/gpa-infrastructure/src/database/postgres/plan_action_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

use gpa_core::domain::{PlanAction, PlanStatus};
use gpa_core::error::DomainError;
use gpa_core::repositories::{NewPlanAction, PlanActionRepository};

const COLUMNS: &str = "id, titre, description, statut, exercice_id, created_by, created_at";

pub struct PgPlanActionRepository {
    pool: PgPool,
}

impl PgPlanActionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PlanActionRow {
    pub id: i64,
    pub titre: String,
    pub description: Option<String>,
    pub statut: String,
    pub exercice_id: i64,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<PlanActionRow> for PlanAction {
    fn from(row: PlanActionRow) -> Self {
        PlanAction {
            id: row.id,
            titre: row.titre,
            description: row.description,
            // Unknown values cannot appear: the column carries a CHECK
            // constraint mirroring the enum.
            statut: PlanStatus::from_str(&row.statut).unwrap_or(PlanStatus::Planification),
            exercice_id: row.exercice_id,
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
impl PlanActionRepository for PgPlanActionRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<PlanAction>, DomainError> {
        let row: Option<PlanActionRow> =
            sqlx::query_as(&format!("SELECT {} FROM plan_actions WHERE id = $1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding plan action by id", e))?;
        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<PlanAction>, DomainError> {
        let rows: Vec<PlanActionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM plan_actions ORDER BY created_at DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing plan actions", e))?;
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, new: &NewPlanAction) -> Result<PlanAction, DomainError> {
        let row: PlanActionRow = sqlx::query_as(&format!(
            "INSERT INTO plan_actions (titre, description, statut, exercice_id, created_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {}",
            COLUMNS
        ))
        .bind(&new.titre)
        .bind(&new.description)
        .bind(new.statut.as_str())
        .bind(new.exercice_id)
        .bind(new.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating plan action", e))?;
        Ok(row.into())
    }

    async fn update(&self, plan: &PlanAction) -> Result<PlanAction, DomainError> {
        let row: PlanActionRow = sqlx::query_as(&format!(
            "UPDATE plan_actions \
             SET titre = $2, description = $3, statut = $4, exercice_id = $5 \
             WHERE id = $1 \
             RETURNING {}",
            COLUMNS
        ))
        .bind(plan.id)
        .bind(&plan.titre)
        .bind(&plan.description)
        .bind(plan.statut.as_str())
        .bind(plan.exercice_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("updating plan action", e))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM plan_actions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting plan action", e))?;
        Ok(())
    }

    async fn count_by_status(&self, statut: PlanStatus) -> Result<i64, DomainError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM plan_actions WHERE statut = $1")
                .bind(statut.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_error("counting plan actions by status", e))?;
        Ok(count)
    }
}
