//! PostgreSQL exercice repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

use gpa_core::domain::Exercice;
use gpa_core::error::DomainError;
use gpa_core::repositories::{ExerciceRepository, NewExercice};

const COLUMNS: &str = "id, annee, verrouille, description, date_debut, date_fin, created_at";

pub struct PgExerciceRepository {
    pool: PgPool,
}

impl PgExerciceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ExerciceRow {
    pub id: i64,
    pub annee: i32,
    pub verrouille: bool,
    pub description: Option<String>,
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<ExerciceRow> for Exercice {
    fn from(row: ExerciceRow) -> Self {
        Exercice {
            id: row.id,
            annee: row.annee,
            verrouille: row.verrouille,
            description: row.description,
            date_debut: row.date_debut,
            date_fin: row.date_fin,
            created_at: row.created_at,
        }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl ExerciceRepository for PgExerciceRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Exercice>, DomainError> {
        let row: Option<ExerciceRow> =
            sqlx::query_as(&format!("SELECT {} FROM exercices WHERE id = $1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding exercice by id", e))?;
        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<Exercice>, DomainError> {
        let rows: Vec<ExerciceRow> = sqlx::query_as(&format!(
            "SELECT {} FROM exercices ORDER BY annee DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing exercices", e))?;
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, new: &NewExercice) -> Result<Exercice, DomainError> {
        let row: ExerciceRow = sqlx::query_as(&format!(
            "INSERT INTO exercices (annee, verrouille, description, date_debut, date_fin) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {}",
            COLUMNS
        ))
        .bind(new.annee)
        .bind(new.verrouille)
        .bind(&new.description)
        .bind(new.date_debut)
        .bind(new.date_fin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating exercice", e))?;
        Ok(row.into())
    }

    async fn update(&self, exercice: &Exercice) -> Result<Exercice, DomainError> {
        let row: ExerciceRow = sqlx::query_as(&format!(
            "UPDATE exercices \
             SET annee = $2, verrouille = $3, description = $4, date_debut = $5, date_fin = $6 \
             WHERE id = $1 \
             RETURNING {}",
            COLUMNS
        ))
        .bind(exercice.id)
        .bind(exercice.annee)
        .bind(exercice.verrouille)
        .bind(&exercice.description)
        .bind(exercice.date_debut)
        .bind(exercice.date_fin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("updating exercice", e))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM exercices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting exercice", e))?;
        Ok(())
    }
}
