//! PostgreSQL service line repository

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;

use gpa_core::domain::ServiceLine;
use gpa_core::error::DomainError;
use gpa_core::repositories::ServiceLineRepository;

pub struct PgServiceLineRepository {
    pool: PgPool,
}

impl PgServiceLineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ServiceLineRow {
    pub id: i64,
    pub nom: String,
}

impl From<ServiceLineRow> for ServiceLine {
    fn from(row: ServiceLineRow) -> Self {
        ServiceLine { id: row.id, nom: row.nom }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl ServiceLineRepository for PgServiceLineRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceLine>, DomainError> {
        let row: Option<ServiceLineRow> =
            sqlx::query_as("SELECT id, nom FROM service_lines WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding service line by id", e))?;
        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<ServiceLine>, DomainError> {
        let rows: Vec<ServiceLineRow> =
            sqlx::query_as("SELECT id, nom FROM service_lines ORDER BY nom")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("listing service lines", e))?;
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, nom: &str) -> Result<ServiceLine, DomainError> {
        let row: ServiceLineRow =
            sqlx::query_as("INSERT INTO service_lines (nom) VALUES ($1) RETURNING id, nom")
                .bind(nom)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_error("creating service line", e))?;
        Ok(row.into())
    }

    async fn update(&self, line: &ServiceLine) -> Result<ServiceLine, DomainError> {
        let row: ServiceLineRow = sqlx::query_as(
            "UPDATE service_lines SET nom = $2 WHERE id = $1 RETURNING id, nom",
        )
        .bind(line.id)
        .bind(&line.nom)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("updating service line", e))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM service_lines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting service line", e))?;
        Ok(())
    }
}
