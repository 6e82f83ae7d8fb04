//! PostgreSQL profil repository

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;

use gpa_core::domain::Profil;
use gpa_core::error::DomainError;
use gpa_core::repositories::ProfilRepository;

pub struct PgProfilRepository {
    pool: PgPool,
}

impl PgProfilRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfilRow {
    pub id: i64,
    pub nom: String,
}

impl From<ProfilRow> for Profil {
    fn from(row: ProfilRow) -> Self {
        Profil { id: row.id, nom: row.nom }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProfilRepository for PgProfilRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Profil>, DomainError> {
        let row: Option<ProfilRow> = sqlx::query_as("SELECT id, nom FROM profils WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding profil by id", e))?;
        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<Profil>, DomainError> {
        let rows: Vec<ProfilRow> = sqlx::query_as("SELECT id, nom FROM profils ORDER BY nom")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing profils", e))?;
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, nom: &str) -> Result<Profil, DomainError> {
        let row: ProfilRow =
            sqlx::query_as("INSERT INTO profils (nom) VALUES ($1) RETURNING id, nom")
                .bind(nom)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    let msg = e.to_string();
                    if msg.contains("unique") || msg.contains("duplicate") {
                        DomainError::ValidationError(format!("profil already exists: {}", nom))
                    } else {
                        db_error("creating profil", e)
                    }
                })?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM profils WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting profil", e))?;
        Ok(())
    }
}
