// ============================================================================
// GPA Infrastructure - PostgreSQL User Repository
// File: crates/gpa-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::{error, info};

use gpa_core::domain::User;
use gpa_core::error::DomainError;
use gpa_core::repositories::{NewUser, UserRepository};

// Profile names come back aggregated into a text[] per user.
const SELECT: &str = "SELECT u.id, u.nom, u.prenom, u.username, u.email, u.actif, \
                      u.service_line_id, u.created_at, u.updated_at, \
                      COALESCE(ARRAY_AGG(p.nom ORDER BY p.nom) \
                               FILTER (WHERE p.nom IS NOT NULL), '{}') AS profils \
                      FROM users u \
                      LEFT JOIN user_profils up ON up.user_id = u.id \
                      LEFT JOIN profils p ON p.id = up.profil_id";

const GROUP_BY: &str = "GROUP BY u.id";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn replace_profils(
        tx: &mut Transaction<'_, Postgres>,
        user_id: i64,
        profils: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM user_profils WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut **tx)
            .await?;
        for nom in profils {
            sqlx::query(
                "INSERT INTO user_profils (user_id, profil_id) \
                 SELECT $1, id FROM profils WHERE nom = $2",
            )
            .bind(user_id)
            .bind(nom)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub username: String,
    pub email: String,
    pub actif: bool,
    pub service_line_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub profils: Vec<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            nom: row.nom,
            prenom: row.prenom,
            username: row.username,
            email: row.email,
            actif: row.actif,
            service_line_id: row.service_line_id,
            profils: row.profils,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("{} WHERE u.id = $1 {}", SELECT, GROUP_BY))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding user by id", e))?;
        Ok(row.map(|r| r.into()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "{} WHERE LOWER(u.username) = LOWER($1) {}",
            SELECT, GROUP_BY
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding user by username", e))?;
        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> =
            sqlx::query_as(&format!("{} {} ORDER BY u.nom, u.prenom", SELECT, GROUP_BY))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("listing users", e))?;
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, new: &NewUser) -> Result<User, DomainError> {
        info!("Creating user with username: {}", new.username);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("starting user create transaction", e))?;

        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (nom, prenom, username, email, actif, service_line_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(&new.nom)
        .bind(&new.prenom)
        .bind(&new.username)
        .bind(&new.email)
        .bind(new.actif)
        .bind(new.service_line_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("Database error creating user: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::ValidationError(format!("username already taken: {}", new.username))
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Self::replace_profils(&mut tx, id, &new.profils)
            .await
            .map_err(|e| db_error("assigning user profils", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("committing user create", e))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::InternalError("user vanished after insert".to_string()))
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("starting user update transaction", e))?;

        sqlx::query(
            "UPDATE users \
             SET nom = $2, prenom = $3, username = $4, email = $5, actif = $6, \
                 service_line_id = $7, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(user.id)
        .bind(&user.nom)
        .bind(&user.prenom)
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.actif)
        .bind(user.service_line_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("updating user", e))?;

        Self::replace_profils(&mut tx, user.id, &user.profils)
            .await
            .map_err(|e| db_error("reassigning user profils", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("committing user update", e))?;

        self.find_by_id(user.id)
            .await?
            .ok_or(DomainError::UserNotFound(user.id))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting user", e))?;
        Ok(())
    }
}
