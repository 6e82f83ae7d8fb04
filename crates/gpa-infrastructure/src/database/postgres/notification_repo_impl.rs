//! PostgreSQL notification repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

use gpa_core::domain::{Notification, NotificationKind};
use gpa_core::error::DomainError;
use gpa_core::repositories::{NewNotification, NotificationRepository};

const COLUMNS: &str = "id, titre, contenu, kind, user_id, recu, created_at";

pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRow {
    pub id: i64,
    pub titre: String,
    pub contenu: String,
    pub kind: String,
    pub user_id: i64,
    pub recu: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Notification {
            id: row.id,
            titre: row.titre,
            contenu: row.contenu,
            kind: NotificationKind::from_str(&row.kind),
            user_id: row.user_id,
            recu: row.recu,
            created_at: row.created_at,
        }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Notification>, DomainError> {
        let row: Option<NotificationRow> =
            sqlx::query_as(&format!("SELECT {} FROM notifications WHERE id = $1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding notification by id", e))?;
        Ok(row.map(|r| r.into()))
    }

    async fn find_for_user(&self, user_id: i64) -> Result<Vec<Notification>, DomainError> {
        let rows: Vec<NotificationRow> = sqlx::query_as(&format!(
            "SELECT {} FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing notifications", e))?;
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn count_unread(&self, user_id: i64) -> Result<i64, DomainError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND recu = false",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("counting unread notifications", e))?;
        Ok(count)
    }

    async fn create(&self, new: &NewNotification) -> Result<Notification, DomainError> {
        let row: NotificationRow = sqlx::query_as(&format!(
            "INSERT INTO notifications (titre, contenu, kind, user_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {}",
            COLUMNS
        ))
        .bind(&new.titre)
        .bind(&new.contenu)
        .bind(new.kind.as_str())
        .bind(new.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating notification", e))?;
        Ok(row.into())
    }

    async fn mark_read(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("UPDATE notifications SET recu = true WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("marking notification read", e))?;
        Ok(())
    }
}
