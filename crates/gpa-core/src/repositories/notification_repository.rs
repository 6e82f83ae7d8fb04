//! Notification repository trait (port)

use async_trait::async_trait;

use crate::domain::{Notification, NotificationKind};
use crate::error::DomainError;

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub titre: String,
    pub contenu: String,
    pub kind: NotificationKind,
    pub user_id: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Notification>, DomainError>;
    async fn find_for_user(&self, user_id: i64) -> Result<Vec<Notification>, DomainError>;
    async fn count_unread(&self, user_id: i64) -> Result<i64, DomainError>;
    async fn create(&self, new: &NewNotification) -> Result<Notification, DomainError>;
    async fn mark_read(&self, id: i64) -> Result<(), DomainError>;
}
