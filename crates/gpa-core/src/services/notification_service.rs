//! Notification service (in-app alerts)

use std::sync::Arc;

use tracing::error;

use crate::domain::{Notification, NotificationKind};
use crate::error::DomainError;
use crate::repositories::{NewNotification, NotificationRepository};

pub struct NotificationService {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    /// Notify a user that a variable action was assigned to them.
    /// Best-effort: a failed notification never fails the assignment.
    pub async fn notify_variable_assigned(&self, user_id: i64, display_name: &str) {
        let new = NewNotification {
            titre: "Nouvelle variable d'action".to_string(),
            contenu: format!("La variable \"{}\" vous a été affectée", display_name),
            kind: NotificationKind::Affectation,
            user_id,
        };
        if let Err(e) = self.repo.create(&new).await {
            error!("Failed to create assignment notification: {}", e);
        }
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Notification>, DomainError> {
        self.repo.find_for_user(user_id).await
    }

    pub async fn unread_count(&self, user_id: i64) -> Result<i64, DomainError> {
        self.repo.count_unread(user_id).await
    }

    pub async fn mark_read(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotificationNotFound(id));
        }
        self.repo.mark_read(id).await
    }
}
