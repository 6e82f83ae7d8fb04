//! Dashboard aggregates for the landing page.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::PlanStatus;
use crate::error::DomainError;
use crate::repositories::{
    NotificationRepository, PlanActionRepository, VariableActionRepository,
};

/// Counters shown on the landing page, scoped to the calling user where
/// it matters (assigned variables, unread notifications).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub plans_total: i64,
    pub plans_planification: i64,
    pub plans_en_cours: i64,
    pub plans_suivi_realisation: i64,
    pub plans_verrouille: i64,
    pub variables_total: i64,
    pub my_variables: i64,
    pub unread_notifications: i64,
}

pub struct DashboardService {
    plan_repo: Arc<dyn PlanActionRepository>,
    va_repo: Arc<dyn VariableActionRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
}

impl DashboardService {
    pub fn new(
        plan_repo: Arc<dyn PlanActionRepository>,
        va_repo: Arc<dyn VariableActionRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self { plan_repo, va_repo, notification_repo }
    }

    pub async fn stats_for(&self, user_id: i64) -> Result<DashboardStats, DomainError> {
        let plans_planification =
            self.plan_repo.count_by_status(PlanStatus::Planification).await?;
        let plans_en_cours = self.plan_repo.count_by_status(PlanStatus::EnCours).await?;
        let plans_suivi_realisation =
            self.plan_repo.count_by_status(PlanStatus::SuiviRealisation).await?;
        let plans_verrouille = self.plan_repo.count_by_status(PlanStatus::Verrouille).await?;

        let variables = self.va_repo.find_all().await?;
        let variables_total = variables.len() as i64;
        let my_variables = variables
            .iter()
            .filter(|va| va.responsable_id == user_id)
            .count() as i64;

        let unread_notifications = self.notification_repo.count_unread(user_id).await?;

        Ok(DashboardStats {
            plans_total: plans_planification
                + plans_en_cours
                + plans_suivi_realisation
                + plans_verrouille,
            plans_planification,
            plans_en_cours,
            plans_suivi_realisation,
            plans_verrouille,
            variables_total,
            my_variables,
            unread_notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VariableAction;
    use crate::repositories::notification_repository::MockNotificationRepository;
    use crate::repositories::plan_action_repository::MockPlanActionRepository;
    use crate::repositories::variable_action_repository::MockVariableActionRepository;
    use chrono::Utc;

    fn va(id: i64, responsable_id: i64) -> VariableAction {
        VariableAction {
            id,
            code: Some(format!("VA{}", id)),
            description: format!("VA {}", id),
            poids: 1.0,
            fige: false,
            niveau: 1,
            ordre: Some(1),
            responsable_id,
            plan_action_id: 1,
            va_mere_id: None,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_stats_scoped_to_caller() {
        let mut plan_repo = MockPlanActionRepository::new();
        plan_repo
            .expect_count_by_status()
            .returning(|statut| match statut {
                PlanStatus::EnCours => Ok(2),
                PlanStatus::Verrouille => Ok(1),
                _ => Ok(0),
            });
        let mut va_repo = MockVariableActionRepository::new();
        va_repo
            .expect_find_all()
            .returning(|| Ok(vec![va(1, 7), va(2, 7), va(3, 9)]));
        let mut notification_repo = MockNotificationRepository::new();
        notification_repo.expect_count_unread().returning(|_| Ok(4));

        let service = DashboardService::new(
            Arc::new(plan_repo),
            Arc::new(va_repo),
            Arc::new(notification_repo),
        );
        let stats = service.stats_for(7).await.unwrap();

        assert_eq!(stats.plans_total, 3);
        assert_eq!(stats.plans_en_cours, 2);
        assert_eq!(stats.variables_total, 3);
        assert_eq!(stats.my_variables, 2);
        assert_eq!(stats.unread_notifications, 4);
    }
}
