//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use gpa_core::navigation::MenuItem;
use gpa_core::services::{
    AuditService, DashboardService, ExerciceService, NotificationService, PlanActionService,
    ServiceLineService, UserService, VariableActionService,
};
use gpa_security::JwtService;
use gpa_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: AppConfig,
    pub jwt: Arc<JwtService>,
    /// Full menu definition; filtered per caller in the navigation handler.
    pub menu: Arc<Vec<MenuItem>>,
    pub variable_actions: Arc<VariableActionService>,
    pub plan_actions: Arc<PlanActionService>,
    pub exercices: Arc<ExerciceService>,
    pub service_lines: Arc<ServiceLineService>,
    pub users: Arc<UserService>,
    pub notifications: Arc<NotificationService>,
    pub dashboard: Arc<DashboardService>,
    pub audit: Arc<AuditService>,
}
