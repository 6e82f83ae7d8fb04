//! Domain services (business logic)

pub mod audit_service;
pub mod dashboard_service;
pub mod exercice_service;
pub mod notification_service;
pub mod plan_action_service;
pub mod service_line_service;
pub mod user_service;
pub mod variable_action_service;

pub use audit_service::AuditService;
pub use dashboard_service::{DashboardService, DashboardStats};
pub use exercice_service::ExerciceService;
pub use notification_service::NotificationService;
pub use plan_action_service::{PlanActionInput, PlanActionService};
pub use service_line_service::ServiceLineService;
pub use user_service::{UserInput, UserService};
pub use variable_action_service::{
    VariableActionDetail, VariableActionInput, VariableActionService,
};
