//! # GPA Core - Domain Module
//!
//! Domain entities for the action-plan application.

pub mod audit_log;
pub mod exercice;
pub mod notification;
pub mod plan_action;
pub mod profil;
pub mod service_line;
pub mod user;
pub mod variable_action;

// Re-export all entities and enums
pub use audit_log::AuditLog;
pub use exercice::Exercice;
pub use notification::{Notification, NotificationKind};
pub use plan_action::{PlanAction, PlanStatus};
pub use profil::Profil;
pub use service_line::ServiceLine;
pub use user::User;
pub use variable_action::VariableAction;
