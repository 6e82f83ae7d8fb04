//! Repository traits (ports)

pub mod audit_repository;
pub mod exercice_repository;
pub mod notification_repository;
pub mod plan_action_repository;
pub mod profil_repository;
pub mod service_line_repository;
pub mod user_repository;
pub mod variable_action_repository;

pub use audit_repository::{AuditRepository, NewAuditLog};
pub use exercice_repository::{ExerciceRepository, NewExercice};
pub use notification_repository::{NewNotification, NotificationRepository};
pub use plan_action_repository::{NewPlanAction, PlanActionRepository};
pub use profil_repository::ProfilRepository;
pub use service_line_repository::ServiceLineRepository;
pub use user_repository::{NewUser, UserRepository};
pub use variable_action_repository::{NewVariableAction, VariableActionRepository};
