//! PostgreSQL repository implementations

pub mod audit_repo_impl;
pub mod exercice_repo_impl;
pub mod notification_repo_impl;
pub mod plan_action_repo_impl;
pub mod profil_repo_impl;
pub mod service_line_repo_impl;
pub mod user_repo_impl;
pub mod variable_action_repo_impl;

pub use audit_repo_impl::PgAuditRepository;
pub use exercice_repo_impl::PgExerciceRepository;
pub use notification_repo_impl::PgNotificationRepository;
pub use plan_action_repo_impl::PgPlanActionRepository;
pub use profil_repo_impl::PgProfilRepository;
pub use service_line_repo_impl::PgServiceLineRepository;
pub use user_repo_impl::PgUserRepository;
pub use variable_action_repo_impl::PgVariableActionRepository;
