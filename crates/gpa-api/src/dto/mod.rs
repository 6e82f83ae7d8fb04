//! Request/response DTOs

pub mod exercice;
pub mod plan_action;
pub mod service_line;
pub mod user;
pub mod variable_action;

pub use exercice::ExerciceRequest;
pub use plan_action::{PlanActionRequest, StatusRequest};
pub use service_line::{ProfilRequest, ServiceLineRequest};
pub use user::UserRequest;
pub use variable_action::{
    FigeRequest, HierarchyQuery, MoveQuery, VariableActionDetailDto, VariableActionRequest,
};
