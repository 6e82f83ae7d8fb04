//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Variable action not found: {0}")]
    VariableActionNotFound(i64),

    #[error("Plan action not found: {0}")]
    PlanActionNotFound(i64),

    #[error("Exercice not found: {0}")]
    ExerciceNotFound(i64),

    #[error("Service line not found: {0}")]
    ServiceLineNotFound(i64),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Profil not found: {0}")]
    ProfilNotFound(i64),

    #[error("Notification not found: {0}")]
    NotificationNotFound(i64),

    #[error("Variable action {0} still has children")]
    HasChildren(i64),

    #[error("Moving variable action {0} would create a cycle")]
    CycleDetected(i64),

    #[error("Parent variable action {0} is locked (fige)")]
    ParentLocked(i64),

    #[error("Variable action {0} is locked (fige), edits are rejected")]
    VariableActionLocked(i64),

    #[error("Plan action {0} is locked, edits are rejected")]
    PlanLocked(i64),

    #[error("Parent {parent_id} is at level {level}, maximum depth reached")]
    MaxDepthExceeded { parent_id: i64, level: i32 },

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Sibling weights sum to {sum}, expected 1.0")]
    WeightSumInvalid { sum: f64 },

    #[error("Access denied: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
