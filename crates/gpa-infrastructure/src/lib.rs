//! # GPA Infrastructure
//!
//! PostgreSQL implementations of the core repository traits (adapters).

pub mod database;

pub use database::{
    create_pool, PgAuditRepository, PgExerciceRepository, PgNotificationRepository,
    PgPlanActionRepository, PgProfilRepository, PgServiceLineRepository, PgUserRepository,
    PgVariableActionRepository,
};
