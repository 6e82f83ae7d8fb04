//! # GPA Shared
//!
//! Shared utilities, types, and telemetry for the action-plan application.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod types;
pub mod utils;

pub use error::AppError;
pub use types::*;
