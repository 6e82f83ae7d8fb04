//! # GPA Core
//!
//! Domain entities, navigation filtering, hierarchy logic, services, and
//! repository traits for the action-plan application.

pub mod domain;
pub mod error;
pub mod hierarchy;
pub mod navigation;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use error::DomainError;
