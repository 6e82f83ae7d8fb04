//! HTTP handlers

pub mod audit_logs;
pub mod dashboard;
pub mod exercices;
pub mod health;
pub mod navigation;
pub mod notifications;
pub mod plan_actions;
pub mod service_lines;
pub mod users;
pub mod variable_actions;
