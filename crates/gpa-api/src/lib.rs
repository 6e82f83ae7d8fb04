//! # GPA API
//!
//! HTTP handlers, middleware, DTOs, response envelope, and router.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::api_router;
pub use state::AppState;
