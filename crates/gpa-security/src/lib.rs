//! # GPA Security
//!
//! Token handling for the API: JWT issuing and validation.

pub mod jwt;

pub use jwt::{Claims, JwtError, JwtService};
