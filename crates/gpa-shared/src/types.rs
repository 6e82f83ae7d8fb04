//! Common types

/// Backend-assigned numeric identifier (BIGSERIAL).
pub type EntityId = i64;
