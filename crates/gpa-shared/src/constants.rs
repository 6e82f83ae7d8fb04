//! Application-wide constants

/// Maximum depth of a variable-action tree (root = 1).
pub const MAX_HIERARCHY_LEVEL: i32 = 4;

/// Tolerance when checking that sibling weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Prefix of hierarchical variable-action codes ("VA1", "VA11", ...).
pub const CODE_PREFIX: &str = "VA";

pub const ROLE_ADMINISTRATEUR: &str = "ADMINISTRATEUR";
pub const ROLE_DIRECTEUR_GENERAL: &str = "DIRECTEUR_GENERAL";
pub const ROLE_COLLABORATEUR: &str = "COLLABORATEUR";
