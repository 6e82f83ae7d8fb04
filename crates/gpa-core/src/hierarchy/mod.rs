//! # GPA Core - Hierarchy Module
//!
//! Forest reconstruction from flat variable-action lists, hierarchical
//! code generation, and the sibling weight policy.

pub mod code;
pub mod tree;
pub mod weights;

pub use code::{level_from_code, next_code};
pub use tree::{build_forest, HierarchyNode};
pub use weights::{check_sum, rebalance};
