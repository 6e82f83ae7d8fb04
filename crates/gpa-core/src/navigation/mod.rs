//! # GPA Core - Navigation Module
//!
//! Typed menu tree, role-based filtering, and the route guard.

pub mod default_menu;
pub mod filter;
pub mod guard;
pub mod menu;

pub use default_menu::default_navigation;
pub use filter::filter_menu_by_roles;
pub use guard::{ensure_any_role, has_any_role};
pub use menu::{MenuEntry, MenuItem};
