// ============================================================================
// GPA Core - Navigation Filter
// File: crates/gpa-core/src/navigation/filter.rs
// Description: Role-based filtering of the menu tree
// ============================================================================
//! Pure role filtering over a menu tree.
//!
//! An item is visible when it declares no required roles, or when the
//! user holds at least one of them. Children are filtered before their
//! parent; a group whose children all vanish is retained as an empty
//! group (observed behavior of the original front-end). After filtering,
//! divider cleanup removes consecutive, leading, and trailing dividers.

use std::collections::BTreeSet;

use super::menu::MenuItem;

/// Derive the menu subset visible to a user holding `roles`.
///
/// Returns a new tree; the input is never mutated, so a static menu
/// definition can be filtered once per role-set change and reused across
/// sessions.
pub fn filter_menu_by_roles(items: &[MenuItem], roles: &BTreeSet<String>) -> Vec<MenuItem> {
    let filtered: Vec<MenuItem> = items
        .iter()
        .filter(|item| is_allowed(item, roles))
        .map(|item| match item {
            MenuItem::Collapsible { entry, children } => MenuItem::Collapsible {
                entry: entry.clone(),
                children: filter_menu_by_roles(children, roles),
            },
            MenuItem::GroupHeader { entry, children } => MenuItem::GroupHeader {
                entry: entry.clone(),
                children: filter_menu_by_roles(children, roles),
            },
            other => other.clone(),
        })
        .collect();

    cleanup_dividers(filtered)
}

fn is_allowed(item: &MenuItem, roles: &BTreeSet<String>) -> bool {
    match item.required_roles() {
        None => true,
        Some(required) => !required.is_disjoint(roles),
    }
}

/// Collapse consecutive dividers and drop any that end up first or last,
/// so role-based removal never leaves orphaned separators.
fn cleanup_dividers(items: Vec<MenuItem>) -> Vec<MenuItem> {
    let mut result: Vec<MenuItem> = Vec::with_capacity(items.len());
    let mut last_was_divider = false;

    for item in items {
        if item.is_divider() && last_was_divider {
            continue;
        }
        last_was_divider = item.is_divider();
        result.push(item);
    }

    if result.first().is_some_and(MenuItem::is_divider) {
        result.remove(0);
    }
    if result.last().is_some_and(MenuItem::is_divider) {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::menu::MenuEntry;

    fn roles(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|r| r.to_string()).collect()
    }

    fn basic(id: &str) -> MenuItem {
        MenuItem::Basic(MenuEntry::new(id, id))
    }

    fn basic_with_roles(id: &str, required: &[&str]) -> MenuItem {
        MenuItem::Basic(MenuEntry::new(id, id).roles(required))
    }

    fn divider(id: &str) -> MenuItem {
        MenuItem::Divider { id: id.to_string() }
    }

    #[test]
    fn test_items_without_roles_always_visible() {
        let menu = vec![basic("dashboard"), basic("profile")];
        let out = filter_menu_by_roles(&menu, &roles(&[]));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_role_restricted_item_removed() {
        // Admin item + divider + open item.
        let menu = vec![
            basic_with_roles("admin", &["ADMINISTRATEUR"]),
            divider("divider-1"),
            basic("profile"),
        ];
        let out = filter_menu_by_roles(&menu, &roles(&["COLLABORATEUR"]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id(), "profile");
    }

    #[test]
    fn test_no_item_with_disjoint_roles_survives() {
        let menu = vec![
            basic_with_roles("exercises", &["ADMINISTRATEUR", "DIRECTEUR_GENERAL"]),
            basic_with_roles("planification", &["COLLABORATEUR", "DIRECTEUR_GENERAL"]),
        ];
        let user = roles(&["COLLABORATEUR"]);
        let out = filter_menu_by_roles(&menu, &user);
        for item in &out {
            if let Some(required) = item.required_roles() {
                assert!(!required.is_disjoint(&user));
            }
        }
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id(), "planification");
    }

    #[test]
    fn test_consecutive_dividers_collapsed() {
        let menu = vec![
            basic("a"),
            divider("d1"),
            basic_with_roles("hidden", &["ADMINISTRATEUR"]),
            divider("d2"),
            basic("b"),
        ];
        let out = filter_menu_by_roles(&menu, &roles(&["COLLABORATEUR"]));
        let ids: Vec<&str> = out.iter().map(MenuItem::id).collect();
        assert_eq!(ids, vec!["a", "d1", "b"]);
    }

    #[test]
    fn test_leading_and_trailing_dividers_removed() {
        let menu = vec![divider("d0"), basic("a"), divider("d1")];
        let out = filter_menu_by_roles(&menu, &roles(&[]));
        let ids: Vec<&str> = out.iter().map(MenuItem::id).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn test_children_filtered_but_empty_group_retained() {
        let menu = vec![MenuItem::GroupHeader {
            entry: MenuEntry::new("admin", "Administration"),
            children: vec![basic_with_roles("admin.users", &["ADMINISTRATEUR"])],
        }];
        let out = filter_menu_by_roles(&menu, &roles(&["COLLABORATEUR"]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].children().map(<[MenuItem]>::len), Some(0));
    }

    #[test]
    fn test_filter_is_pure_and_idempotent() {
        let menu = vec![
            basic("dashboard"),
            divider("d1"),
            basic_with_roles("admin", &["ADMINISTRATEUR"]),
            basic("profile"),
        ];
        let user = roles(&["COLLABORATEUR"]);
        let once = filter_menu_by_roles(&menu, &user);
        let twice = filter_menu_by_roles(&menu, &user);
        assert_eq!(once, twice);
        // Original input untouched.
        assert_eq!(menu.len(), 4);
    }
}
