//! Static application menu definition.
//!
//! Built once at startup and owned by the API state; the per-user view is
//! derived with [`super::filter_menu_by_roles`].

use gpa_shared::constants::{ROLE_ADMINISTRATEUR, ROLE_COLLABORATEUR, ROLE_DIRECTEUR_GENERAL};

use super::menu::{MenuEntry, MenuItem};

pub fn default_navigation() -> Vec<MenuItem> {
    vec![
        MenuItem::Basic(
            MenuEntry::new("dashboard", "Dashboard")
                .icon("heroicons_outline:home")
                .link("/dashboard"),
        ),
        MenuItem::Basic(
            MenuEntry::new("planification", "Planification")
                .icon("heroicons_outline:document-text")
                .link("/planification")
                .roles(&[ROLE_DIRECTEUR_GENERAL, ROLE_COLLABORATEUR]),
        ),
        MenuItem::Collapsible {
            entry: MenuEntry::new("plans", "Action Plans")
                .subtitle("Manage strategic plans")
                .icon("heroicons_outline:document-text")
                .roles(&[ROLE_DIRECTEUR_GENERAL, ROLE_COLLABORATEUR]),
            children: vec![
                MenuItem::Basic(
                    MenuEntry::new("plans.list", "All Plans")
                        .icon("heroicons_outline:list-bullet")
                        .link("/plans"),
                ),
                MenuItem::Basic(
                    MenuEntry::new("plans.create", "Create Plan")
                        .icon("heroicons_outline:plus")
                        .link("/plans/create"),
                ),
            ],
        },
        MenuItem::Basic(
            MenuEntry::new("variables", "Action Variables")
                .subtitle("Manage plan variables")
                .icon("heroicons_outline:variable")
                .link("/variables")
                .roles(&[ROLE_DIRECTEUR_GENERAL, ROLE_COLLABORATEUR]),
        ),
        MenuItem::Basic(
            MenuEntry::new("exercises", "Exercises")
                .subtitle("Yearly exercises")
                .icon("heroicons_outline:calendar")
                .link("/exercises")
                .roles(&[ROLE_DIRECTEUR_GENERAL, ROLE_COLLABORATEUR]),
        ),
        MenuItem::Divider { id: "divider-1".to_string() },
        MenuItem::GroupHeader {
            entry: MenuEntry::new("admin", "Administration")
                .subtitle("System management")
                .icon("heroicons_outline:cog-6-tooth")
                .roles(&[ROLE_ADMINISTRATEUR]),
            children: vec![
                MenuItem::Basic(
                    MenuEntry::new("admin.users", "User Management")
                        .icon("heroicons_outline:users")
                        .link("/user"),
                ),
                MenuItem::Basic(
                    MenuEntry::new("admin.profiles", "Profile Management")
                        .icon("heroicons_outline:identification")
                        .link("/profiles"),
                ),
                MenuItem::Basic(
                    MenuEntry::new("admin.servicelines", "Service Lines")
                        .icon("heroicons_outline:building-office")
                        .link("/service-lines"),
                ),
            ],
        },
        MenuItem::Divider { id: "divider-2".to_string() },
        MenuItem::Basic(
            MenuEntry::new("notifications", "Notifications")
                .subtitle("System alerts")
                .icon("heroicons_outline:bell")
                .link("/alerts"),
        ),
        MenuItem::Basic(
            MenuEntry::new("admin.audit", "Audit Logs")
                .icon("heroicons_outline:eye")
                .link("/admin/audit")
                .roles(&[ROLE_ADMINISTRATEUR]),
        ),
        MenuItem::Basic(
            MenuEntry::new("profile", "Profile")
                .subtitle("Account settings")
                .icon("heroicons_outline:user-circle")
                .link("/account-settings"),
        ),
    ]
}
