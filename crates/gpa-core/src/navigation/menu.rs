// ============================================================================
// GPA Core - Menu Item Entity
// File: crates/gpa-core/src/navigation/menu.rs
// Description: Tagged menu tree with typed role requirements
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Common fields shared by every visible menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// `None` means visible to every authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_roles: Option<BTreeSet<String>>,
}

impl MenuEntry {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: None,
            icon: None,
            link: None,
            required_roles: None,
        }
    }

    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    pub fn roles(mut self, roles: &[&str]) -> Self {
        self.required_roles = Some(roles.iter().map(|r| r.to_string()).collect());
        self
    }
}

/// A menu tree node. The `type` tag on the wire matches the original
/// front-end values ("basic", "collapsable", "group", "divider").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MenuItem {
    #[serde(rename = "basic")]
    Basic(MenuEntry),
    #[serde(rename = "collapsable")]
    Collapsible {
        #[serde(flatten)]
        entry: MenuEntry,
        children: Vec<MenuItem>,
    },
    #[serde(rename = "group")]
    GroupHeader {
        #[serde(flatten)]
        entry: MenuEntry,
        children: Vec<MenuItem>,
    },
    #[serde(rename = "divider")]
    Divider { id: String },
}

impl MenuItem {
    pub fn id(&self) -> &str {
        match self {
            MenuItem::Basic(entry) => &entry.id,
            MenuItem::Collapsible { entry, .. } => &entry.id,
            MenuItem::GroupHeader { entry, .. } => &entry.id,
            MenuItem::Divider { id } => id,
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, MenuItem::Divider { .. })
    }

    /// Role requirement, if any. Dividers never carry one.
    pub fn required_roles(&self) -> Option<&BTreeSet<String>> {
        match self {
            MenuItem::Basic(entry) => entry.required_roles.as_ref(),
            MenuItem::Collapsible { entry, .. } => entry.required_roles.as_ref(),
            MenuItem::GroupHeader { entry, .. } => entry.required_roles.as_ref(),
            MenuItem::Divider { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&[MenuItem]> {
        match self {
            MenuItem::Collapsible { children, .. } | MenuItem::GroupHeader { children, .. } => {
                Some(children)
            }
            _ => None,
        }
    }
}
