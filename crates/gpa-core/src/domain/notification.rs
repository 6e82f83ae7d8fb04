//! Notification entity (in-app alerts)

use chrono::{DateTime, Utc};
use gpa_shared::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    #[serde(rename = "AFFECTATION")]
    Affectation,
    #[serde(rename = "INFO")]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Affectation => "AFFECTATION",
            NotificationKind::Info => "INFO",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "AFFECTATION" => NotificationKind::Affectation,
            _ => NotificationKind::Info,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: EntityId,
    pub titre: String,
    pub contenu: String,
    pub kind: NotificationKind,
    pub user_id: EntityId,
    pub recu: bool,
    pub created_at: DateTime<Utc>,
}
