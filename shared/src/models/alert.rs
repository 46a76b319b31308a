//! Stock alert models

use serde::{Deserialize, Serialize};

use super::Category;

/// Alert kinds, in detection precedence order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowStock,
    ExpiringSoon,
    Expired,
    MaintenanceDue,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::LowStock => "low_stock",
            AlertKind::ExpiringSoon => "expiring_soon",
            AlertKind::Expired => "expired",
            AlertKind::MaintenanceDue => "maintenance_due",
        }
    }
}

/// A threshold violation for one inventory item.
/// Derived on every analysis pass, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub category: Category,
    pub item_id: String,
    pub item_name: String,
    pub kind: AlertKind,
    pub message: String,
}
