//! Per-category aggregate summary models

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trailing monthly counts, oldest to newest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub values: Vec<u64>,
    /// True when the preceding months were derived from the current count
    /// rather than supplied by the backend as real historical snapshots
    pub synthesized: bool,
}

impl TrendSeries {
    /// Number of trailing months covered by a series
    pub const MONTHS: usize = 6;

    /// All-zero series used for empty categories
    pub fn zeroed() -> Self {
        Self {
            values: vec![0; Self::MONTHS],
            synthesized: true,
        }
    }

    /// Current month's value (last element)
    pub fn latest(&self) -> u64 {
        self.values.last().copied().unwrap_or(0)
    }

    /// Previous month's value (second to last element)
    pub fn previous(&self) -> u64 {
        if self.values.len() < 2 {
            return 0;
        }
        self.values[self.values.len() - 2]
    }
}

/// Expiry breakdown for perishable categories
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryStatus {
    pub expired: u64,
    pub near_expiry: u64,
    pub valid: u64,
}

impl ExpiryStatus {
    pub fn total(&self) -> u64 {
        self.expired + self.near_expiry + self.valid
    }
}

/// Aggregate metrics for one category in one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub count: u64,
    pub value: Decimal,
    /// Item counts grouped by sub-type, `"unknown"` when absent
    pub types: BTreeMap<String, u64>,
    pub trend: TrendSeries,
    /// Present only when at least one item carries an expiry date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_status: Option<ExpiryStatus>,
    /// Present only for categories with a defined status vocabulary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<BTreeMap<String, u64>>,
}

impl CategorySummary {
    /// Summary substituted when a category has no usable payload
    pub fn empty() -> Self {
        Self {
            count: 0,
            value: Decimal::ZERO,
            types: BTreeMap::new(),
            trend: TrendSeries::zeroed(),
            expiry_status: None,
            health_status: None,
        }
    }
}
