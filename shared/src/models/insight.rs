//! Synthesized insight models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::TrendDirection;

/// Severity band of an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Critical,
    Warning,
    Info,
    Success,
}

/// Domain the rule that produced the insight draws from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    Stock,
    Wallet,
    Weather,
    Education,
    Blog,
    CrossDomain,
    System,
}

/// A concrete labeled value supporting an insight, pulled from the same
/// data that satisfied the rule's predicate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightMetric {
    pub label: String,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendDirection>,
}

impl InsightMetric {
    pub fn new(label: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            unit: None,
            trend: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_trend(mut self, trend: TrendDirection) -> Self {
        self.trend = Some(trend);
        self
    }
}

/// A prioritized, human-readable observation with a recommendation.
/// Ordering is not intrinsic; the presentation layer sorts on `priority`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: Uuid,
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub source: InsightSource,
    /// 0-100, higher surfaces first
    pub priority: u8,
    pub recommendation: String,
    pub metrics: Vec<InsightMetric>,
    pub related_insights: Vec<String>,
}
