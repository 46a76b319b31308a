//! Analysis orchestrator: the single entry point the presentation layer
//! calls once per refresh
//!
//! The caller fetches all per-category payloads and sibling snapshots
//! (concurrently, if it likes) and hands them over as plain data; one
//! synchronous pass produces the complete report. A payload under an
//! unrecognized tag, or a missing payload, degrades to an empty category
//! slot so downstream evaluators always see all 8 categories.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use shared::{
    Alert, Category, CategoryStock, HealthLevel, Insight, SiblingSnapshots, StockData,
    StockItem,
};

use crate::aggregate::aggregate;
use crate::alerts::detect_alerts;
use crate::evaluate::{health_label, stock_efficiency};
use crate::insights::generate_insights;
use crate::normalize::normalize_items;

/// Everything one analysis pass consumes, keyed the way the API layer
/// delivers it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    /// Raw per-category item payloads, keyed by category tag
    #[serde(default)]
    pub raw_categories: BTreeMap<String, Vec<Value>>,
    /// Real trailing monthly counts per category, when the backend has
    /// them; categories without history get a synthesized trend
    #[serde(default)]
    pub history: BTreeMap<String, Vec<u64>>,
    #[serde(default)]
    pub snapshots: SiblingSnapshots,
}

/// The complete, JSON-serializable output of one analysis pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub data: StockData,
    pub alerts: Vec<Alert>,
    /// Sorted by priority descending
    pub insights: Vec<Insight>,
    pub stock_efficiency: f64,
    pub health: HealthLevel,
}

/// Run one analysis pass against the current wall clock
pub fn run_analysis(input: &AnalysisInput) -> AnalysisReport {
    run_analysis_at(input, Utc::now())
}

/// Run one analysis pass at an explicit instant
pub fn run_analysis_at(input: &AnalysisInput, now: DateTime<Utc>) -> AnalysisReport {
    let mut normalized: BTreeMap<Category, Vec<StockItem>> = BTreeMap::new();
    for (tag, raw) in &input.raw_categories {
        match tag.parse::<Category>() {
            Ok(category) => {
                normalized.insert(category, normalize_items(raw, category));
            }
            Err(err) => {
                warn!(category = %tag, %err, "treating category payload as empty");
            }
        }
    }

    let mut data = StockData::new_empty();
    for category in Category::ALL {
        let items = normalized.remove(&category).unwrap_or_default();
        let history = input
            .history
            .get(category.as_str())
            .map(|values| values.as_slice());
        let summary = aggregate(category, &items, history, now);
        data.categories
            .insert(category, CategoryStock { items, summary });
    }

    let alerts = detect_alerts(&data, now);
    let insights = generate_insights(&data, &input.snapshots, now);
    let efficiency = stock_efficiency(&data);

    AnalysisReport {
        generated_at: now,
        data,
        alerts,
        insights,
        stock_efficiency: efficiency,
        health: health_label(efficiency),
    }
}
