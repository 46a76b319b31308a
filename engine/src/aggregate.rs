//! Aggregator: normalized items to a per-category summary

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::warn;

use shared::{Category, CategorySummary, ExpiryStatus, StockItem, TrendSeries};

use crate::thresholds::EXPIRY_WINDOW_DAYS;

/// Reduce a category's normalized items into its aggregate summary.
///
/// `history` supplies real trailing monthly counts when the backend has
/// them; it is used verbatim. Without it the trailing months are
/// synthesized from the current count (see [`synthesize_trend`]) and the
/// summary's trend is flagged as synthesized.
pub fn aggregate(
    category: Category,
    items: &[StockItem],
    history: Option<&[u64]>,
    now: DateTime<Utc>,
) -> CategorySummary {
    let count = items.len() as u64;
    let value: Decimal = items.iter().map(|item| item.value).sum();

    let mut types: BTreeMap<String, u64> = BTreeMap::new();
    for item in items {
        let key = item
            .item_type
            .clone()
            .unwrap_or_else(|| "unknown".to_string());
        *types.entry(key).or_insert(0) += 1;
    }

    let trend = match history {
        Some(values) if values.len() == TrendSeries::MONTHS => TrendSeries {
            values: values.to_vec(),
            synthesized: false,
        },
        Some(values) => {
            warn!(
                category = %category,
                months = values.len(),
                "history does not cover the trailing months, synthesizing trend"
            );
            synthesize_trend(count)
        }
        None => synthesize_trend(count),
    };

    CategorySummary {
        count,
        value,
        types,
        trend,
        expiry_status: expiry_breakdown(items, now),
        health_status: health_breakdown(category, items),
    }
}

/// Derive a trailing trend from the current count alone.
///
/// The current month is the count itself; each preceding month applies a
/// bounded seasonal and random adjustment. This is an approximation for
/// presentation continuity, not a measurement, which is why the series
/// carries `synthesized = true`.
fn synthesize_trend(count: u64) -> TrendSeries {
    let mut rng = rand::rng();
    let mut values = vec![0u64; TrendSeries::MONTHS];
    values[TrendSeries::MONTHS - 1] = count;
    for offset in 1..TrendSeries::MONTHS {
        let seasonal =
            0.9 + 0.1 * (2.0 * std::f64::consts::PI * offset as f64 / 12.0).sin();
        let random = rng.random_range(0.7..=1.3);
        let adjusted = (count as f64 * seasonal * random).max(0.0).round();
        values[TrendSeries::MONTHS - 1 - offset] = adjusted as u64;
    }
    TrendSeries {
        values,
        synthesized: true,
    }
}

/// Classify expiry state per item; present only when at least one item
/// carries an expiry date. Items without one count as valid so the
/// breakdown always partitions the item count.
fn expiry_breakdown(items: &[StockItem], now: DateTime<Utc>) -> Option<ExpiryStatus> {
    if !items.iter().any(|item| item.expiry_date.is_some()) {
        return None;
    }
    let horizon = now + Duration::days(EXPIRY_WINDOW_DAYS);
    let mut status = ExpiryStatus::default();
    for item in items {
        match item.expiry_date {
            Some(expiry) if expiry < now => status.expired += 1,
            Some(expiry) if expiry < horizon => status.near_expiry += 1,
            _ => status.valid += 1,
        }
    }
    Some(status)
}

/// Tally item statuses against the category's vocabulary, defaulting
/// unrecognized or missing statuses to the first bucket
fn health_breakdown(
    category: Category,
    items: &[StockItem],
) -> Option<BTreeMap<String, u64>> {
    let vocabulary = category.status_vocabulary()?;
    let mut breakdown: BTreeMap<String, u64> = vocabulary
        .iter()
        .map(|status| (status.to_string(), 0))
        .collect();
    for item in items {
        let bucket = item
            .status
            .as_deref()
            .map(|s| s.to_lowercase())
            .filter(|s| vocabulary.contains(&s.as_str()))
            .unwrap_or_else(|| vocabulary[0].to_string());
        *breakdown.entry(bucket).or_insert(0) += 1;
    }
    Some(breakdown)
}
