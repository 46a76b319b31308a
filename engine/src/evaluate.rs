//! Health and turnover evaluator: scalar scores over stock data

use rust_decimal::Decimal;

use shared::{CategorySummary, HealthLevel, StockData};

use crate::thresholds::{EFFICIENCY_GOOD, EFFICIENCY_WARNING};

/// Share of items (percent, 0-100) whose status is not "expired" or
/// "low", across every category. Empty stock counts as fully healthy.
pub fn stock_efficiency(data: &StockData) -> f64 {
    let mut total = 0u64;
    let mut healthy = 0u64;
    for item in data.all_items() {
        total += 1;
        let unhealthy = item
            .status
            .as_deref()
            .map(|s| {
                let s = s.to_lowercase();
                s == "expired" || s == "low"
            })
            .unwrap_or(false);
        if !unhealthy {
            healthy += 1;
        }
    }
    if total == 0 {
        return 100.0;
    }
    100.0 * healthy as f64 / total as f64
}

/// Band an efficiency score into a health label. Thresholds are fixed
/// constants, not configurable per category.
pub fn health_label(efficiency: f64) -> HealthLevel {
    if efficiency >= EFFICIENCY_GOOD {
        HealthLevel::Good
    } else if efficiency >= EFFICIENCY_WARNING {
        HealthLevel::Warning
    } else {
        HealthLevel::Critical
    }
}

/// How many average-value units the category's total value represents.
/// Uses the division form rather than reducing to `count` so that a zero
/// value or zero count yields zero instead of a degenerate ratio.
pub fn turnover(summary: &CategorySummary) -> Decimal {
    if summary.count == 0 || summary.value.is_zero() {
        return Decimal::ZERO;
    }
    let average_unit_value = summary.value / Decimal::from(summary.count);
    if average_unit_value.is_zero() {
        return Decimal::ZERO;
    }
    summary.value / average_unit_value
}

/// Signed percent change from `previous` to `current`. A zero baseline
/// reports 100% when anything appeared and 0% otherwise.
pub fn growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 {
            return 100.0;
        }
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Month-over-month growth from the last two points of a trend series
pub fn trend_growth(summary: &CategorySummary) -> f64 {
    growth_rate(
        summary.trend.latest() as f64,
        summary.trend.previous() as f64,
    )
}
