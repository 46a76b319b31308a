//! Insight generator: prioritized cross-domain observations
//!
//! An ordered table of independent rules, each a pure predicate over the
//! stock snapshot and the optional sibling-domain snapshots, each emitting
//! zero or one insight. Matching insights are collected and stably sorted
//! by priority descending, so equal-priority insights keep their rule
//! order. Rules over a missing snapshot are skipped silently.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use shared::{
    AlertKind, BlogSnapshot, Category, EducationSnapshot, Insight, InsightKind,
    InsightMetric, InsightSource, SiblingSnapshots, StockData, TrendDirection,
    WalletSnapshot, WeatherSnapshot,
};

use crate::alerts::detect_alerts;
use crate::evaluate::{health_label, stock_efficiency};
use crate::thresholds::*;

/// Item totals shared by the stock and composite rules
struct StockTotals {
    low_stock: u64,
    expiring: u64,
}

/// Evaluate every insight rule and return the matches sorted by priority
/// descending (stable: equal priorities keep rule-evaluation order)
pub fn generate_insights(
    data: &StockData,
    snapshots: &SiblingSnapshots,
    now: DateTime<Utc>,
) -> Vec<Insight> {
    let alerts = detect_alerts(data, now);
    let totals = StockTotals {
        low_stock: alerts
            .iter()
            .filter(|a| a.kind == AlertKind::LowStock)
            .count() as u64,
        expiring: alerts
            .iter()
            .filter(|a| matches!(a.kind, AlertKind::ExpiringSoon | AlertKind::Expired))
            .count() as u64,
    };

    let mut insights = Vec::new();
    let mut push = |insight: Option<Insight>| {
        if let Some(insight) = insight {
            debug!(title = %insight.title, priority = insight.priority, "insight rule hit");
            insights.push(insight);
        }
    };

    push(low_stock_rule(&totals));
    push(expiring_rule(&totals));
    push(value_concentration_rule(data));

    if let Some(wallet) = &snapshots.wallet {
        push(overspend_rule(wallet));
        push(income_surplus_rule(wallet));
        push(expense_concentration_rule(wallet));
    }
    if let Some(weather) = &snapshots.weather {
        push(rain_rule(weather));
        push(heat_rule(weather));
        push(optimal_weather_rule(weather));
    }
    if let Some(education) = &snapshots.education {
        push(engagement_rule(education));
        push(lesson_balance_rule(education));
    }
    if let Some(blog) = &snapshots.blog {
        push(blog_stale_rule(blog, now));
    }

    push(restock_opportunity_rule(
        &totals,
        snapshots.wallet.as_ref(),
        snapshots.weather.as_ref(),
    ));
    insights.push(baseline_rule(data));

    insights.sort_by(|a, b| b.priority.cmp(&a.priority));
    insights
}

fn insight(
    kind: InsightKind,
    source: InsightSource,
    priority: u8,
    title: &str,
    description: String,
    recommendation: &str,
    metrics: Vec<InsightMetric>,
) -> Insight {
    Insight {
        id: Uuid::new_v4(),
        kind,
        title: title.to_string(),
        description,
        source,
        priority,
        recommendation: recommendation.to_string(),
        metrics,
        related_insights: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Stock rules
// ---------------------------------------------------------------------------

fn low_stock_rule(totals: &StockTotals) -> Option<Insight> {
    if totals.low_stock <= LOW_STOCK_INSIGHT_MIN {
        return None;
    }
    Some(insight(
        InsightKind::Warning,
        InsightSource::Stock,
        PRIORITY_LOW_STOCK,
        "Multiple Items Low in Stock",
        format!(
            "{} items are at or below their reorder threshold",
            totals.low_stock
        ),
        "Review the restock list and place orders before supplies run out",
        vec![InsightMetric::new("Low Stock Items", totals.low_stock)
            .with_trend(TrendDirection::Up)],
    ))
}

fn expiring_rule(totals: &StockTotals) -> Option<Insight> {
    if totals.expiring == 0 {
        return None;
    }
    Some(insight(
        InsightKind::Critical,
        InsightSource::Stock,
        PRIORITY_EXPIRING,
        "Items Expiring Soon",
        format!(
            "{} items are expired or expire within {} days",
            totals.expiring, EXPIRY_WINDOW_DAYS
        ),
        "Use or dispose of expiring stock first and adjust order sizes",
        vec![InsightMetric::new("Expiring Items", totals.expiring)],
    ))
}

fn value_concentration_rule(data: &StockData) -> Option<Insight> {
    let total = data.total_value();
    if total.is_zero() {
        return None;
    }
    let (category, value) = data
        .categories
        .iter()
        .map(|(category, stock)| (*category, stock.summary.value))
        .max_by_key(|(_, value)| *value)?;
    let share = (value / total * Decimal::from(100)).to_f64().unwrap_or(0.0);
    if share <= VALUE_CONCENTRATION_PERCENT {
        return None;
    }
    Some(insight(
        InsightKind::Info,
        InsightSource::Stock,
        PRIORITY_VALUE_CONCENTRATION,
        "Inventory Value Concentrated",
        format!(
            "{} holds {:.1}% of total inventory value",
            category, share
        ),
        "Consider diversifying holdings to reduce exposure to one category",
        vec![
            InsightMetric::new("Top Category", category.as_str()),
            InsightMetric::new("Value Share", (share * 10.0).round() / 10.0)
                .with_unit("%"),
        ],
    ))
}

// ---------------------------------------------------------------------------
// Wallet rules
// ---------------------------------------------------------------------------

fn overspend_rule(wallet: &WalletSnapshot) -> Option<Insight> {
    if wallet.expenses_30d <= wallet.income_30d {
        return None;
    }
    Some(insight(
        InsightKind::Warning,
        InsightSource::Wallet,
        PRIORITY_OVERSPEND,
        "Spending Exceeds Income",
        format!(
            "Expenses of {} exceeded income of {} over the last 30 days",
            wallet.expenses_30d, wallet.income_30d
        ),
        "Review recent expenses and defer non-essential purchases",
        vec![
            InsightMetric::new("30-Day Income", wallet.income_30d.to_string()),
            InsightMetric::new("30-Day Expenses", wallet.expenses_30d.to_string())
                .with_trend(TrendDirection::Up),
        ],
    ))
}

fn income_surplus_rule(wallet: &WalletSnapshot) -> Option<Insight> {
    if wallet.income_30d <= wallet.expenses_30d * Decimal::from(INCOME_SURPLUS_FACTOR) {
        return None;
    }
    Some(insight(
        InsightKind::Success,
        InsightSource::Wallet,
        PRIORITY_INCOME_SURPLUS,
        "Healthy Income Surplus",
        format!(
            "Income of {} is more than double the {} spent in the last 30 days",
            wallet.income_30d, wallet.expenses_30d
        ),
        "A good moment to invest in equipment or restock supplies",
        vec![
            InsightMetric::new("30-Day Income", wallet.income_30d.to_string())
                .with_trend(TrendDirection::Up),
            InsightMetric::new("30-Day Expenses", wallet.expenses_30d.to_string()),
        ],
    ))
}

fn expense_concentration_rule(wallet: &WalletSnapshot) -> Option<Insight> {
    if wallet.expenses_30d <= Decimal::ZERO {
        return None;
    }
    let (name, amount) = wallet
        .expense_categories
        .iter()
        .max_by_key(|(_, amount)| **amount)?;
    let share = (*amount / wallet.expenses_30d * Decimal::from(100))
        .to_f64()
        .unwrap_or(0.0);
    if share <= EXPENSE_CONCENTRATION_PERCENT {
        return None;
    }
    Some(insight(
        InsightKind::Info,
        InsightSource::Wallet,
        PRIORITY_EXPENSE_CONCENTRATION,
        "One Expense Category Dominates",
        format!("{} accounts for {:.1}% of expenses this month", name, share),
        "Check whether this spending category can be negotiated or reduced",
        vec![
            InsightMetric::new("Top Expense", name.as_str()),
            InsightMetric::new("Expense Share", (share * 10.0).round() / 10.0)
                .with_unit("%"),
        ],
    ))
}

// ---------------------------------------------------------------------------
// Weather rules
// ---------------------------------------------------------------------------

fn horizon(weather: &WeatherSnapshot) -> &[shared::ForecastDay] {
    let days = weather.forecast_days.len().min(FORECAST_HORIZON_DAYS);
    &weather.forecast_days[..days]
}

fn rain_rule(weather: &WeatherSnapshot) -> Option<Insight> {
    let max_rain = horizon(weather)
        .iter()
        .map(|d| d.day.daily_chance_of_rain)
        .max()?;
    if max_rain <= RAIN_CHANCE_HIGH {
        return None;
    }
    Some(insight(
        InsightKind::Info,
        InsightSource::Weather,
        PRIORITY_RAIN,
        "Rain Expected",
        format!(
            "Up to {}% chance of rain in the next {} days",
            max_rain, FORECAST_HORIZON_DAYS
        ),
        "Plan indoor tasks and protect stored feed and harvests",
        vec![InsightMetric::new("Max Rain Chance", max_rain).with_unit("%")],
    ))
}

fn heat_rule(weather: &WeatherSnapshot) -> Option<Insight> {
    let max_temp = horizon(weather)
        .iter()
        .map(|d| d.day.maxtemp_c)
        .fold(f64::NEG_INFINITY, f64::max);
    if !max_temp.is_finite() || max_temp <= HEAT_WARNING_C {
        return None;
    }
    Some(insight(
        InsightKind::Warning,
        InsightSource::Weather,
        PRIORITY_HEAT,
        "Heat Stress Risk",
        format!(
            "Temperatures up to {:.0}\u{b0}C expected in the next {} days",
            max_temp, FORECAST_HORIZON_DAYS
        ),
        "Provide extra water and shade for animals, irrigate in the evening",
        vec![InsightMetric::new("Max Temperature", max_temp).with_unit("\u{b0}C")],
    ))
}

fn optimal_days(weather: &WeatherSnapshot) -> u64 {
    horizon(weather)
        .iter()
        .filter(|d| d.day.is_optimal())
        .count() as u64
}

fn optimal_weather_rule(weather: &WeatherSnapshot) -> Option<Insight> {
    let days = optimal_days(weather);
    if days == 0 {
        return None;
    }
    Some(insight(
        InsightKind::Success,
        InsightSource::Weather,
        PRIORITY_OPTIMAL_WEATHER,
        "Favorable Weather Window",
        format!(
            "{} of the next {} days have mild temperatures and little rain",
            days, FORECAST_HORIZON_DAYS
        ),
        "Schedule planting, spraying, or field maintenance for these days",
        vec![InsightMetric::new("Optimal Days", days)],
    ))
}

// ---------------------------------------------------------------------------
// Education rules
// ---------------------------------------------------------------------------

fn engagement_rule(education: &EducationSnapshot) -> Option<Insight> {
    if education.total_users == 0 {
        return None;
    }
    let ratio = education.engagement_ratio();
    let percent = (ratio * 1000.0).round() / 10.0;
    if ratio < ENGAGEMENT_LOW {
        return Some(insight(
            InsightKind::Warning,
            InsightSource::Education,
            PRIORITY_LOW_ENGAGEMENT,
            "Low Learning Engagement",
            format!(
                "Only {:.1}% of users are active in the learning modules",
                percent
            ),
            "Promote courses in-app or refresh the lesson catalog",
            vec![InsightMetric::new("Engagement", percent).with_unit("%")],
        ));
    }
    if ratio > ENGAGEMENT_HIGH {
        return Some(insight(
            InsightKind::Success,
            InsightSource::Education,
            PRIORITY_HIGH_ENGAGEMENT,
            "Strong Learning Engagement",
            format!(
                "{:.1}% of users are active in the learning modules",
                percent
            ),
            "Keep publishing new lessons to sustain the momentum",
            vec![InsightMetric::new("Engagement", percent)
                .with_unit("%")
                .with_trend(TrendDirection::Up)],
        ));
    }
    None
}

fn lesson_balance_rule(education: &EducationSnapshot) -> Option<Insight> {
    let total = education.animal_lessons + education.crop_lessons;
    if total == 0 {
        return None;
    }
    let animal_share = education.animal_lessons as f64 * 100.0 / total as f64;
    let crop_share = education.crop_lessons as f64 * 100.0 / total as f64;
    if (animal_share - crop_share).abs() <= LESSON_IMBALANCE_PERCENT {
        return None;
    }
    Some(insight(
        InsightKind::Info,
        InsightSource::Education,
        PRIORITY_LESSON_IMBALANCE,
        "Lesson Topics Imbalanced",
        format!(
            "{:.0}% of lessons cover animals versus {:.0}% covering crops",
            animal_share, crop_share
        ),
        "Commission content for the under-represented topic",
        vec![
            InsightMetric::new("Animal Lessons", education.animal_lessons),
            InsightMetric::new("Crop Lessons", education.crop_lessons),
        ],
    ))
}

// ---------------------------------------------------------------------------
// Blog rule
// ---------------------------------------------------------------------------

fn blog_stale_rule(blog: &BlogSnapshot, now: DateTime<Utc>) -> Option<Insight> {
    let last = blog.last_published?;
    let days = (now - last).num_days();
    if days <= BLOG_STALE_DAYS {
        return None;
    }
    Some(insight(
        InsightKind::Info,
        InsightSource::Blog,
        PRIORITY_BLOG_STALE,
        "Blog Has Gone Quiet",
        format!("No new post in {} days", days),
        "Publish an update to keep readers coming back",
        vec![InsightMetric::new("Days Since Last Post", days)],
    ))
}

// ---------------------------------------------------------------------------
// Cross-domain composite and baseline
// ---------------------------------------------------------------------------

fn restock_opportunity_rule(
    totals: &StockTotals,
    wallet: Option<&WalletSnapshot>,
    weather: Option<&WeatherSnapshot>,
) -> Option<Insight> {
    let wallet = wallet?;
    let weather = weather?;
    let optimal = optimal_days(weather);
    if totals.low_stock == 0
        || optimal == 0
        || wallet.total_balance <= Decimal::from(COMPOSITE_MIN_BALANCE)
    {
        return None;
    }
    let mut result = insight(
        InsightKind::Success,
        InsightSource::CrossDomain,
        PRIORITY_RESTOCK_OPPORTUNITY,
        "Good Conditions to Restock",
        format!(
            "{} items need restocking, the weather is favorable, and the wallet balance covers it",
            totals.low_stock
        ),
        "Combine the supply run with outdoor work on an upcoming clear day",
        vec![
            InsightMetric::new("Low Stock Items", totals.low_stock),
            InsightMetric::new("Optimal Days", optimal),
            InsightMetric::new("Wallet Balance", wallet.total_balance.to_string()),
        ],
    );
    result.related_insights = vec![
        "Multiple Items Low in Stock".to_string(),
        "Favorable Weather Window".to_string(),
    ];
    Some(result)
}

/// Always-present overview insight, independent of data availability
fn baseline_rule(data: &StockData) -> Insight {
    let efficiency = stock_efficiency(data);
    let health = health_label(efficiency);
    insight(
        InsightKind::Info,
        InsightSource::System,
        PRIORITY_BASELINE,
        "System Health Overview",
        format!(
            "Tracking {} items across {} categories, overall stock health is {}",
            data.total_count(),
            Category::ALL.len(),
            health
        ),
        "Open the inventory dashboard for the per-category breakdown",
        vec![
            InsightMetric::new("Total Items", data.total_count()),
            InsightMetric::new("Total Value", data.total_value().to_string()),
            InsightMetric::new("Stock Efficiency", (efficiency * 10.0).round() / 10.0)
                .with_unit("%"),
        ],
    )
}
