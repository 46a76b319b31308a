//! Named rule constants for the analytics engine
//!
//! Every threshold the alert detector and insight generator apply lives
//! here so the rule table stays auditable and testable in isolation.

/// Days ahead within which an expiry date counts as "expiring soon"
pub const EXPIRY_WINDOW_DAYS: i64 = 30;

/// Days ahead within which a maintenance date counts as "due"
pub const MAINTENANCE_WINDOW_DAYS: i64 = 7;

/// Stock efficiency at or above this is "good"
pub const EFFICIENCY_GOOD: f64 = 80.0;

/// Stock efficiency at or above this (but below good) is "warning"
pub const EFFICIENCY_WARNING: f64 = 60.0;

/// More than this many low-stock items triggers the restock warning
pub const LOW_STOCK_INSIGHT_MIN: u64 = 5;

/// A single category holding more than this share of total inventory
/// value is flagged as concentrated
pub const VALUE_CONCENTRATION_PERCENT: f64 = 40.0;

/// Income more than this multiple of expenses counts as a healthy surplus
pub const INCOME_SURPLUS_FACTOR: u32 = 2;

/// One expense category above this share of total expenses is flagged
pub const EXPENSE_CONCENTRATION_PERCENT: f64 = 40.0;

/// Forecast days considered by the weather rules
pub const FORECAST_HORIZON_DAYS: usize = 3;

/// Rain chance (percent) above which rain is called out
pub const RAIN_CHANCE_HIGH: u8 = 70;

/// Max temperature (Celsius) above which heat stress is flagged
pub const HEAT_WARNING_C: f64 = 32.0;

/// Engagement ratio below this is flagged as low
pub const ENGAGEMENT_LOW: f64 = 0.30;

/// Engagement ratio above this is celebrated
pub const ENGAGEMENT_HIGH: f64 = 0.70;

/// Lesson-topic share gap (percentage points) above which the education
/// content is considered imbalanced
pub const LESSON_IMBALANCE_PERCENT: f64 = 30.0;

/// Days without a blog post before the content feed is called stale
pub const BLOG_STALE_DAYS: i64 = 14;

/// Minimum wallet balance for the restock-opportunity composite rule
pub const COMPOSITE_MIN_BALANCE: i64 = 1000;

// Insight priorities (0-100, higher surfaces first)
pub const PRIORITY_EXPIRING: u8 = 90;
pub const PRIORITY_LOW_STOCK: u8 = 85;
pub const PRIORITY_OVERSPEND: u8 = 80;
pub const PRIORITY_RESTOCK_OPPORTUNITY: u8 = 75;
pub const PRIORITY_HEAT: u8 = 70;
pub const PRIORITY_OPTIMAL_WEATHER: u8 = 70;
pub const PRIORITY_LOW_ENGAGEMENT: u8 = 70;
pub const PRIORITY_VALUE_CONCENTRATION: u8 = 65;
pub const PRIORITY_INCOME_SURPLUS: u8 = 65;
pub const PRIORITY_EXPENSE_CONCENTRATION: u8 = 60;
pub const PRIORITY_RAIN: u8 = 60;
pub const PRIORITY_HIGH_ENGAGEMENT: u8 = 60;
pub const PRIORITY_LESSON_IMBALANCE: u8 = 55;
pub const PRIORITY_BLOG_STALE: u8 = 55;
pub const PRIORITY_BASELINE: u8 = 50;
