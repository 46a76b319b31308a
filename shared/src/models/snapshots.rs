//! Read-only sibling-domain snapshots consumed by the insight generator
//!
//! These are summaries the data-fetching layer already holds for other
//! dashboard panels (wallet, weather, education, blog). Each one is
//! optional; rules over a missing snapshot are skipped, never an error.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trailing-30-day wallet totals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    pub total_balance: Decimal,
    pub income_30d: Decimal,
    pub expenses_30d: Decimal,
    /// Expense totals grouped by spending category
    #[serde(default)]
    pub expense_categories: BTreeMap<String, Decimal>,
}

/// One forecast day as delivered by the weather provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: String,
    pub day: DayForecast,
}

/// Daily forecast figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayForecast {
    pub maxtemp_c: f64,
    pub avgtemp_c: f64,
    /// Percent, 0-100
    pub daily_chance_of_rain: u8,
}

/// Upcoming weather forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    #[serde(rename = "forecastday")]
    pub forecast_days: Vec<ForecastDay>,
}

impl DayForecast {
    /// Mild temperature and low rain chance: good for field work
    pub fn is_optimal(&self) -> bool {
        (18.0..=30.0).contains(&self.maxtemp_c) && self.daily_chance_of_rain < 40
    }
}

/// Learning-module usage totals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationSnapshot {
    pub total_users: u64,
    pub active_users: u64,
    pub animal_lessons: u64,
    pub crop_lessons: u64,
}

impl EducationSnapshot {
    /// Active users as a fraction of total, 0 when there are no users
    pub fn engagement_ratio(&self) -> f64 {
        if self.total_users == 0 {
            return 0.0;
        }
        self.active_users as f64 / self.total_users as f64
    }
}

/// Blog publishing activity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSnapshot {
    pub post_count: u64,
    pub last_published: Option<DateTime<Utc>>,
}

/// Bundle of all optional sibling snapshots for one analysis pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiblingSnapshots {
    pub wallet: Option<WalletSnapshot>,
    pub weather: Option<WeatherSnapshot>,
    pub education: Option<EducationSnapshot>,
    pub blog: Option<BlogSnapshot>,
}
