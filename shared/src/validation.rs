//! Validation utilities for the Farm Management Platform
//!
//! Plain checks shared by the analytics engine and the offline (WASM)
//! form validation on the mobile app.

use rust_decimal::Decimal;

use crate::models::{item_value, CategorySummary, StockItem, TrendSeries};

/// Validate that an item's value matches its category pricing rule
pub fn validate_item_value(item: &StockItem) -> Result<(), &'static str> {
    if item.value != item_value(item.category, item.quantity, item.unit_price) {
        return Err("Item value is inconsistent with quantity and unit price");
    }
    Ok(())
}

/// Validate that quantity and unit price are non-negative
pub fn validate_item_amounts(item: &StockItem) -> Result<(), &'static str> {
    if item.quantity < Decimal::ZERO {
        return Err("Quantity cannot be negative");
    }
    if item.unit_price < Decimal::ZERO {
        return Err("Unit price cannot be negative");
    }
    Ok(())
}

/// Validate a trend series covers exactly the trailing months
pub fn validate_trend_series(trend: &TrendSeries) -> Result<(), &'static str> {
    if trend.values.len() != TrendSeries::MONTHS {
        return Err("Trend series must cover exactly 6 trailing months");
    }
    Ok(())
}

/// Validate the expiry breakdown partitions the item count
pub fn validate_expiry_partition(summary: &CategorySummary) -> Result<(), &'static str> {
    if let Some(expiry) = &summary.expiry_status {
        if expiry.total() != summary.count {
            return Err("Expiry breakdown does not sum to item count");
        }
    }
    Ok(())
}

/// Validate the per-type tally partitions the item count
pub fn validate_type_partition(summary: &CategorySummary) -> Result<(), &'static str> {
    let total: u64 = summary.types.values().sum();
    if !summary.types.is_empty() && total != summary.count {
        return Err("Type breakdown does not sum to item count");
    }
    Ok(())
}

/// Validate a percentage is in the 0-100 range
pub fn validate_percent(value: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&value) || value.is_nan() {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}
