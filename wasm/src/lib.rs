//! WebAssembly module for the Farm Management Platform
//!
//! Provides client-side computation for:
//! - Full analysis passes over cached inventory payloads
//! - Stock efficiency and health classification
//! - Growth rate and item value calculations
//! - Offline data validation

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use farm_insight_engine::{
    growth_rate, health_label, run_analysis_at, stock_efficiency, AnalysisInput,
};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Run one full analysis pass over cached payloads.
///
/// `input_json` carries the camelCase analysis input; `now_rfc3339` pins
/// the pass to the caller's clock (no system clock on wasm32). Returns
/// the complete report as JSON.
#[wasm_bindgen]
pub fn run_analysis_json(input_json: &str, now_rfc3339: &str) -> Result<String, JsValue> {
    let input: AnalysisInput = serde_json::from_str(input_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid analysis input: {}", e)))?;
    let now: DateTime<Utc> = now_rfc3339
        .parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid timestamp: {}", e)))?;

    let report = run_analysis_at(&input, now);
    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Failed to encode report: {}", e)))
}

/// Compute the stock efficiency percentage from a stock data snapshot
#[wasm_bindgen]
pub fn stock_efficiency_json(stock_data_json: &str) -> Result<f64, JsValue> {
    let data: StockData = serde_json::from_str(stock_data_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid stock data: {}", e)))?;
    Ok(stock_efficiency(&data))
}

/// Classify an efficiency score into its health band
#[wasm_bindgen]
pub fn classify_stock_health(efficiency: f64) -> String {
    format!("{}", health_label(efficiency))
}

/// Signed month-over-month growth percentage
#[wasm_bindgen]
pub fn calculate_growth_rate(current: f64, previous: f64) -> f64 {
    growth_rate(current, previous)
}

/// Monetary value of one item under its category's pricing rule
#[wasm_bindgen]
pub fn calculate_item_value(
    category: &str,
    quantity: f64,
    unit_price: f64,
) -> Result<f64, JsValue> {
    let category: Category = category
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    let quantity = Decimal::from_f64_retain(quantity).unwrap_or(Decimal::ZERO);
    let unit_price = Decimal::from_f64_retain(unit_price).unwrap_or(Decimal::ZERO);
    Ok(item_value(category, quantity, unit_price)
        .to_f64()
        .unwrap_or(0.0))
}

/// Validate a stock item edited offline (amounts and value consistency)
#[wasm_bindgen]
pub fn validate_stock_item_json(item_json: &str) -> Result<(), JsValue> {
    let item: StockItem = serde_json::from_str(item_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid stock item: {}", e)))?;
    validate_item_amounts(&item).map_err(JsValue::from_str)?;
    validate_item_value(&item).map_err(JsValue::from_str)?;
    Ok(())
}
