//! Category normalizer: raw API payloads to uniform stock items
//!
//! Field names vary per category in the upstream API (`quantity` vs
//! `count`, `name` vs `type` vs `cropName`, `price` sometimes absent).
//! Resolution happens once here, through an explicit per-category field
//! map, so downstream layers only ever see `StockItem`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use shared::{item_value, Category, StockItem};

use crate::error::AnalysisResult;

/// Field resolution rules for one category
struct FieldMap {
    quantity_keys: &'static [&'static str],
    price_keys: &'static [&'static str],
    name_keys: &'static [&'static str],
}

fn field_map(category: Category) -> FieldMap {
    match category {
        Category::Harvest => FieldMap {
            quantity_keys: &["quantity", "count"],
            price_keys: &["price"],
            name_keys: &["name", "cropName", "type"],
        },
        _ => FieldMap {
            quantity_keys: &["quantity", "count"],
            price_keys: &["price"],
            name_keys: &["name", "type"],
        },
    }
}

/// Normalize a raw per-category payload into uniform stock items.
///
/// Pure function. Fails only when `category` is not one of the 8
/// recognized tags; missing or malformed optional fields are defaulted,
/// never rejected.
pub fn normalize(raw_items: &[Value], category: &str) -> AnalysisResult<Vec<StockItem>> {
    let category: Category = category.parse()?;
    Ok(normalize_items(raw_items, category))
}

/// Normalize a payload whose category is already resolved
pub fn normalize_items(raw_items: &[Value], category: Category) -> Vec<StockItem> {
    raw_items
        .iter()
        .map(|raw| normalize_item(raw, category))
        .collect()
}

fn normalize_item(raw: &Value, category: Category) -> StockItem {
    let fields = field_map(category);

    let quantity = first_decimal(raw, fields.quantity_keys)
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO);
    let unit_price = first_decimal(raw, fields.price_keys)
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO);
    let min_quantity_alert = first_decimal(raw, &["minQuantityAlert"])
        .unwrap_or_else(|| category.default_min_alert())
        .max(Decimal::ZERO);

    StockItem {
        id: string_field(raw, "id").unwrap_or_default(),
        name: first_string(raw, fields.name_keys).unwrap_or_default(),
        category,
        quantity,
        unit: string_field(raw, "unit"),
        unit_price,
        value: item_value(category, quantity, unit_price),
        min_quantity_alert,
        // Expiry only means anything for perishable categories
        expiry_date: if category.is_perishable() {
            date_field(raw, "expiryDate")
        } else {
            None
        },
        next_maintenance_date: date_field(raw, "nextMaintenanceDate"),
        status: string_field(raw, "status"),
        item_type: string_field(raw, "type"),
    }
}

fn string_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn first_string(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| string_field(raw, key))
}

fn decimal_field(raw: &Value, key: &str) -> Option<Decimal> {
    match raw.get(key)? {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(Decimal::from_f64_retain)
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn first_decimal(raw: &Value, keys: &[&str]) -> Option<Decimal> {
    keys.iter().find_map(|key| decimal_field(raw, key))
}

/// Parse a date field as RFC 3339, falling back to a bare `YYYY-MM-DD`
/// (both occur in the upstream payloads)
fn date_field(raw: &Value, key: &str) -> Option<DateTime<Utc>> {
    let text = match raw.get(key) {
        Some(Value::String(s)) => s.trim(),
        _ => return None,
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
