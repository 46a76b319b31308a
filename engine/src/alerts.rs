//! Alert detector: per-item threshold violations
//!
//! Alerts are derived on every analysis pass and never persisted or
//! deduplicated across runs; that is the notification layer's concern.

use chrono::{DateTime, Utc};

use shared::{Alert, AlertKind, Category, StockData, StockItem};

use crate::thresholds::{EXPIRY_WINDOW_DAYS, MAINTENANCE_WINDOW_DAYS};

/// Whole days from `now` to `date`, by calendar date
fn days_until(date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (date.date_naive() - now.date_naive()).num_days()
}

/// Scan every normalized item for threshold violations.
///
/// Rules are evaluated in fixed precedence per item (an item may produce
/// more than one alert): low stock, expiring soon, expired, maintenance
/// due. Animals never produce low-stock alerts; each animal is a discrete
/// unit without a meaningful reorder threshold.
pub fn detect_alerts(data: &StockData, now: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts = Vec::new();
    for (category, stock) in &data.categories {
        for item in &stock.items {
            detect_item_alerts(*category, item, now, &mut alerts);
        }
    }
    alerts
}

fn detect_item_alerts(
    category: Category,
    item: &StockItem,
    now: DateTime<Utc>,
    alerts: &mut Vec<Alert>,
) {
    if category != Category::Animals && item.quantity <= item.min_quantity_alert {
        let unit = item.unit.as_deref().unwrap_or("units");
        alerts.push(alert(
            category,
            item,
            AlertKind::LowStock,
            format!(
                "{} is low in stock ({} {} left)",
                item.name, item.quantity, unit
            ),
        ));
    }

    if let Some(expiry) = item.expiry_date {
        if expiry >= now && (0..=EXPIRY_WINDOW_DAYS).contains(&days_until(expiry, now)) {
            alerts.push(alert(
                category,
                item,
                AlertKind::ExpiringSoon,
                format!(
                    "{} expires in {} days",
                    item.name,
                    days_until(expiry, now)
                ),
            ));
        }
        if expiry < now {
            alerts.push(alert(
                category,
                item,
                AlertKind::Expired,
                format!("{} has expired", item.name),
            ));
        }
    }

    if let Some(due) = item.next_maintenance_date {
        if (0..=MAINTENANCE_WINDOW_DAYS).contains(&days_until(due, now)) {
            alerts.push(alert(
                category,
                item,
                AlertKind::MaintenanceDue,
                format!(
                    "{} is due for maintenance in {} days",
                    item.name,
                    days_until(due, now)
                ),
            ));
        }
    }
}

fn alert(category: Category, item: &StockItem, kind: AlertKind, message: String) -> Alert {
    Alert {
        category,
        item_id: item.id.clone(),
        item_name: item.name.clone(),
        kind,
        message,
    }
}
