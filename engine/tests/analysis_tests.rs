//! Orchestrator tests: one full analysis pass from raw payloads to report

use chrono::{Duration, Utc};
use serde_json::json;

use farm_insight_engine::{run_analysis_at, AnalysisInput};
use shared::{AlertKind, Category, HealthLevel};

fn input_with(raw: Vec<(&str, Vec<serde_json::Value>)>) -> AnalysisInput {
    let mut input = AnalysisInput::default();
    for (tag, items) in raw {
        input.raw_categories.insert(tag.to_string(), items);
    }
    input
}

#[test]
fn test_report_always_covers_all_categories() {
    let report = run_analysis_at(&AnalysisInput::default(), Utc::now());
    assert_eq!(report.data.categories.len(), 8);
    assert_eq!(report.stock_efficiency, 100.0);
    assert_eq!(report.health, HealthLevel::Good);
    assert!(report.alerts.is_empty());
    assert_eq!(report.insights.len(), 1);
}

#[test]
fn test_unrecognized_category_degrades_to_empty() {
    let input = input_with(vec![
        ("vehicles", vec![json!({"id": "v", "name": "Tractor"})]),
        ("seeds", vec![json!({"id": "s", "name": "Maize", "quantity": 50})]),
    ]);
    let report = run_analysis_at(&input, Utc::now());
    // The bad payload is dropped; the good one still lands
    assert_eq!(report.data.categories.len(), 8);
    assert_eq!(report.data.get(Category::Seeds).summary.count, 1);
    assert_eq!(report.data.total_count(), 1);
}

#[test]
fn test_end_to_end_alerts_and_insights() {
    let now = Utc::now();
    let soon = (now + Duration::days(3)).to_rfc3339();
    let input = input_with(vec![
        (
            "pesticides",
            vec![json!({
                "id": "p1",
                "name": "Herbicide",
                "quantity": 1,
                "price": 40,
                "expiryDate": soon,
            })],
        ),
        (
            "equipment",
            vec![json!({
                "id": "e1",
                "name": "Water pump",
                "price": 300,
                "nextMaintenanceDate": (now + Duration::days(2)).to_rfc3339(),
            })],
        ),
    ]);
    let report = run_analysis_at(&input, now);

    let kinds: Vec<AlertKind> = report.alerts.iter().map(|a| a.kind).collect();
    assert!(kinds.contains(&AlertKind::LowStock)); // 1 <= default 5
    assert!(kinds.contains(&AlertKind::ExpiringSoon));
    assert!(kinds.contains(&AlertKind::MaintenanceDue));

    assert_eq!(report.insights[0].title, "Items Expiring Soon");
    for pair in report.insights.windows(2) {
        assert!(pair[0].priority >= pair[1].priority);
    }
}

#[test]
fn test_history_reaches_the_summary() {
    let mut input = input_with(vec![(
        "feed",
        vec![json!({"id": "f", "name": "Hay", "quantity": 20, "price": 2})],
    )]);
    input
        .history
        .insert("feed".to_string(), vec![10, 12, 14, 16, 18, 20]);
    let report = run_analysis_at(&input, Utc::now());
    let trend = &report.data.get(Category::Feed).summary.trend;
    assert!(!trend.synthesized);
    assert_eq!(trend.values, vec![10, 12, 14, 16, 18, 20]);
}

#[test]
fn test_report_round_trips_through_json() {
    let input = input_with(vec![(
        "animals",
        vec![json!({"id": "a", "name": "Bessie", "type": "cow", "price": 800, "status": "healthy"})],
    )]);
    let report = run_analysis_at(&input, Utc::now());
    let encoded = serde_json::to_string(&report).unwrap();
    let decoded: farm_insight_engine::AnalysisReport =
        serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.data.total_count(), 1);
    assert_eq!(decoded.insights.len(), report.insights.len());
}

#[test]
fn test_input_accepts_dashboard_payload_shape() {
    let payload = json!({
        "rawCategories": {
            "seeds": [{"id": "s", "name": "Maize", "quantity": 2}]
        },
        "snapshots": {
            "wallet": {
                "totalBalance": "1500",
                "income30d": "100",
                "expenses30d": "50"
            }
        }
    });
    let input: AnalysisInput = serde_json::from_value(payload).unwrap();
    let report = run_analysis_at(&input, Utc::now());
    assert_eq!(report.data.get(Category::Seeds).summary.count, 1);
}
