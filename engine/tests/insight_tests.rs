//! Insight generator tests
//!
//! Covers the rule table, priority bands, stable sorting, snapshot
//! skipping, the cross-domain composite, and the always-present baseline.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use farm_insight_engine::{aggregate, generate_insights};
use shared::{
    item_value, BlogSnapshot, Category, CategoryStock, DayForecast, EducationSnapshot,
    ForecastDay, InsightKind, InsightSource, SiblingSnapshots, StockData, StockItem,
    WalletSnapshot, WeatherSnapshot,
};

fn item(category: Category, id: &str, quantity: i64, min_alert: i64, price: i64) -> StockItem {
    let quantity = Decimal::from(quantity);
    let unit_price = Decimal::from(price);
    StockItem {
        id: id.to_string(),
        name: format!("item {}", id),
        category,
        quantity,
        unit: None,
        unit_price,
        value: item_value(category, quantity, unit_price),
        min_quantity_alert: Decimal::from(min_alert),
        expiry_date: None,
        next_maintenance_date: None,
        status: None,
        item_type: None,
    }
}

fn stock_data(groups: Vec<(Category, Vec<StockItem>)>) -> StockData {
    let mut data = StockData::new_empty();
    let now = Utc::now();
    for (category, items) in groups {
        let summary = aggregate(category, &items, None, now);
        data.categories
            .insert(category, CategoryStock { items, summary });
    }
    data
}

fn low_stock_data(count: usize) -> StockData {
    let items = (0..count)
        .map(|i| item(Category::Seeds, &format!("s{}", i), 2, 5, 1))
        .collect();
    stock_data(vec![(Category::Seeds, items)])
}

fn forecast(days: Vec<(f64, u8)>) -> WeatherSnapshot {
    WeatherSnapshot {
        forecast_days: days
            .into_iter()
            .enumerate()
            .map(|(i, (maxtemp_c, rain))| ForecastDay {
                date: format!("2026-09-0{}", i + 1),
                day: DayForecast {
                    maxtemp_c,
                    avgtemp_c: maxtemp_c - 5.0,
                    daily_chance_of_rain: rain,
                },
            })
            .collect(),
    }
}

fn wallet(balance: i64, income: i64, expenses: i64) -> WalletSnapshot {
    WalletSnapshot {
        total_balance: Decimal::from(balance),
        income_30d: Decimal::from(income),
        expenses_30d: Decimal::from(expenses),
        expense_categories: Default::default(),
    }
}

#[test]
fn test_empty_data_yields_only_baseline() {
    let data = StockData::new_empty();
    let insights = generate_insights(&data, &SiblingSnapshots::default(), Utc::now());
    assert_eq!(insights.len(), 1);
    let baseline = &insights[0];
    assert_eq!(baseline.title, "System Health Overview");
    assert_eq!(baseline.priority, 50);
    assert_eq!(baseline.kind, InsightKind::Info);
    assert_eq!(baseline.source, InsightSource::System);
    assert!(!baseline.metrics.is_empty());
}

#[test]
fn test_low_stock_warning_with_metric() {
    let data = low_stock_data(6);
    let insights = generate_insights(&data, &SiblingSnapshots::default(), Utc::now());
    let warning = insights
        .iter()
        .find(|i| i.title == "Multiple Items Low in Stock")
        .expect("low stock insight");
    assert_eq!(warning.priority, 85);
    assert_eq!(warning.kind, InsightKind::Warning);
    let metric = &warning.metrics[0];
    assert_eq!(metric.label, "Low Stock Items");
    assert_eq!(metric.value, serde_json::json!(6));
}

#[test]
fn test_five_low_stock_items_is_not_enough() {
    let data = low_stock_data(5);
    let insights = generate_insights(&data, &SiblingSnapshots::default(), Utc::now());
    assert!(insights
        .iter()
        .all(|i| i.title != "Multiple Items Low in Stock"));
}

#[test]
fn test_expiring_items_outrank_low_stock() {
    let now = Utc::now();
    let mut expiring = item(Category::Feed, "e", 100, 5, 2);
    expiring.expiry_date = Some(now + Duration::days(5));
    let mut data = low_stock_data(6);
    let summary = aggregate(Category::Feed, std::slice::from_ref(&expiring), None, now);
    data.categories.insert(
        Category::Feed,
        CategoryStock {
            items: vec![expiring],
            summary,
        },
    );

    let insights = generate_insights(&data, &SiblingSnapshots::default(), now);
    assert_eq!(insights[0].title, "Items Expiring Soon");
    assert_eq!(insights[0].priority, 90);
    assert_eq!(insights[0].kind, InsightKind::Critical);
    assert_eq!(insights[1].title, "Multiple Items Low in Stock");
}

#[test]
fn test_output_is_sorted_and_stable_within_priority() {
    // Three distinct rules all land at priority 70: heat, optimal
    // weather, low engagement. Stable sort must keep rule order.
    let snapshots = SiblingSnapshots {
        weather: Some(forecast(vec![(35.0, 10), (25.0, 10), (26.0, 20)])),
        education: Some(EducationSnapshot {
            total_users: 100,
            active_users: 10,
            animal_lessons: 5,
            crop_lessons: 5,
        }),
        ..Default::default()
    };
    let insights = generate_insights(&StockData::new_empty(), &snapshots, Utc::now());

    for pair in insights.windows(2) {
        assert!(pair[0].priority >= pair[1].priority);
    }
    let band: Vec<&str> = insights
        .iter()
        .filter(|i| i.priority == 70)
        .map(|i| i.title.as_str())
        .collect();
    assert_eq!(
        band,
        vec![
            "Heat Stress Risk",
            "Favorable Weather Window",
            "Low Learning Engagement"
        ]
    );
}

#[test]
fn test_value_concentration() {
    let data = stock_data(vec![
        (Category::Equipment, vec![item(Category::Equipment, "t", 1, 0, 900)]),
        (Category::Seeds, vec![item(Category::Seeds, "s", 10, 5, 10)]),
    ]);
    let insights = generate_insights(&data, &SiblingSnapshots::default(), Utc::now());
    let concentrated = insights
        .iter()
        .find(|i| i.title == "Inventory Value Concentrated")
        .expect("concentration insight");
    assert_eq!(concentrated.priority, 65);
    assert_eq!(
        concentrated.metrics[0].value,
        serde_json::json!("equipment")
    );
}

#[test]
fn test_wallet_overspend_warning() {
    let snapshots = SiblingSnapshots {
        wallet: Some(wallet(500, 100, 300)),
        ..Default::default()
    };
    let insights = generate_insights(&StockData::new_empty(), &snapshots, Utc::now());
    let overspend = insights
        .iter()
        .find(|i| i.title == "Spending Exceeds Income")
        .expect("overspend insight");
    assert_eq!(overspend.priority, 80);
    assert_eq!(overspend.source, InsightSource::Wallet);
}

#[test]
fn test_wallet_surplus_success() {
    let snapshots = SiblingSnapshots {
        wallet: Some(wallet(5000, 1000, 400)),
        ..Default::default()
    };
    let insights = generate_insights(&StockData::new_empty(), &snapshots, Utc::now());
    let surplus = insights
        .iter()
        .find(|i| i.title == "Healthy Income Surplus")
        .expect("surplus insight");
    assert_eq!(surplus.priority, 65);
    assert_eq!(surplus.kind, InsightKind::Success);
}

#[test]
fn test_expense_concentration() {
    let mut w = wallet(2000, 1000, 1000);
    w.expense_categories.insert("feed".to_string(), Decimal::from(600));
    w.expense_categories.insert("fuel".to_string(), Decimal::from(400));
    let snapshots = SiblingSnapshots {
        wallet: Some(w),
        ..Default::default()
    };
    let insights = generate_insights(&StockData::new_empty(), &snapshots, Utc::now());
    let concentration = insights
        .iter()
        .find(|i| i.title == "One Expense Category Dominates")
        .expect("expense concentration insight");
    assert_eq!(concentration.priority, 60);
    assert_eq!(concentration.metrics[0].value, serde_json::json!("feed"));
}

#[test]
fn test_rain_insight() {
    let snapshots = SiblingSnapshots {
        weather: Some(forecast(vec![(31.0, 90), (28.0, 30), (27.0, 10)])),
        ..Default::default()
    };
    let insights = generate_insights(&StockData::new_empty(), &snapshots, Utc::now());
    let rain = insights
        .iter()
        .find(|i| i.title == "Rain Expected")
        .expect("rain insight");
    assert_eq!(rain.priority, 60);
    assert_eq!(rain.metrics[0].value, serde_json::json!(90));
}

#[test]
fn test_blog_stale_insight() {
    let snapshots = SiblingSnapshots {
        blog: Some(BlogSnapshot {
            post_count: 12,
            last_published: Some(Utc::now() - Duration::days(20)),
        }),
        ..Default::default()
    };
    let insights = generate_insights(&StockData::new_empty(), &snapshots, Utc::now());
    let stale = insights
        .iter()
        .find(|i| i.title == "Blog Has Gone Quiet")
        .expect("blog insight");
    assert_eq!(stale.priority, 55);
    assert_eq!(stale.metrics[0].value, serde_json::json!(20));
}

#[test]
fn test_fresh_blog_is_quiet() {
    let snapshots = SiblingSnapshots {
        blog: Some(BlogSnapshot {
            post_count: 12,
            last_published: Some(Utc::now() - Duration::days(2)),
        }),
        ..Default::default()
    };
    let insights = generate_insights(&StockData::new_empty(), &snapshots, Utc::now());
    assert!(insights.iter().all(|i| i.source != InsightSource::Blog));
}

#[test]
fn test_restock_composite_needs_all_three_domains() {
    let data = low_stock_data(2);
    let full = SiblingSnapshots {
        wallet: Some(wallet(5000, 100, 100)),
        weather: Some(forecast(vec![(25.0, 10), (26.0, 20), (24.0, 30)])),
        ..Default::default()
    };
    let insights = generate_insights(&data, &full, Utc::now());
    let composite = insights
        .iter()
        .find(|i| i.title == "Good Conditions to Restock")
        .expect("composite insight");
    assert_eq!(composite.priority, 75);
    assert_eq!(composite.source, InsightSource::CrossDomain);
    assert!(!composite.related_insights.is_empty());

    // Missing wallet: the composite is silently skipped
    let without_wallet = SiblingSnapshots {
        weather: Some(forecast(vec![(25.0, 10)])),
        ..Default::default()
    };
    let insights = generate_insights(&data, &without_wallet, Utc::now());
    assert!(insights.iter().all(|i| i.title != "Good Conditions to Restock"));
}

#[test]
fn test_restock_composite_needs_balance() {
    let data = low_stock_data(2);
    let broke = SiblingSnapshots {
        wallet: Some(wallet(900, 100, 100)),
        weather: Some(forecast(vec![(25.0, 10)])),
        ..Default::default()
    };
    let insights = generate_insights(&data, &broke, Utc::now());
    assert!(insights.iter().all(|i| i.title != "Good Conditions to Restock"));
}

#[test]
fn test_every_insight_is_self_justifying() {
    let now = Utc::now();
    let snapshots = SiblingSnapshots {
        wallet: Some(wallet(5000, 100, 300)),
        weather: Some(forecast(vec![(35.0, 90), (25.0, 10), (26.0, 20)])),
        education: Some(EducationSnapshot {
            total_users: 100,
            active_users: 90,
            animal_lessons: 9,
            crop_lessons: 1,
        }),
        blog: Some(BlogSnapshot {
            post_count: 3,
            last_published: Some(now - Duration::days(30)),
        }),
    };
    let insights = generate_insights(&low_stock_data(7), &snapshots, now);
    assert!(insights.len() > 5);
    for insight in &insights {
        assert!(!insight.metrics.is_empty(), "{} has no metrics", insight.title);
        assert!(insight.priority <= 100);
        assert!(!insight.recommendation.is_empty());
    }
}
