//! Inventory stock models

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CategorySummary;

/// The fixed set of inventory categories tracked by the platform
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Animals,
    Pesticides,
    Seeds,
    Fertilizer,
    Equipment,
    Feed,
    Tools,
    Harvest,
}

/// Error for an unrecognized category tag coming from the API layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized inventory category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories in their fixed display order
    pub const ALL: [Category; 8] = [
        Category::Animals,
        Category::Pesticides,
        Category::Seeds,
        Category::Fertilizer,
        Category::Equipment,
        Category::Feed,
        Category::Tools,
        Category::Harvest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Animals => "animals",
            Category::Pesticides => "pesticides",
            Category::Seeds => "seeds",
            Category::Fertilizer => "fertilizer",
            Category::Equipment => "equipment",
            Category::Feed => "feed",
            Category::Tools => "tools",
            Category::Harvest => "harvest",
        }
    }

    /// Whether each record represents one discrete non-fungible unit.
    /// For these categories `value` is the unit price, independent of quantity.
    pub fn is_discrete_unit(&self) -> bool {
        matches!(
            self,
            Category::Animals | Category::Equipment | Category::Tools
        )
    }

    /// Whether items in this category can carry an expiry date
    pub fn is_perishable(&self) -> bool {
        matches!(
            self,
            Category::Pesticides
                | Category::Seeds
                | Category::Fertilizer
                | Category::Feed
                | Category::Harvest
        )
    }

    /// Default low-stock threshold when the record does not carry one
    pub fn default_min_alert(&self) -> Decimal {
        match self {
            Category::Animals => Decimal::ZERO,
            Category::Equipment | Category::Tools => Decimal::ONE,
            _ => Decimal::from(5),
        }
    }

    /// Recognized status vocabulary, first entry being the default bucket.
    /// `None` for categories without a health breakdown.
    pub fn status_vocabulary(&self) -> Option<&'static [&'static str]> {
        match self {
            Category::Animals => Some(&["healthy", "sick", "quarantine"]),
            Category::Equipment | Category::Tools => {
                Some(&["working", "maintenance", "broken"])
            }
            _ => None,
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "animals" => Ok(Category::Animals),
            "pesticides" => Ok(Category::Pesticides),
            "seeds" => Ok(Category::Seeds),
            "fertilizer" => Ok(Category::Fertilizer),
            "equipment" => Ok(Category::Equipment),
            "feed" => Ok(Category::Feed),
            "tools" => Ok(Category::Tools),
            "harvest" => Ok(Category::Harvest),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One inventory unit after normalization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub quantity: Decimal,
    pub unit: Option<String>,
    pub unit_price: Decimal,
    /// Always recomputable from `quantity` and `unit_price`, never mutated
    /// independently
    pub value: Decimal,
    pub min_quantity_alert: Decimal,
    pub expiry_date: Option<DateTime<Utc>>,
    pub next_maintenance_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// Compute an item's monetary value under the category's pricing rule
pub fn item_value(category: Category, quantity: Decimal, unit_price: Decimal) -> Decimal {
    if category.is_discrete_unit() {
        unit_price
    } else {
        quantity * unit_price
    }
}

/// Normalized items plus their aggregate summary for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStock {
    pub items: Vec<StockItem>,
    pub summary: CategorySummary,
}

impl CategoryStock {
    /// Slot used when a category's payload is missing or malformed
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            summary: CategorySummary::empty(),
        }
    }
}

/// Full multi-category stock snapshot: the immutable input to evaluation.
/// Always covers exactly the 8 fixed categories, never partial keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockData {
    pub categories: BTreeMap<Category, CategoryStock>,
}

impl StockData {
    /// Build a snapshot with an empty slot for every category
    pub fn new_empty() -> Self {
        let categories = Category::ALL
            .iter()
            .map(|c| (*c, CategoryStock::empty()))
            .collect();
        Self { categories }
    }

    pub fn get(&self, category: Category) -> &CategoryStock {
        // new_empty guarantees all 8 keys are present
        &self.categories[&category]
    }

    /// All normalized items across every category, in category order
    pub fn all_items(&self) -> impl Iterator<Item = &StockItem> {
        self.categories.values().flat_map(|c| c.items.iter())
    }

    pub fn total_count(&self) -> u64 {
        self.categories.values().map(|c| c.summary.count).sum()
    }

    pub fn total_value(&self) -> Decimal {
        self.categories.values().map(|c| c.summary.value).sum()
    }
}

impl Default for StockData {
    fn default() -> Self {
        Self::new_empty()
    }
}
