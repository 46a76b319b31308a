//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Overall stock health band derived from the efficiency score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    /// Efficiency >= 80%
    Good,
    /// 60% <= efficiency < 80%
    Warning,
    /// Efficiency < 60%
    Critical,
}

impl HealthLevel {
    /// Color tag used by chart and badge widgets
    pub fn color_tag(&self) -> &'static str {
        match self {
            HealthLevel::Good => "green",
            HealthLevel::Warning => "amber",
            HealthLevel::Critical => "red",
        }
    }
}

impl std::fmt::Display for HealthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthLevel::Good => write!(f, "good"),
            HealthLevel::Warning => write!(f, "warning"),
            HealthLevel::Critical => write!(f, "critical"),
        }
    }
}

/// Direction tag attached to insight metrics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}
