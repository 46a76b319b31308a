//! Cross-domain inventory analytics and insight engine
//!
//! Ingests raw per-category stock payloads, normalizes them into a uniform
//! shape, derives aggregate metrics and health scores, detects threshold
//! alerts, and synthesizes a prioritized list of human-readable insights
//! from the stock data plus optional sibling-domain snapshots (wallet,
//! weather, education, blog).
//!
//! The engine is a pure function of its inputs: it performs no I/O, holds
//! no state between runs, and may be invoked concurrently on independent
//! snapshots. All data fetching is the caller's responsibility.

pub mod aggregate;
pub mod alerts;
pub mod analysis;
pub mod error;
pub mod evaluate;
pub mod insights;
pub mod normalize;
pub mod thresholds;

pub use aggregate::aggregate;
pub use alerts::detect_alerts;
pub use analysis::{run_analysis, run_analysis_at, AnalysisInput, AnalysisReport};
pub use error::{AnalysisError, AnalysisResult};
pub use evaluate::{growth_rate, health_label, stock_efficiency, trend_growth, turnover};
pub use insights::generate_insights;
pub use normalize::{normalize, normalize_items};
