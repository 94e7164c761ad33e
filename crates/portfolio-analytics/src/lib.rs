pub mod industry;
pub mod models;
pub mod performance;
pub mod portfolio;
pub mod risk_metrics;
pub mod shared_math;
pub mod weights;

pub use models::*;
pub use performance::{metric_history, PerformanceCalculator, RatioMetric};
pub use portfolio::PortfolioAnalyzer;
pub use risk_metrics::RiskCalculator;
pub use weights::{EqualWeight, Weighting};
