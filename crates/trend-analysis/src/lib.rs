//! Trend Analysis Module
//!
//! Per-company trend direction, linear forecast and confidence for a single
//! metric, plus period-aligned aggregate series across the portfolio.

pub mod aggregates;
pub mod analyzer;
pub mod forecast;
pub mod models;

pub use aggregates::{period_aggregates, rank_percentile};
pub use analyzer::TrendAnalyzer;
pub use forecast::{forecast_confidence, linear_forecast};
pub use models::{CompanyTrend, PeriodAggregate, TrendAnalysis};
