use analysis_core::TrendDirection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One company's standing on one metric against its industry peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub metric: String,
    pub company_value: f64,
    /// Share of peers at or below the company's value, 0-100.
    pub percentile: f64,
    pub industry_average: f64,
    pub best_in_class: f64,
    /// best_in_class - company_value
    pub gap: f64,
    pub peer_count: usize,
    pub trend: TrendDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkingResult {
    pub company_id: String,
    pub company_name: String,
    pub industry: String,
    /// Keyed by metric label. Metrics without a peer value are omitted.
    pub metrics: BTreeMap<String, MetricComparison>,
    /// 1-based position across the whole portfolio.
    pub overall_rank: usize,
    pub overall_score: f64,
    pub strength_areas: Vec<String>,
    pub improvement_areas: Vec<String>,
}
