use analysis_core::TrendDirection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Trend record for one company on one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyTrend {
    pub company_name: String,
    pub industry: String,
    /// Historical values, earliest first
    pub values: Vec<f64>,
    pub trend: TrendDirection,
    /// Population standard deviation of the raw values
    pub volatility: f64,
    /// Linear forecast for the periods following the series
    pub forecast: Vec<f64>,
    /// Forecast confidence in [0, 1]
    pub confidence: f64,
}

/// Cross-company statistics at one period index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAggregate {
    pub period: usize,
    pub average: f64,
    pub median: f64,
    pub q25: f64,
    pub q75: f64,
    /// Companies with a value at this index
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub metric: String,
    /// Keyed by company id; only companies with two or more points.
    pub companies: BTreeMap<String, CompanyTrend>,
    /// Portfolio-wide aggregates, one per period index.
    pub industry_benchmarks: Vec<PeriodAggregate>,
    /// The same aggregates restricted to each industry label.
    pub by_industry: BTreeMap<String, Vec<PeriodAggregate>>,
}

impl TrendAnalysis {
    pub fn company(&self, company_id: &str) -> Option<&CompanyTrend> {
        self.companies.get(company_id)
    }
}
