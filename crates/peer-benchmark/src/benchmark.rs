use crate::models::{BenchmarkingResult, MetricComparison};
use crate::ranker::OverallRanker;
use analysis_core::{AnalyticsConfig, Company, TrendDirection};
use portfolio_analytics::shared_math::{finite_or_zero, mean, percent_change};
use portfolio_analytics::{metric_history, RatioMetric};
use std::collections::BTreeMap;

/// Rank position from the top of the peer set, as a percentile.
///
/// Peers are sorted descending and the first position holding a value at or
/// below `value` is taken, so ties resolve to the best-ranked slot. A value
/// below every peer scores 0. An empty peer set scores 0.
pub fn descending_rank_percentile(value: f64, peers: &[f64]) -> f64 {
    if peers.is_empty() {
        return 0.0;
    }
    let mut sorted = peers.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let len = sorted.len();
    let index = sorted.iter().position(|&p| p <= value).unwrap_or(len);
    (len - index) as f64 / len as f64 * 100.0
}

/// Benchmarks every company against the others in its industry.
pub struct PeerBenchmarker<'a> {
    config: &'a AnalyticsConfig,
}

impl<'a> PeerBenchmarker<'a> {
    pub fn new(config: &'a AnalyticsConfig) -> Self {
        Self { config }
    }

    /// One result per company, in input order.
    pub fn benchmark(&self, companies: &[Company]) -> Vec<BenchmarkingResult> {
        let ranker = OverallRanker::new(companies);
        (0..companies.len())
            .map(|i| self.benchmark_company(i, companies, &ranker))
            .collect()
    }

    fn benchmark_company(
        &self,
        index: usize,
        companies: &[Company],
        ranker: &OverallRanker,
    ) -> BenchmarkingResult {
        let company = &companies[index];
        let peers: Vec<&Company> = companies
            .iter()
            .enumerate()
            .filter(|(j, c)| *j != index && c.industry == company.industry)
            .map(|(_, c)| c)
            .collect();

        let mut metrics = BTreeMap::new();
        let mut strength_areas = Vec::new();
        let mut improvement_areas = Vec::new();

        for metric in RatioMetric::ALL {
            let Some(comparison) = self.compare(company, &peers, metric) else {
                continue;
            };
            if comparison.percentile >= self.config.strength_percentile {
                strength_areas.push(metric.label().to_string());
            }
            if comparison.percentile <= self.config.improvement_percentile {
                improvement_areas.push(metric.label().to_string());
            }
            metrics.insert(metric.label().to_string(), comparison);
        }

        if metrics.len() < RatioMetric::ALL.len() {
            tracing::debug!(
                "{}: {} of {} metrics benchmarked against {} peers",
                company.id,
                metrics.len(),
                RatioMetric::ALL.len(),
                peers.len()
            );
        }

        let overall_score = OverallRanker::score(company);

        BenchmarkingResult {
            company_id: company.id.clone(),
            company_name: company.name.clone(),
            industry: company.industry.clone(),
            metrics,
            overall_rank: ranker.rank(overall_score),
            overall_score,
            strength_areas,
            improvement_areas,
        }
    }

    fn compare(
        &self,
        company: &Company,
        peers: &[&Company],
        metric: RatioMetric,
    ) -> Option<MetricComparison> {
        let company_value = metric.value(company)?;
        let peer_values: Vec<f64> = peers.iter().filter_map(|p| metric.value(p)).collect();
        if peer_values.is_empty() {
            return None;
        }

        let best_in_class = peer_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let change = percent_change(&metric_history(company, metric.label()));

        Some(MetricComparison {
            metric: metric.label().to_string(),
            company_value,
            percentile: descending_rank_percentile(company_value, &peer_values),
            industry_average: mean(&peer_values),
            best_in_class,
            gap: finite_or_zero(best_in_class - company_value),
            peer_count: peer_values.len(),
            trend: TrendDirection::from_change(change, self.config.trend_threshold_pct),
        })
    }
}
