use crate::aggregates::period_aggregates;
use crate::forecast::{forecast_confidence, linear_forecast};
use crate::models::{CompanyTrend, TrendAnalysis};
use analysis_core::{AnalyticsConfig, Company, TrendDirection};
use portfolio_analytics::metric_history;
use portfolio_analytics::shared_math::{percent_change, volatility};
use std::collections::BTreeMap;

pub struct TrendAnalyzer<'a> {
    config: &'a AnalyticsConfig,
}

impl<'a> TrendAnalyzer<'a> {
    pub fn new(config: &'a AnalyticsConfig) -> Self {
        Self { config }
    }

    /// One analysis per requested metric, in request order.
    pub fn analyze<S: AsRef<str>>(
        &self,
        companies: &[Company],
        metrics: &[S],
    ) -> Vec<TrendAnalysis> {
        metrics
            .iter()
            .map(|metric| self.analyze_metric(companies, metric.as_ref()))
            .collect()
    }

    pub fn analyze_metric(&self, companies: &[Company], metric: &str) -> TrendAnalysis {
        let histories: Vec<(&Company, Vec<f64>)> = companies
            .iter()
            .map(|c| (c, metric_history(c, metric)))
            .collect();

        let mut trends = BTreeMap::new();
        for (company, values) in &histories {
            if values.len() < 2 {
                continue;
            }
            trends.insert(company.id.clone(), self.company_trend(company, values));
        }

        let all: Vec<&[f64]> = histories.iter().map(|(_, v)| v.as_slice()).collect();
        let industry_benchmarks = period_aggregates(&all);

        let mut grouped: BTreeMap<&str, Vec<&[f64]>> = BTreeMap::new();
        for (company, values) in &histories {
            grouped
                .entry(company.industry.as_str())
                .or_default()
                .push(values.as_slice());
        }
        let by_industry = grouped
            .into_iter()
            .map(|(industry, series)| (industry.to_string(), period_aggregates(&series)))
            .collect();

        tracing::debug!(
            "Trend analysis for {}: {} of {} companies qualified, {} periods",
            metric,
            trends.len(),
            companies.len(),
            industry_benchmarks.len()
        );

        TrendAnalysis {
            metric: metric.to_string(),
            companies: trends,
            industry_benchmarks,
            by_industry,
        }
    }

    fn company_trend(&self, company: &Company, values: &[f64]) -> CompanyTrend {
        let cfg = self.config;
        CompanyTrend {
            company_name: company.name.clone(),
            industry: company.industry.clone(),
            values: values.to_vec(),
            trend: TrendDirection::from_change(percent_change(values), cfg.trend_threshold_pct),
            volatility: volatility(values),
            forecast: linear_forecast(values, cfg.forecast_horizon),
            confidence: forecast_confidence(
                values,
                cfg.confidence_floor,
                cfg.confidence_ceiling,
                cfg.default_confidence,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::labels;

    fn portfolio() -> Vec<Company> {
        vec![
            Company::new("a", "A", "Technology")
                .with_series(labels::REVENUE, vec![100.0, 110.0, 121.0]),
            Company::new("b", "B", "Technology")
                .with_series(labels::REVENUE, vec![100.0, 90.0, 81.0]),
            Company::new("c", "C", "Energy").with_series(labels::REVENUE, vec![50.0]),
            Company::new("d", "D", "Energy"),
        ]
    }

    #[test]
    fn test_only_companies_with_two_points() {
        let config = AnalyticsConfig::default();
        let analysis = TrendAnalyzer::new(&config).analyze_metric(&portfolio(), labels::REVENUE);

        let ids: Vec<&str> = analysis.companies.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(analysis.company("a").map(|t| t.trend), Some(TrendDirection::Upward));
        assert_eq!(analysis.company("b").map(|t| t.trend), Some(TrendDirection::Downward));
        assert_eq!(analysis.company("a").map(|t| t.forecast.len()), Some(2));
    }

    #[test]
    fn test_aggregates_include_single_point_series() {
        let config = AnalyticsConfig::default();
        let analysis = TrendAnalyzer::new(&config).analyze_metric(&portfolio(), labels::REVENUE);

        assert_eq!(analysis.industry_benchmarks.len(), 3);
        assert_eq!(analysis.industry_benchmarks[0].count, 3);
        assert_eq!(analysis.industry_benchmarks[2].count, 2);

        assert_eq!(analysis.by_industry.len(), 2);
        assert_eq!(analysis.by_industry["Energy"].len(), 1);
        assert_eq!(analysis.by_industry["Technology"].len(), 3);
    }

    #[test]
    fn test_request_order_and_empty_metrics() {
        let config = AnalyticsConfig::default();
        let analyzer = TrendAnalyzer::new(&config);
        let none: [&str; 0] = [];
        assert!(analyzer.analyze(&portfolio(), &none).is_empty());

        let analyses = analyzer.analyze(&portfolio(), &["Unknown", labels::REVENUE]);
        assert_eq!(analyses.len(), 2);
        assert_eq!(analyses[0].metric, "Unknown");
        assert!(analyses[0].companies.is_empty());
        assert!(analyses[0].industry_benchmarks.is_empty());
        assert_eq!(analyses[1].metric, labels::REVENUE);
    }

    #[test]
    fn test_derived_ratio_trend() {
        let config = AnalyticsConfig::default();
        let company = Company::new("a", "A", "Retail")
            .with_series(labels::NET_INCOME, vec![5.0, 10.0, 15.0])
            .with_series(labels::SHAREHOLDERS_EQUITY, vec![100.0, 100.0, 100.0]);
        let analysis = TrendAnalyzer::new(&config).analyze_metric(&[company], "ROE");

        let trend = analysis.company("a").unwrap();
        assert_eq!(trend.values, vec![5.0, 10.0, 15.0]);
        assert_eq!(trend.trend, TrendDirection::Upward);
        assert!((trend.forecast[0] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_horizon() {
        let config = AnalyticsConfig {
            forecast_horizon: 4,
            ..AnalyticsConfig::default()
        };
        let analysis = TrendAnalyzer::new(&config).analyze_metric(&portfolio(), labels::REVENUE);
        assert_eq!(analysis.company("b").map(|t| t.forecast.len()), Some(4));
    }
}
