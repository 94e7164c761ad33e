use analysis_core::{validate_companies, AnalysisResult, AnalyticsConfig, Company};
use peer_benchmark::{BenchmarkingResult, PeerBenchmarker};
use portfolio_analytics::{PortfolioAnalyzer, PortfolioMetrics};
use portfolio_insights::{Insight, InsightGenerator};
use trend_analysis::{TrendAnalysis, TrendAnalyzer};


/// Single entry point over the portfolio, benchmarking, trend and insight
/// engines. Holds only configuration; every call works on the slice it is
/// given and keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with explicit thresholds, rejecting an inconsistent config.
    pub fn with_config(config: AnalyticsConfig) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Risk, performance, comparative and industry metrics for the portfolio.
    pub fn analyze_portfolio(&self, companies: &[Company]) -> AnalysisResult<PortfolioMetrics> {
        let _span = tracing::info_span!("analyze_portfolio", companies = companies.len()).entered();
        validate_companies(companies)?;

        let metrics = PortfolioAnalyzer::new().analyze(companies);
        tracing::info!(
            "Portfolio analyzed: {} companies across {} industries",
            metrics.company_count,
            metrics.industry_count()
        );
        Ok(metrics)
    }

    /// One benchmarking result per company, input order preserved.
    pub fn benchmark_companies(
        &self,
        companies: &[Company],
    ) -> AnalysisResult<Vec<BenchmarkingResult>> {
        let _span =
            tracing::info_span!("benchmark_companies", companies = companies.len()).entered();
        validate_companies(companies)?;

        Ok(PeerBenchmarker::new(&self.config).benchmark(companies))
    }

    /// One trend analysis per requested metric name, in request order.
    pub fn analyze_trends<S: AsRef<str>>(
        &self,
        companies: &[Company],
        metrics: &[S],
    ) -> AnalysisResult<Vec<TrendAnalysis>> {
        let _span = tracing::info_span!(
            "analyze_trends",
            companies = companies.len(),
            metrics = metrics.len()
        )
        .entered();
        validate_companies(companies)?;

        Ok(TrendAnalyzer::new(&self.config).analyze(companies, metrics))
    }

    /// Typed insights over the portfolio metrics, in rule order.
    pub fn portfolio_insights(&self, companies: &[Company]) -> AnalysisResult<Vec<Insight>> {
        let metrics = self.analyze_portfolio(companies)?;
        let _span = tracing::info_span!("portfolio_insights").entered();
        Ok(InsightGenerator::new(&self.config).generate(&metrics))
    }

    /// Advisory messages over the portfolio metrics, in rule order.
    pub fn generate_portfolio_insights(
        &self,
        companies: &[Company],
    ) -> AnalysisResult<Vec<String>> {
        Ok(self
            .portfolio_insights(companies)?
            .into_iter()
            .map(|insight| insight.message)
            .collect())
    }
}
