use crate::models::{Insight, InsightKind};
use analysis_core::AnalyticsConfig;
use portfolio_analytics::PortfolioMetrics;

pub struct InsightGenerator<'a> {
    config: &'a AnalyticsConfig,
}

impl<'a> InsightGenerator<'a> {
    pub fn new(config: &'a AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Evaluate every rule in fixed order. An empty portfolio yields nothing.
    pub fn generate(&self, metrics: &PortfolioMetrics) -> Vec<Insight> {
        if metrics.company_count == 0 {
            return Vec::new();
        }

        let cfg = self.config;
        let risk = &metrics.risk;
        let performance = &metrics.performance;
        let mut insights = Vec::new();

        if risk.concentration_risk > cfg.high_concentration {
            insights.push(Insight::warning(
                InsightKind::HighConcentration,
                format!(
                    "High concentration risk ({:.2}). Consider diversifying across more holdings.",
                    risk.concentration_risk
                ),
            ));
        }

        if risk.diversification_ratio < cfg.low_diversification {
            insights.push(Insight::warning(
                InsightKind::LowDiversification,
                format!(
                    "Low diversification ratio ({:.2}). Holdings move closely together; {}",
                    risk.diversification_ratio, "look for less correlated companies."
                ),
            ));
        }

        if performance.weighted_roe > cfg.strong_roe_pct {
            insights.push(Insight::positive(
                InsightKind::StrongReturnOnEquity,
                format!(
                    "Strong weighted ROE of {:.1}% across the portfolio.",
                    performance.weighted_roe
                ),
            ));
        }

        if performance.risk_adjusted_return > cfg.strong_risk_adjusted_return {
            insights.push(Insight::positive(
                InsightKind::StrongRiskAdjustedReturn,
                format!(
                    "Attractive risk-adjusted return of {:.2}.",
                    performance.risk_adjusted_return
                ),
            ));
        }

        let industries = metrics.industry_count();
        if industries < cfg.min_industries {
            insights.push(Insight::suggestion(
                InsightKind::NarrowIndustryExposure,
                format!(
                    "Portfolio spans {} industr{}. Consider expanding into additional industries.",
                    industries,
                    if industries == 1 { "y" } else { "ies" }
                ),
            ));
        }

        tracing::debug!("Generated {} portfolio insights", insights.len());
        insights
    }
}
