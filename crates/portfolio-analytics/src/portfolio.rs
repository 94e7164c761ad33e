use crate::industry::{comparative_metrics, industry_breakdown};
use crate::models::PortfolioMetrics;
use crate::performance::PerformanceCalculator;
use crate::risk_metrics::RiskCalculator;
use crate::weights::{EqualWeight, Weighting};
use analysis_core::Company;

/// Combines the risk and performance engines into one portfolio snapshot.
pub struct PortfolioAnalyzer<W: Weighting = EqualWeight> {
    weighting: W,
}

impl Default for PortfolioAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioAnalyzer {
    pub fn new() -> Self {
        Self {
            weighting: EqualWeight,
        }
    }
}

impl<W: Weighting> PortfolioAnalyzer<W> {
    pub fn with_weighting(weighting: W) -> Self {
        Self { weighting }
    }

    pub fn analyze(&self, companies: &[Company]) -> PortfolioMetrics {
        let weights = self.weighting.weights(companies);

        let risk = RiskCalculator::compute(companies, &weights);
        let performance = PerformanceCalculator::compute(
            companies,
            &weights,
            risk.concentration_risk,
            risk.diversification_ratio,
        );
        let comparative = comparative_metrics(&performance.companies, &risk.companies);
        let industry_breakdown = industry_breakdown(companies, &performance.companies, &weights);

        PortfolioMetrics {
            company_count: companies.len(),
            risk,
            performance,
            comparative,
            industry_breakdown,
        }
    }
}
