use crate::models::{CompanyRisk, CorrelationMatrix, RiskMetrics};
use crate::shared_math;
use crate::weights::weighted_sum;
use analysis_core::{labels, Company};
use nalgebra::{DMatrix, DVector};

pub struct RiskCalculator;

impl RiskCalculator {
    /// Portfolio risk metrics over the companies' Revenue series.
    /// `weights` holds one weight per company in input order.
    pub fn compute(companies: &[Company], weights: &[f64]) -> RiskMetrics {
        let per_company: Vec<CompanyRisk> = companies.iter().map(Self::company_risk).collect();
        let volatilities: Vec<f64> = per_company.iter().map(|r| r.volatility).collect();

        let correlation_matrix = Self::correlation_matrix(companies);
        let portfolio_volatility =
            Self::portfolio_volatility(weights, &volatilities, &correlation_matrix);
        let diversification_ratio =
            Self::diversification_ratio(weights, &volatilities, portfolio_volatility);
        let concentration_risk = shared_math::herfindahl_index(weights);

        tracing::debug!(
            "Risk metrics for {} companies: vol={:.4}, diversification={:.4}, concentration={:.4}",
            companies.len(),
            portfolio_volatility,
            diversification_ratio,
            concentration_risk
        );

        RiskMetrics {
            companies: per_company,
            correlation_matrix,
            portfolio_volatility,
            diversification_ratio,
            concentration_risk,
        }
    }

    fn company_risk(company: &Company) -> CompanyRisk {
        let revenue = company.values(labels::REVENUE);
        let returns_pct: Vec<f64> = shared_math::period_returns(revenue)
            .into_iter()
            .map(|r| r * 100.0)
            .collect();

        CompanyRisk {
            company_id: company.id.clone(),
            volatility: shared_math::volatility(revenue),
            return_volatility: shared_math::volatility(&returns_pct),
        }
    }

    /// Revenue correlation for every ordered pair of companies.
    /// The diagonal is fixed at 1.0 regardless of the data.
    pub fn correlation_matrix(companies: &[Company]) -> CorrelationMatrix {
        let n = companies.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                values[i][j] = if i == j {
                    1.0
                } else {
                    shared_math::correlation(
                        companies[i].values(labels::REVENUE),
                        companies[j].values(labels::REVENUE),
                    )
                };
            }
        }

        CorrelationMatrix {
            company_ids: companies.iter().map(|c| c.id.clone()).collect(),
            values,
        }
    }

    /// sqrt(wᵀ Σ w) with Σ = diag(vol) · corr · diag(vol).
    pub fn portfolio_volatility(
        weights: &[f64],
        volatilities: &[f64],
        correlation: &CorrelationMatrix,
    ) -> f64 {
        let n = weights.len();
        if n == 0 || volatilities.len() != n || correlation.len() != n {
            return 0.0;
        }

        let corr = DMatrix::from_fn(n, n, |i, j| correlation.values[i][j]);
        let vol = DMatrix::from_diagonal(&DVector::from_column_slice(volatilities));
        let covariance = &vol * corr * &vol;
        let w = DVector::from_column_slice(weights);

        let variance = w.dot(&(covariance * &w));
        if variance > 0.0 && variance.is_finite() {
            variance.sqrt()
        } else {
            0.0
        }
    }

    /// Weighted average individual volatility over portfolio volatility.
    pub fn diversification_ratio(
        weights: &[f64],
        volatilities: &[f64],
        portfolio_volatility: f64,
    ) -> f64 {
        if portfolio_volatility <= 0.0 {
            return 0.0;
        }
        shared_math::finite_or_zero(weighted_sum(weights, volatilities) / portfolio_volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::{EqualWeight, Weighting};

    fn company_with_revenue(id: &str, revenue: Vec<f64>) -> Company {
        Company::new(id, id, "Technology").with_series(labels::REVENUE, revenue)
    }

    #[test]
    fn test_correlation_matrix_diagonal_is_one() {
        let companies = vec![
            company_with_revenue("a", vec![100.0, 110.0, 121.0]),
            company_with_revenue("b", vec![100.0, 90.0, 81.0]),
            Company::new("c", "c", "Energy"),
        ];
        let matrix = RiskCalculator::correlation_matrix(&companies);
        for id in ["a", "b", "c"] {
            assert_eq!(matrix.get(id, id), Some(1.0));
        }
        let ab = matrix.get("a", "b").unwrap();
        assert!(ab < -0.99);
        assert_eq!(matrix.get("a", "b"), matrix.get("b", "a"));
        assert_eq!(matrix.get("a", "c"), Some(0.0));
        assert_eq!(matrix.get("a", "zzz"), None);
    }

    #[test]
    fn test_single_company_volatility_matches_own() {
        let companies = vec![company_with_revenue("a", vec![100.0, 120.0, 90.0, 130.0])];
        let weights = EqualWeight.weights(&companies);
        let metrics = RiskCalculator::compute(&companies, &weights);

        let own = shared_math::volatility(&[100.0, 120.0, 90.0, 130.0]);
        assert!((metrics.portfolio_volatility - own).abs() < 1e-9);
        assert!((metrics.diversification_ratio - 1.0).abs() < 1e-9);
        assert!((metrics.concentration_risk - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_portfolio_degenerates_to_zero() {
        let metrics = RiskCalculator::compute(&[], &[]);
        assert_eq!(metrics.portfolio_volatility, 0.0);
        assert_eq!(metrics.diversification_ratio, 0.0);
        assert_eq!(metrics.concentration_risk, 0.0);
        assert!(metrics.correlation_matrix.is_empty());
    }

    #[test]
    fn test_flat_revenue_gives_zero_diversification() {
        let companies = vec![
            company_with_revenue("a", vec![50.0, 50.0, 50.0]),
            company_with_revenue("b", vec![70.0]),
        ];
        let weights = EqualWeight.weights(&companies);
        let metrics = RiskCalculator::compute(&companies, &weights);
        assert_eq!(metrics.portfolio_volatility, 0.0);
        assert_eq!(metrics.diversification_ratio, 0.0);
        assert!((metrics.concentration_risk - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_perfectly_correlated_pair() {
        // b = 2a, so corr = 1 and portfolio vol = mean of vols
        let companies = vec![
            company_with_revenue("a", vec![10.0, 20.0, 30.0]),
            company_with_revenue("b", vec![20.0, 40.0, 60.0]),
        ];
        let weights = EqualWeight.weights(&companies);
        let metrics = RiskCalculator::compute(&companies, &weights);

        let va = shared_math::volatility(&[10.0, 20.0, 30.0]);
        let vb = shared_math::volatility(&[20.0, 40.0, 60.0]);
        assert!((metrics.portfolio_volatility - (va + vb) / 2.0).abs() < 1e-9);
        assert!((metrics.diversification_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_opposite_pair_diversifies() {
        let companies = vec![
            company_with_revenue("a", vec![100.0, 110.0, 121.0]),
            company_with_revenue("b", vec![100.0, 90.0, 81.0]),
        ];
        let weights = EqualWeight.weights(&companies);
        let metrics = RiskCalculator::compute(&companies, &weights);
        assert!(metrics.diversification_ratio > 1.0);
        assert!(metrics.portfolio_volatility.is_finite());
    }

    #[test]
    fn test_vanishing_portfolio_volatility_stays_finite() {
        let ratio = RiskCalculator::diversification_ratio(&[1.0], &[1e300], 1e-300);
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_return_volatility_uses_period_returns() {
        let company = company_with_revenue("a", vec![100.0, 110.0, 121.0]);
        let risk = RiskCalculator::company_risk(&company);
        // both returns are 10%, so no dispersion
        assert!(risk.return_volatility.abs() < 1e-9);
        assert!(risk.volatility > 0.0);
    }
}
