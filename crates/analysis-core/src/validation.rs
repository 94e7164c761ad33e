use crate::error::{AnalysisError, AnalysisResult};
use crate::types::Company;
use std::collections::HashSet;

/// Reject input the engines cannot analyze soundly: duplicate ids and
/// non-finite numbers. Missing or short series are not errors.
pub fn validate_companies(companies: &[Company]) -> AnalysisResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(companies.len());
    for company in companies {
        if !seen.insert(company.id.as_str()) {
            tracing::warn!("Rejecting portfolio: duplicate company id {}", company.id);
            return Err(AnalysisError::DuplicateCompany(company.id.clone()));
        }

        if let Some(cap) = company.market_cap {
            if !cap.is_finite() {
                return Err(non_finite(company, "Market Cap", 0));
            }
        }

        for (label, values) in company.financial_data.iter() {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                tracing::warn!(
                    "Rejecting portfolio: {} has a non-finite {} value at period {}",
                    company.id,
                    label,
                    index
                );
                return Err(non_finite(company, label, index));
            }
        }
    }
    Ok(())
}

fn non_finite(company: &Company, metric: &str, index: usize) -> AnalysisError {
    AnalysisError::NonFiniteValue {
        company: company.id.clone(),
        metric: metric.to_string(),
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::labels;

    #[test]
    fn test_valid_portfolio_passes() {
        let companies = vec![
            Company::new("a", "Alpha", "Tech").with_series(labels::REVENUE, vec![1.0, 2.0]),
            Company::new("b", "Beta", "Tech"),
        ];
        assert!(validate_companies(&companies).is_ok());
        assert!(validate_companies(&[]).is_ok());
    }

    #[test]
    fn test_non_finite_value_names_offender() {
        let companies = vec![Company::new("a", "Alpha", "Tech")
            .with_series(labels::NET_INCOME, vec![1.0, f64::NAN, 3.0])];
        let err = validate_companies(&companies).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NonFiniteValue {
                company: "a".to_string(),
                metric: labels::NET_INCOME.to_string(),
                index: 1,
            }
        );
    }

    #[test]
    fn test_infinite_market_cap_rejected() {
        let companies = vec![Company::new("a", "Alpha", "Tech").with_market_cap(f64::INFINITY)];
        assert!(validate_companies(&companies).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let companies = vec![
            Company::new("a", "Alpha", "Tech"),
            Company::new("a", "Alpha Again", "Energy"),
        ];
        assert_eq!(
            validate_companies(&companies),
            Err(AnalysisError::DuplicateCompany("a".to_string()))
        );
    }
}
