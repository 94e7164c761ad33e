use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightKind {
    HighConcentration,
    LowDiversification,
    StrongReturnOnEquity,
    StrongRiskAdjustedReturn,
    NarrowIndustryExposure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightSeverity {
    Positive,
    Suggestion,
    Warning,
}

/// One advisory produced by a portfolio rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub severity: InsightSeverity,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, severity: InsightSeverity, message: String) -> Self {
        Self {
            kind,
            severity,
            message,
        }
    }

    pub fn warning(kind: InsightKind, message: String) -> Self {
        Self::new(kind, InsightSeverity::Warning, message)
    }

    pub fn positive(kind: InsightKind, message: String) -> Self {
        Self::new(kind, InsightSeverity::Positive, message)
    }

    pub fn suggestion(kind: InsightKind, message: String) -> Self {
        Self::new(kind, InsightSeverity::Suggestion, message)
    }
}
