//! Portfolio Insights Module
//!
//! Threshold rules over portfolio metrics that produce advisory messages.

pub mod models;
pub mod rules;

pub use models::{Insight, InsightKind, InsightSeverity};
pub use rules::InsightGenerator;
