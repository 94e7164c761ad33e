use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Non-finite value in {company}/{metric} at period {index}")]
    NonFiniteValue {
        company: String,
        metric: String,
        index: usize,
    },

    #[error("Duplicate company id: {0}")]
    DuplicateCompany(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
