use thiserror::Error;

use crate::tools::CalcError;

/// Crate-wide error type for the fallible surfaces (calculator, config, output).
///
/// Question analysis itself never fails and does not use this type.
#[derive(Debug, Clone, Error)]
pub enum TutorError {
    /// Represents an arithmetic expression the calculator could not evaluate.
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalcError),

    /// Represents data validation errors (e.g., out-of-range settings).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents failures while rendering results as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<validator::ValidationErrors> for TutorError {
    fn from(err: validator::ValidationErrors) -> Self {
        TutorError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<serde_json::Error> for TutorError {
    fn from(err: serde_json::Error) -> Self {
        TutorError::Serialization(format!("JSON error: {}", err))
    }
}
