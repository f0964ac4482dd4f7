//! Error types
//!
//! The %DV calculator itself never fails; these cover the validated entry
//! point and decoding of nutriment records.

use thiserror::Error;

/// Evaluation error types
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Invalid measurement for {key}: {value} (must be finite and non-negative)")]
    InvalidMeasurement { key: String, value: f64 },

    #[error("Malformed nutriments record: {0}")]
    Nutriments(#[from] serde_json::Error),

    #[error("Nutriments record must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;
