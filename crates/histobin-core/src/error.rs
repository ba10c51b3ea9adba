//! Error types for histogram construction
//!
//! Provides a unified error type for all histobin crates. Degenerate data
//! (constant samples, a single observation) is never an error; only malformed
//! input is reported here.

use thiserror::Error;

/// Core error type for sample statistics and binning
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        tracing::debug!("{operation} called with an empty sample");
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str, index: usize, value: f64) -> Self {
        Self::InvalidInput(format!(
            "{context} contains a non-finite value {value} at index {index}"
        ))
    }

    /// Create an error for a malformed edge sequence
    pub fn invalid_edges(reason: impl Into<String>) -> Self {
        Self::InvalidInput(format!("Invalid bin edges: {}", reason.into()))
    }

    /// True for every variant describing caller-supplied input that was rejected
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("bin count must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: bin count must be positive");

        let err = Error::InvalidInput("edges are not increasing".to_string());
        assert_eq!(err.to_string(), "Invalid input: edges are not increasing");

        let err = Error::InsufficientData { expected: 2, actual: 0 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 2 samples, got 0");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input("mean") {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::invalid_quantile(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Quantile 1.5 must be in [0, 1]");

        let err = Error::non_finite("sample", 3, f64::NAN);
        assert_eq!(
            err.to_string(),
            "Invalid input: sample contains a non-finite value NaN at index 3"
        );

        let err = Error::invalid_edges("need at least 2 edges, got 1");
        assert_eq!(
            err.to_string(),
            "Invalid input: Invalid bin edges: need at least 2 edges, got 1"
        );
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("sampler setup failed").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("sampler setup failed"));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_classification() {
        assert!(Error::invalid_quantile(-0.1).is_validation());
        assert!(Error::empty_input("quantile").is_validation());
        assert!(Error::invalid_edges("duplicate edge").is_validation());
    }
}
