//! Error types for finite-population sampling
//!
//! Provides a unified error type for all sampling-stats crates.

use thiserror::Error;

/// Core error type for sampling operations
#[derive(Error, Debug)]
pub enum Error {
    /// Requested sample size cannot be drawn from the population
    #[error("Invalid sample size {requested}: {reason}")]
    InvalidSampleSize { requested: usize, reason: String },

    /// Proportion of exactly 0 or 1 used where it would divide by zero
    #[error("Degenerate proportion: {0} must lie strictly between 0 and 1")]
    DegenerateProportion(f64),

    /// Confidence level outside the open interval (0, 1)
    #[error("Invalid confidence level: {0} must lie strictly between 0 and 1")]
    InvalidConfidenceLevel(f64),

    /// Invalid input data or parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a sample size that cannot be drawn
    pub fn sample_size(requested: usize, population: usize) -> Self {
        Self::InvalidSampleSize {
            requested,
            reason: format!("must be between 2 and the population size {population}"),
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}

/// Validate that a confidence level lies in (0, 1)
pub fn check_confidence_level(level: f64) -> Result<()> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfidenceLevel(level))
    }
}

/// Validate that a proportion lies in (0, 1)
pub fn check_proportion(p: f64) -> Result<()> {
    if !p.is_finite() {
        return Err(Error::non_finite("population proportion"));
    }
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(Error::DegenerateProportion(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::sample_size(150, 100);
        assert_eq!(
            err.to_string(),
            "Invalid sample size 150: must be between 2 and the population size 100"
        );

        let err = Error::DegenerateProportion(0.0);
        assert_eq!(
            err.to_string(),
            "Degenerate proportion: 0 must lie strictly between 0 and 1"
        );

        let err = Error::InvalidConfidenceLevel(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid confidence level: 1.5 must lie strictly between 0 and 1"
        );

        let err = Error::non_finite("precision");
        assert_eq!(
            err.to_string(),
            "Invalid input: precision contains NaN or infinite values"
        );
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("service unavailable");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("service unavailable"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_check_confidence_level() {
        assert!(check_confidence_level(0.95).is_ok());
        assert!(matches!(
            check_confidence_level(0.0),
            Err(Error::InvalidConfidenceLevel(_))
        ));
        assert!(matches!(
            check_confidence_level(1.0),
            Err(Error::InvalidConfidenceLevel(_))
        ));
        assert!(check_confidence_level(f64::NAN).is_err());
    }

    #[test]
    fn test_check_proportion() {
        assert!(check_proportion(0.5).is_ok());
        assert!(matches!(
            check_proportion(0.0),
            Err(Error::DegenerateProportion(_))
        ));
        assert!(matches!(
            check_proportion(1.0),
            Err(Error::DegenerateProportion(_))
        ));
        assert!(matches!(
            check_proportion(f64::INFINITY),
            Err(Error::InvalidInput(_))
        ));
    }
}
