//! Critical values of the standard normal distribution

use crate::ConfidenceLevel;
use sampling_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Two-tailed critical value `z` for a confidence level
///
/// The point where the standard normal CDF reaches `1 - (1 - c) / 2`,
/// e.g. `0.95 -> 1.959964`.
pub fn critical_value(level: ConfidenceLevel) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })?;
    Ok(normal.inverse_cdf(level.upper_tail_quantile()))
}

/// [`critical_value`] for a raw confidence level
pub fn z_score(confidence_level: f64) -> Result<f64> {
    critical_value(ConfidenceLevel::new(confidence_level)?)
}
