//! Confidence levels and normal-approximation intervals
//!
//! This crate provides the pieces shared by estimation and sample-size
//! planning:
//!
//! - [`ConfidenceLevel`]: a confidence level validated to lie in (0, 1)
//! - [`critical_value`]: the two-tailed standard normal critical value
//! - [`ConfidenceInterval`]: an interval around a point estimate
//!
//! # Example
//!
//! ```rust
//! use sampling_confidence::{critical_value, ConfidenceLevel};
//!
//! let z = critical_value(ConfidenceLevel::NINETY_FIVE).unwrap();
//! assert!((z - 1.959964).abs() < 1e-5);
//! ```

mod critical;
mod types;

pub use critical::{critical_value, z_score};
pub use types::{ConfidenceInterval, ConfidenceLevel};

/// Normal-approximation interval `estimate ± z × standard_error`
pub fn normal_interval(
    estimate: f64,
    standard_error: f64,
    level: ConfidenceLevel,
) -> sampling_core::Result<ConfidenceInterval> {
    if !estimate.is_finite() || !standard_error.is_finite() {
        return Err(sampling_core::Error::non_finite("interval inputs"));
    }
    if standard_error < 0.0 {
        return Err(sampling_core::Error::InvalidInput(format!(
            "Standard error {standard_error} must be non-negative"
        )));
    }
    let margin = critical_value(level)? * standard_error;
    Ok(ConfidenceInterval::new(
        estimate - margin,
        estimate + margin,
        estimate,
        level.value(),
    ))
}
