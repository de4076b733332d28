//! Common types for confidence intervals

use sampling_core::{check_confidence_level, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Confidence level validated to lie in (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// Fails with `InvalidConfidenceLevel` if `level` is not in (0, 1).
    pub fn new(level: f64) -> Result<Self> {
        check_confidence_level(level)?;
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Cumulative probability at the upper critical value, `1 - alpha/2`
    pub fn upper_tail_quantile(&self) -> f64 {
        1.0 - self.tail_probability()
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = sampling_core::Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampling_core::Error;

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::new(0.02, 0.08, 0.05, 0.95);

        assert!((ci.width() - 0.06).abs() < 1e-12);
        assert!((ci.margin_of_error() - 0.03).abs() < 1e-12);
        assert!(ci.contains(0.05));
        assert!(!ci.contains(0.01));
        assert!(!ci.contains(0.09));
    }

    #[test]
    fn test_confidence_level() {
        let level = ConfidenceLevel::new(0.95).unwrap();
        assert_eq!(level.value(), 0.95);
        assert!((level.alpha() - 0.05).abs() < 1e-10);
        assert!((level.tail_probability() - 0.025).abs() < 1e-10);
        assert!((level.upper_tail_quantile() - 0.975).abs() < 1e-10);
        assert_eq!(ConfidenceLevel::default(), ConfidenceLevel::NINETY_FIVE);
    }

    #[test]
    fn test_invalid_confidence_level() {
        for level in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            assert!(matches!(
                ConfidenceLevel::new(level),
                Err(Error::InvalidConfidenceLevel(_))
            ));
        }
        assert!(ConfidenceLevel::try_from(2.0).is_err());
    }

    #[test]
    fn test_display() {
        let ci = ConfidenceInterval::new(0.025, 0.075, 0.05, 0.95);
        assert_eq!(
            format!("{ci}"),
            "95.0% CI: [0.0250, 0.0750], estimate: 0.0500"
        );
        assert_eq!(format!("{}", ConfidenceLevel::NINETY_NINE), "99.0%");
    }
}
