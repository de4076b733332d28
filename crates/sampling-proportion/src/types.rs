//! Result types for proportion estimation

use sampling_confidence::{normal_interval, ConfidenceInterval, ConfidenceLevel};
use sampling_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point estimate of a population proportion with its standard error
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProportionEstimate {
    /// Sample mean, in [0, 1]
    pub estimate: f64,
    /// Finite-population-corrected standard error, >= 0
    pub standard_error: f64,
    /// Sample size `n`
    pub sample_size: usize,
    /// Population size `N`
    pub population_size: usize,
}

impl ProportionEstimate {
    /// Finite population correction `1 - n / N`
    ///
    /// Zero for a census, and for an empty or oversampled population.
    pub fn finite_population_correction(&self) -> f64 {
        if self.population_size == 0 {
            return 0.0;
        }
        self.population_size.saturating_sub(self.sample_size) as f64 / self.population_size as f64
    }

    /// Sampling fraction `n / N`, capped at 1
    pub fn sampling_fraction(&self) -> f64 {
        if self.population_size == 0 {
            return 1.0;
        }
        (self.sample_size as f64 / self.population_size as f64).min(1.0)
    }

    /// Normal-approximation confidence interval, clamped to [0, 1]
    pub fn confidence_interval(&self, level: ConfidenceLevel) -> Result<ConfidenceInterval> {
        let ci = normal_interval(self.estimate, self.standard_error, level)?;
        Ok(ConfidenceInterval::new(
            ci.lower.max(0.0),
            ci.upper.min(1.0),
            ci.estimate,
            ci.confidence_level,
        ))
    }
}

impl fmt::Display for ProportionEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p = {:.4} (SE {:.4}, n = {}, N = {})",
            self.estimate, self.standard_error, self.sample_size, self.population_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(p: f64, se: f64) -> ProportionEstimate {
        ProportionEstimate {
            estimate: p,
            standard_error: se,
            sample_size: 100,
            population_size: 400,
        }
    }

    #[test]
    fn test_fpc_and_fraction() {
        let e = estimate(0.1, 0.02);
        assert_eq!(e.finite_population_correction(), 0.75);
        assert_eq!(e.sampling_fraction(), 0.25);
    }

    #[test]
    fn test_fpc_with_inconsistent_sizes() {
        // Deserialised estimates are not checked against the sampler bounds
        let oversampled: ProportionEstimate = serde_json::from_str(
            r#"{"estimate":0.5,"standard_error":0.0,"sample_size":500,"population_size":400}"#,
        )
        .unwrap();
        assert_eq!(oversampled.finite_population_correction(), 0.0);
        assert_eq!(oversampled.sampling_fraction(), 1.0);

        let empty = ProportionEstimate {
            population_size: 0,
            ..estimate(0.5, 0.0)
        };
        assert_eq!(empty.finite_population_correction(), 0.0);
        assert_eq!(empty.sampling_fraction(), 1.0);
    }

    #[test]
    fn test_interval_is_clamped() {
        let ci = estimate(0.01, 0.02)
            .confidence_interval(ConfidenceLevel::NINETY_FIVE)
            .unwrap();
        assert_eq!(ci.lower, 0.0);
        assert!(ci.upper > 0.01);

        let ci = estimate(0.99, 0.02)
            .confidence_interval(ConfidenceLevel::NINETY_FIVE)
            .unwrap();
        assert_eq!(ci.upper, 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            estimate(0.125, 0.03).to_string(),
            "p = 0.1250 (SE 0.0300, n = 100, N = 400)"
        );
    }
}
