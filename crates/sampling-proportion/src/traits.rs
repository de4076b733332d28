//! Core trait for estimators driven by repeated sampling
//!
//! Estimators are passed to experiments as parameters rather than stored,
//! so the same Monte Carlo harness can drive any estimator that draws its
//! own sample from a population.

use crate::ProportionEstimate;
use rand::RngCore;
use sampling_core::{Population, Result};

/// An estimator that draws a sample of size `n` and estimates the
/// population proportion from it
pub trait SamplingEstimator {
    /// Draw a sample of size `n` from `population` using `rng` and estimate
    ///
    /// # Arguments
    /// * `population` - The fixed finite population
    /// * `n` - Sample size
    /// * `rng` - Random source owned by the caller
    fn estimate(
        &self,
        population: &Population,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<ProportionEstimate>;

    /// Estimator name for logs and reports
    fn name(&self) -> &'static str;
}
