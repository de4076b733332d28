//! Proportion and standard-error estimation under simple random sampling
//!
//! For a sample of size `n` drawn without replacement from a population of
//! size `N`:
//!
//! ```text
//! p̂   = sum(sample) / n
//! S    = p̂ (1 - p̂)
//! fpc  = 1 - n / N
//! SE   = sqrt(fpc · S / (n - 1))
//! ```
//!
//! `p̂` is unbiased for the population proportion, and `SE` tracks the
//! spread of `p̂` across repeated samples of the same size.

use crate::{ProportionEstimate, SamplingEstimator};
use rand::{Rng, RngCore};
use sampling_core::{check_sample_size, sample_without_replacement, Population, Result, Sample};
use tracing::trace;

/// Sample-mean estimator with finite-population-corrected standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionEstimator;

impl ProportionEstimator {
    /// Create a new proportion estimator
    pub fn new() -> Self {
        Self
    }

    /// Estimate from a sample already drawn from a population of
    /// `population_size` units
    pub fn estimate_sample(
        &self,
        sample: &Sample,
        population_size: usize,
    ) -> Result<ProportionEstimate> {
        let n = sample.len();
        check_sample_size(n, population_size)?;

        let estimate = sample.proportion();
        let variance = estimate * (1.0 - estimate);
        // Integer numerator keeps a full census at exactly zero
        let fpc = (population_size - n) as f64 / population_size as f64;
        let standard_error = (fpc * variance / (n - 1) as f64).sqrt();

        trace!(n, estimate, standard_error, "estimated proportion");
        Ok(ProportionEstimate {
            estimate,
            standard_error,
            sample_size: n,
            population_size,
        })
    }

    /// Draw a sample of size `n` and estimate from it
    pub fn estimate_with_rng<R: Rng + ?Sized>(
        &self,
        population: &Population,
        n: usize,
        rng: &mut R,
    ) -> Result<ProportionEstimate> {
        let sample = sample_without_replacement(population, n, rng)?;
        self.estimate_sample(&sample, population.len())
    }
}

impl SamplingEstimator for ProportionEstimator {
    fn estimate(
        &self,
        population: &Population,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<ProportionEstimate> {
        self.estimate_with_rng(population, n, rng)
    }

    fn name(&self) -> &'static str {
        "simple-random-proportion"
    }
}

/// Draw `n` units without replacement and estimate the population
/// proportion and its standard error
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use sampling_core::Population;
/// use sampling_proportion::estimate_proportion;
///
/// let population = Population::with_proportion(62_500, 0.01).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let result = estimate_proportion(&population, 1_000, &mut rng).unwrap();
/// assert!(result.estimate >= 0.0 && result.estimate <= 1.0);
/// ```
pub fn estimate_proportion<R: Rng + ?Sized>(
    population: &Population,
    n: usize,
    rng: &mut R,
) -> Result<ProportionEstimate> {
    ProportionEstimator::new().estimate_with_rng(population, n, rng)
}
