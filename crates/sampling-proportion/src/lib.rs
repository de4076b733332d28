//! Proportion estimation under simple random sampling
//!
//! This crate estimates the proportion of changed units in a finite
//! population from a sample drawn without replacement, together with a
//! finite-population-corrected standard error, and provides a Monte Carlo
//! harness for studying the sampling distribution of those estimates.
//!
//! # Overview
//!
//! The sample mean is an unbiased estimator of the population proportion.
//! Across many repeated samples of the same size, the mean of the estimates
//! converges to the true proportion and the spread of the estimates
//! converges to the mean reported standard error. A full census (`n = N`)
//! has a standard error of exactly zero.
//!
//! # Examples
//!
//! ## Single estimate
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use sampling_confidence::ConfidenceLevel;
//! use sampling_core::Population;
//! use sampling_proportion::estimate_proportion;
//!
//! let population = Population::with_proportion(62_500, 0.01).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//!
//! let result = estimate_proportion(&population, 1_000, &mut rng).unwrap();
//! let ci = result.confidence_interval(ConfidenceLevel::NINETY_FIVE).unwrap();
//! println!("{result}, {ci}");
//! ```
//!
//! ## Repeated sampling
//!
//! ```rust
//! use sampling_core::Population;
//! use sampling_proportion::MonteCarloExperiment;
//!
//! let population = Population::with_proportion(10_000, 0.2).unwrap();
//! let summary = MonteCarloExperiment::new(500)
//!     .with_repetitions(200)
//!     .with_seed(7)
//!     .run(&population)
//!     .unwrap();
//! assert!(summary.bias().abs() < 0.01);
//! ```

mod estimator;
mod monte_carlo;
mod traits;
mod types;

// Re-exports
pub use estimator::{estimate_proportion, ProportionEstimator};
pub use monte_carlo::{ExperimentSummary, MonteCarloExperiment, DEFAULT_REPETITIONS, DEFAULT_SEED};
pub use traits::SamplingEstimator;
pub use types::ProportionEstimate;

// Convenience constructor
pub fn monte_carlo(sample_size: usize) -> MonteCarloExperiment {
    MonteCarloExperiment::new(sample_size)
}
