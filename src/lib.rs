//! Finite-population sampling toolkit
//!
//! Estimate the proportion of changed units in a population from a simple
//! random sample, quantify its standard error, and plan how many units to
//! sample for a target precision.
//!
//! # Crates
//!
//! - [`sampling_core`]: populations, the without-replacement sampler and errors
//! - [`sampling_confidence`]: confidence levels, critical values and intervals
//! - [`sampling_proportion`]: the proportion estimator and Monte Carlo experiments
//! - [`sampling_design`]: Cochran's sample-size formula and margin of error
//!
//! # Example
//!
//! ```rust
//! use sampling_stats::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Plan: 10% relative precision for an expected 1% change rate
//! let n = required_sample_size(0.1, 0.95, 0.01).unwrap();
//!
//! // Sample and estimate
//! let population = Population::with_proportion(1_000_000, 0.01).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let result = estimate_proportion(&population, n, &mut rng).unwrap();
//! println!("{result}");
//! ```

// Re-export workspace crates
pub use sampling_confidence;
pub use sampling_core;
pub use sampling_design;
pub use sampling_proportion;

pub use sampling_core::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use sampling_confidence::{critical_value, z_score, ConfidenceInterval, ConfidenceLevel};
    pub use sampling_core::{
        sample_without_replacement, AreaStatistics, Error, Population, Result, Sample,
    };
    pub use sampling_design::{margin_of_error, required_sample_size, MarginKind, SampleSizePlanner};
    pub use sampling_proportion::{
        estimate_proportion, ExperimentSummary, MonteCarloExperiment, ProportionEstimate,
        ProportionEstimator, SamplingEstimator,
    };
}
