//! Monte Carlo experiments over repeated samples from a fixed population
//!
//! An experiment draws `repetitions` independent samples of the same size
//! from one population, estimates each, and summarises the sampling
//! distribution of the estimates. Repetition `i` is seeded with
//! `seed + i`, so results do not depend on execution order and the
//! `parallel` feature produces the same numbers as sequential runs.

use crate::{ProportionEstimate, ProportionEstimator, SamplingEstimator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sampling_confidence::ConfidenceLevel;
use sampling_core::{check_sample_size, utils, Error, Population, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of repeated draws
pub const DEFAULT_REPETITIONS: usize = 10_000;

/// Default base seed
pub const DEFAULT_SEED: u64 = 42;

/// Repeated-sampling experiment configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloExperiment {
    sample_size: usize,
    repetitions: usize,
    seed: u64,
}

impl MonteCarloExperiment {
    /// Create an experiment drawing samples of `sample_size` units
    pub fn new(sample_size: usize) -> Self {
        Self {
            sample_size,
            repetitions: DEFAULT_REPETITIONS,
            seed: DEFAULT_SEED,
        }
    }

    /// Set the number of repeated draws
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Set the base random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the sample size
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run the experiment with the default [`ProportionEstimator`]
    pub fn run(&self, population: &Population) -> Result<ExperimentSummary> {
        self.run_with(population, &ProportionEstimator::new())
    }

    /// Run the experiment with any sampling estimator
    #[instrument(
        skip(self, population, estimator),
        fields(
            estimator = estimator.name(),
            n = self.sample_size,
            population = population.len(),
            repetitions = self.repetitions
        )
    )]
    pub fn run_with<E>(&self, population: &Population, estimator: &E) -> Result<ExperimentSummary>
    where
        E: SamplingEstimator + Sync,
    {
        if self.repetitions < 2 {
            return Err(Error::InvalidInput(format!(
                "At least 2 repetitions required, got {}",
                self.repetitions
            )));
        }
        check_sample_size(self.sample_size, population.len())?;

        debug!("Running {} repetitions", self.repetitions);
        let estimates = self.draw_all(population, estimator)?;

        let summary = ExperimentSummary::from_estimates(population.true_proportion(), estimates);
        debug!(
            mean_estimate = summary.mean_estimate,
            empirical_std_dev = summary.empirical_std_dev,
            mean_standard_error = summary.mean_standard_error,
            "Experiment completed"
        );
        Ok(summary)
    }

    /// Run one experiment per sample size, sharing the base seed
    pub fn sweep(
        &self,
        population: &Population,
        sample_sizes: &[usize],
    ) -> Result<Vec<ExperimentSummary>> {
        sample_sizes
            .iter()
            .map(|&n| self.with_sample_size(n).run(population))
            .collect()
    }

    fn draw_one<E>(
        &self,
        population: &Population,
        estimator: &E,
        i: usize,
    ) -> Result<ProportionEstimate>
    where
        E: SamplingEstimator,
    {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.wrapping_add(i as u64));
        estimator.estimate(population, self.sample_size, &mut rng)
    }

    #[cfg(not(feature = "parallel"))]
    fn draw_all<E>(
        &self,
        population: &Population,
        estimator: &E,
    ) -> Result<Vec<ProportionEstimate>>
    where
        E: SamplingEstimator + Sync,
    {
        (0..self.repetitions)
            .map(|i| self.draw_one(population, estimator, i))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn draw_all<E>(
        &self,
        population: &Population,
        estimator: &E,
    ) -> Result<Vec<ProportionEstimate>>
    where
        E: SamplingEstimator + Sync,
    {
        (0..self.repetitions)
            .into_par_iter()
            .map(|i| self.draw_one(population, estimator, i))
            .collect()
    }
}

/// Sampling distribution of repeated estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    /// Proportion of changed units in the population
    pub true_proportion: f64,
    /// Sample size used for every draw
    pub sample_size: usize,
    /// Mean of the estimates
    pub mean_estimate: f64,
    /// Standard deviation of the estimates across draws
    pub empirical_std_dev: f64,
    /// Mean of the per-draw standard errors
    pub mean_standard_error: f64,
    /// Every per-draw estimate, in repetition order
    pub estimates: Vec<ProportionEstimate>,
}

impl ExperimentSummary {
    /// Summarise a set of estimates of a known proportion
    pub fn from_estimates(true_proportion: f64, estimates: Vec<ProportionEstimate>) -> Self {
        let points: Vec<f64> = estimates.iter().map(|e| e.estimate).collect();
        let errors: Vec<f64> = estimates.iter().map(|e| e.standard_error).collect();

        Self {
            true_proportion,
            sample_size: estimates.first().map_or(0, |e| e.sample_size),
            mean_estimate: utils::mean(&points),
            empirical_std_dev: utils::std_dev(&points),
            mean_standard_error: utils::mean(&errors),
            estimates,
        }
    }

    /// Number of draws
    pub fn repetitions(&self) -> usize {
        self.estimates.len()
    }

    /// `mean_estimate - true_proportion`
    pub fn bias(&self) -> f64 {
        self.mean_estimate - self.true_proportion
    }

    /// `mean_standard_error / empirical_std_dev`; 1.0 when both are zero
    pub fn standard_error_ratio(&self) -> f64 {
        if self.empirical_std_dev == 0.0 {
            return if self.mean_standard_error == 0.0 {
                1.0
            } else {
                f64::INFINITY
            };
        }
        self.mean_standard_error / self.empirical_std_dev
    }

    /// Fraction of per-draw normal intervals containing the true proportion
    pub fn coverage(&self, level: ConfidenceLevel) -> Result<f64> {
        if self.estimates.is_empty() {
            return Ok(0.0);
        }
        let mut covered = 0usize;
        for estimate in &self.estimates {
            if estimate.confidence_interval(level)?.contains(self.true_proportion) {
                covered += 1;
            }
        }
        Ok(covered as f64 / self.estimates.len() as f64)
    }
}
