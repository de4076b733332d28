//! Simple random sampling without replacement
//!
//! The random source is always supplied by the caller, so repeated draws are
//! reproducible from a seed and independent calls can run concurrently
//! without sharing generator state.

use crate::{Error, Population, Result, CHANGED};
use rand::seq::index;
use rand::Rng;
use serde::Serialize;
use tracing::trace;

/// Units drawn from a [`Population`] without replacement
///
/// Only [`sample_without_replacement`] builds one, so it serialises for
/// reporting but does not deserialise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    units: Vec<u8>,
    changed: usize,
}

impl Sample {
    /// Sampled unit values, in draw order
    pub fn units(&self) -> &[u8] {
        &self.units
    }

    /// Sample size `n`
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of changed units in the sample
    pub fn changed_count(&self) -> usize {
        self.changed
    }

    /// Sample mean `sum(sample) / n`
    pub fn proportion(&self) -> f64 {
        self.changed as f64 / self.units.len() as f64
    }
}

/// Check that `n` units can be drawn from a population of `population_size`
///
/// A sample needs at least two units because the standard error divides by
/// `n - 1`.
pub fn check_sample_size(n: usize, population_size: usize) -> Result<()> {
    if n <= 1 || n > population_size {
        return Err(Error::sample_size(n, population_size));
    }
    Ok(())
}

/// Draw `n` units uniformly at random without replacement
///
/// Every subset of size `n` is equally likely and no unit index is drawn
/// twice.
pub fn sample_without_replacement<R: Rng + ?Sized>(
    population: &Population,
    n: usize,
    rng: &mut R,
) -> Result<Sample> {
    check_sample_size(n, population.len())?;

    let source = population.units();
    let units: Vec<u8> = index::sample(rng, source.len(), n)
        .into_iter()
        .map(|i| source[i])
        .collect();
    let changed = units.iter().filter(|&&u| u == CHANGED).count();

    trace!(n, changed, population = source.len(), "drew sample");
    Ok(Sample { units, changed })
}
