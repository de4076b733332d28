//! Finite populations of binary units
//!
//! A [`Population`] is a fixed-size ordered collection of units that are
//! either unchanged (`0`) or changed (`1`). Its size is fixed at
//! construction; samples are drawn from it without ever mutating it.

use crate::{AreaStatistics, Error, Result};
use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A unit that carries the attribute of interest
pub const CHANGED: u8 = 1;
/// A unit without the attribute
pub const UNCHANGED: u8 = 0;

/// Finite population of binary units
///
/// Serialises as the plain array of unit values and deserialises through
/// [`Population::from_units`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Population {
    units: Vec<u8>,
    changed: usize,
}

impl Population {
    /// Build a population from explicit unit values
    ///
    /// Every value must be `0` or `1` and the population must be non-empty.
    pub fn from_units(units: Vec<u8>) -> Result<Self> {
        if units.is_empty() {
            return Err(Error::InvalidInput("Population must not be empty".to_string()));
        }
        if let Some(pos) = units.iter().position(|&u| u > CHANGED) {
            return Err(Error::InvalidInput(format!(
                "Unit {pos} has value {}, expected 0 or 1",
                units[pos]
            )));
        }
        let changed = units.iter().filter(|&&u| u == CHANGED).count();
        Ok(Self { units, changed })
    }

    /// Build a population with `changed` changed units followed by
    /// `unchanged` unchanged units
    pub fn from_counts(changed: usize, unchanged: usize) -> Result<Self> {
        let mut units = vec![CHANGED; changed];
        units.resize(changed + unchanged, UNCHANGED);
        Self::from_units(units)
    }

    /// Deterministic population of `size` units with `round(size * proportion)`
    /// changed units placed first
    pub fn with_proportion(size: usize, proportion: f64) -> Result<Self> {
        check_unit_interval(proportion)?;
        let changed = (size as f64 * proportion).round() as usize;
        debug!(size, changed, "building population with fixed proportion");
        Self::from_counts(changed.min(size), size.saturating_sub(changed))
    }

    /// Random population where each unit is independently changed with
    /// probability `proportion`
    pub fn bernoulli<R: Rng + ?Sized>(
        size: usize,
        proportion: f64,
        rng: &mut R,
    ) -> Result<Self> {
        check_unit_interval(proportion)?;
        let dist = Bernoulli::new(proportion).map_err(|e| {
            Error::Computation(format!("Failed to create Bernoulli distribution: {e}"))
        })?;
        let units = (0..size).map(|_| u8::from(dist.sample(rng))).collect();
        Self::from_units(units)
    }

    /// Synthetic population whose change proportion matches the
    /// `loss_area / total_area` ratio reported for a region
    pub fn from_area_statistics(size: usize, stats: &AreaStatistics) -> Result<Self> {
        Self::with_proportion(size, stats.change_proportion()?)
    }

    /// Number of units `N`
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false; populations are validated non-empty
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit values in population order
    pub fn units(&self) -> &[u8] {
        &self.units
    }

    /// Number of changed units
    pub fn changed_count(&self) -> usize {
        self.changed
    }

    /// True population proportion `sum(population) / N`
    pub fn true_proportion(&self) -> f64 {
        self.changed as f64 / self.units.len() as f64
    }
}

impl TryFrom<Vec<u8>> for Population {
    type Error = Error;

    fn try_from(units: Vec<u8>) -> Result<Self> {
        Self::from_units(units)
    }
}

impl From<Population> for Vec<u8> {
    fn from(population: Population) -> Self {
        population.units
    }
}

fn check_unit_interval(proportion: f64) -> Result<()> {
    if !proportion.is_finite() {
        return Err(Error::non_finite("proportion"));
    }
    if !(0.0..=1.0).contains(&proportion) {
        return Err(Error::InvalidInput(format!(
            "Proportion {proportion} must be in [0, 1]"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_from_units() {
        let pop = Population::from_units(vec![0, 1, 1, 0, 0]).unwrap();
        assert_eq!(pop.len(), 5);
        assert_eq!(pop.changed_count(), 2);
        assert_relative_eq!(pop.true_proportion(), 0.4);
    }

    #[test]
    fn test_rejects_non_binary() {
        let err = Population::from_units(vec![0, 1, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("Unit 2"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Population::from_units(vec![]).is_err());
        assert!(Population::with_proportion(0, 0.5).is_err());
    }

    #[test]
    fn test_with_proportion() {
        let pop = Population::with_proportion(62_500, 0.01).unwrap();
        assert_eq!(pop.len(), 62_500);
        assert_eq!(pop.changed_count(), 625);
        assert_eq!(pop.units()[0], CHANGED);
        assert_eq!(pop.units()[625], UNCHANGED);

        let all = Population::with_proportion(10, 1.0).unwrap();
        assert_eq!(all.changed_count(), 10);

        assert!(Population::with_proportion(10, 1.5).is_err());
        assert!(Population::with_proportion(10, f64::NAN).is_err());
    }

    #[test]
    fn test_bernoulli_is_reproducible() {
        let a = Population::bernoulli(1_000, 0.3, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = Population::bernoulli(1_000, 0.3, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert!((a.true_proportion() - 0.3).abs() < 0.06);
    }

    #[test]
    fn test_from_area_statistics() {
        let stats = AreaStatistics::new(25.0, 1_000.0);
        let pop = Population::from_area_statistics(400, &stats).unwrap();
        assert_eq!(pop.changed_count(), 10);
    }

    #[test]
    fn test_serde_round_trip() {
        let pop = Population::from_counts(2, 3).unwrap();
        let json = serde_json::to_string(&pop).unwrap();
        assert_eq!(json, "[1,1,0,0,0]");
        let back: Population = serde_json::from_str(&json).unwrap();
        assert_eq!(pop, back);
        assert_eq!(back.changed_count(), 2);
    }

    #[test]
    fn test_deserialize_validates_units() {
        assert!(serde_json::from_str::<Population>("[0,5]").is_err());
        assert!(serde_json::from_str::<Population>("[]").is_err());
        // The changed count is always derived from the units
        assert!(serde_json::from_str::<Population>(r#"{"units":[0,5],"changed":7}"#).is_err());
        assert!(serde_json::from_str::<Population>(r#"{"units":[0,1],"changed":7}"#).is_err());
    }
}
