//! Cochran's sample-size formula and its inverse
//!
//! For a critical value `z`, expected proportion `p` (`q = 1 - p`) and
//! absolute half-width `e`:
//!
//! ```text
//! n0 = z² p q / e²
//! ```
//!
//! With the default [`MarginKind::Relative`] interpretation `e = precision × p`,
//! so rare proportions need far larger samples than common ones. The inverse
//! gives the margin implied by a sample size:
//!
//! ```text
//! relative margin = z sqrt(p q / n / p²)
//! ```
//!
//! When a population size `N` is configured, the required size is shrunk by
//! the finite population adjustment `n = n0 / (1 + (n0 - 1) / N)` and the
//! margin is scaled by `sqrt((N - n) / (N - 1))`.

use crate::MarginKind;
use sampling_confidence::{critical_value, ConfidenceLevel};
use sampling_core::{check_proportion, AreaStatistics, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sample-size planner
///
/// Holds the confidence level, margin interpretation and optional
/// population size shared by the forward and inverse formulas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleSizePlanner {
    confidence_level: ConfidenceLevel,
    margin_kind: MarginKind,
    population_size: Option<usize>,
}

impl SampleSizePlanner {
    /// Create a planner at the given confidence level with a relative margin
    pub fn new(confidence_level: f64) -> Result<Self> {
        Ok(Self {
            confidence_level: ConfidenceLevel::new(confidence_level)?,
            ..Self::default()
        })
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Self {
        self.confidence_level = level;
        self
    }

    /// Set how precision is interpreted
    pub fn with_margin_kind(mut self, kind: MarginKind) -> Self {
        self.margin_kind = kind;
        self
    }

    /// Apply the finite population adjustment for a population of `size` units
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    pub fn margin_kind(&self) -> MarginKind {
        self.margin_kind
    }

    pub fn population_size(&self) -> Option<usize> {
        self.population_size
    }

    /// Minimum sample size whose margin of error does not exceed `precision`
    pub fn required_sample_size(&self, precision: f64, proportion: f64) -> Result<usize> {
        if !precision.is_finite() {
            return Err(Error::non_finite("precision"));
        }
        if precision <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Precision {precision} must be positive"
            )));
        }
        check_proportion(proportion)?;
        let population = self.checked_population_size()?;

        let z = critical_value(self.confidence_level)?;
        let e = self.margin_kind.absolute_margin(precision, proportion);
        let n0 = z * z * proportion * (1.0 - proportion) / (e * e);
        // Overflow in e² gives n0 = 0; tiny precisions give n0 past usize
        if !(n0 > 0.0 && n0 < usize::MAX as f64) {
            return Err(Error::Computation(format!(
                "Sample size for precision {precision} is not representable"
            )));
        }

        let n = match population {
            Some(size) => {
                let size = size as f64;
                (n0 / (1.0 + (n0 - 1.0) / size)).ceil().min(size)
            }
            None => n0.ceil(),
        };

        debug!(
            z,
            e,
            n0,
            n,
            kind = self.margin_kind.name(),
            "computed required sample size"
        );
        Ok(n as usize)
    }

    /// Margin of error implied by a sample of `sample_size` units
    ///
    /// Expressed relative to `proportion` unless the planner uses
    /// [`MarginKind::Absolute`].
    pub fn margin_of_error(&self, sample_size: usize, proportion: f64) -> Result<f64> {
        if sample_size == 0 {
            return Err(Error::InvalidSampleSize {
                requested: 0,
                reason: "margin of error needs at least one unit".to_string(),
            });
        }
        if !proportion.is_finite() {
            return Err(Error::non_finite("population proportion"));
        }
        if proportion <= 0.0 {
            return Err(Error::DegenerateProportion(proportion));
        }
        if proportion > 1.0 {
            return Err(Error::InvalidInput(format!(
                "Proportion {proportion} must be in (0, 1]"
            )));
        }
        let population = self.checked_population_size()?;
        if let Some(size) = population {
            if sample_size > size {
                return Err(Error::sample_size(sample_size, size));
            }
        }

        let z = critical_value(self.confidence_level)?;
        let pq = proportion * (1.0 - proportion);
        let n = sample_size as f64;
        let mut margin = match self.margin_kind {
            MarginKind::Relative => z * (pq / n / (proportion * proportion)).sqrt(),
            MarginKind::Absolute => z * (pq / n).sqrt(),
        };
        if let Some(size) = population {
            margin *= ((size - sample_size) as f64 / (size - 1) as f64).sqrt();
        }
        Ok(margin)
    }

    /// [`required_sample_size`](Self::required_sample_size) using the change
    /// proportion reported for a region
    pub fn required_sample_size_for_area(
        &self,
        precision: f64,
        stats: &AreaStatistics,
    ) -> Result<usize> {
        self.required_sample_size(precision, stats.change_proportion()?)
    }

    fn checked_population_size(&self) -> Result<Option<usize>> {
        match self.population_size {
            Some(size) if size < 2 => Err(Error::InvalidInput(format!(
                "Population size {size} must be at least 2"
            ))),
            other => Ok(other),
        }
    }
}

/// Cochran's required sample size for a relative precision
///
/// `precision` is a margin of error relative to `population_proportion`,
/// so `0.1` at `p = 0.5` asks for a half-width of `0.05`.
///
/// # Example
///
/// ```rust
/// use sampling_design::required_sample_size;
///
/// assert_eq!(required_sample_size(0.1, 0.95, 0.5).unwrap(), 385);
/// ```
pub fn required_sample_size(
    precision: f64,
    confidence_level: f64,
    population_proportion: f64,
) -> Result<usize> {
    SampleSizePlanner::new(confidence_level)?
        .required_sample_size(precision, population_proportion)
}

/// Relative margin of error implied by a sample size
///
/// # Example
///
/// ```rust
/// use sampling_design::margin_of_error;
///
/// let e = margin_of_error(385, 0.95, 0.5).unwrap();
/// assert!(e <= 0.1 && e > 0.099);
/// ```
pub fn margin_of_error(
    sample_size: usize,
    confidence_level: f64,
    population_proportion: f64,
) -> Result<f64> {
    SampleSizePlanner::new(confidence_level)?
        .margin_of_error(sample_size, population_proportion)
}
