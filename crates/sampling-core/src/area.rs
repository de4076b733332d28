//! Area statistics reported for a region by an external geospatial service

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Changed and total area for a region over a period
///
/// Only the derived [`change_proportion`](Self::change_proportion) is used
/// by the sampling code, as the expected proportion for sample-size planning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaStatistics {
    /// Area that changed (e.g. forest loss) over the period
    pub loss_area: f64,
    /// Total area of the region
    pub total_area: f64,
}

impl AreaStatistics {
    pub fn new(loss_area: f64, total_area: f64) -> Self {
        Self {
            loss_area,
            total_area,
        }
    }

    /// `loss_area / total_area`
    pub fn change_proportion(&self) -> Result<f64> {
        if !self.loss_area.is_finite() || !self.total_area.is_finite() {
            return Err(Error::non_finite("area statistics"));
        }
        if self.total_area <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Total area {} must be positive",
                self.total_area
            )));
        }
        if self.loss_area < 0.0 || self.loss_area > self.total_area {
            return Err(Error::InvalidInput(format!(
                "Loss area {} must be within [0, {}]",
                self.loss_area, self.total_area
            )));
        }
        Ok(self.loss_area / self.total_area)
    }
}
