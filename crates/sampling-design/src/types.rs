//! Types for sample-size planning

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the precision passed to the planner is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarginKind {
    /// Margin of error as a fraction of the proportion itself, `e = precision × p`
    #[default]
    Relative,
    /// Margin of error in proportion units, `e = precision`
    Absolute,
}

impl MarginKind {
    /// Absolute half-width `e` for a precision and proportion
    pub fn absolute_margin(&self, precision: f64, proportion: f64) -> f64 {
        match self {
            Self::Relative => precision * proportion,
            Self::Absolute => precision,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }
}

impl fmt::Display for MarginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_margin() {
        assert!((MarginKind::Relative.absolute_margin(0.1, 0.5) - 0.05).abs() < 1e-15);
        assert_eq!(MarginKind::Absolute.absolute_margin(0.1, 0.5), 0.1);
        assert_eq!(MarginKind::default(), MarginKind::Relative);
        assert_eq!(MarginKind::Absolute.to_string(), "absolute");
    }
}
