//! Sample-size planning for proportion surveys
//!
//! This crate answers the two planning questions of simple random sampling:
//!
//! - How many units must be sampled so that the margin of error at a given
//!   confidence level does not exceed a target precision?
//!   ([`required_sample_size`], Cochran's formula)
//! - What margin of error does a given sample size buy?
//!   ([`margin_of_error`], the inverse formula)
//!
//! Precision is relative to the expected proportion by default. Use
//! [`SampleSizePlanner`] for absolute margins or to apply the finite
//! population adjustment.
//!
//! # Examples
//!
//! ```rust
//! use sampling_design::{margin_of_error, required_sample_size, MarginKind, SampleSizePlanner};
//!
//! // 10% relative precision at 95% confidence for a 50% proportion
//! let n = required_sample_size(0.1, 0.95, 0.5).unwrap();
//! assert!(margin_of_error(n, 0.95, 0.5).unwrap() <= 0.1);
//!
//! // Rare events need much larger samples at the same relative precision
//! assert!(required_sample_size(0.1, 0.95, 0.01).unwrap() > n);
//!
//! // Absolute half-width of 0.1
//! let planner = SampleSizePlanner::default().with_margin_kind(MarginKind::Absolute);
//! assert_eq!(planner.required_sample_size(0.1, 0.5).unwrap(), 97);
//! ```

mod cochran;
mod types;

pub use cochran::{margin_of_error, required_sample_size, SampleSizePlanner};
pub use types::MarginKind;

// Convenience constructor
pub fn planner(confidence_level: f64) -> sampling_core::Result<SampleSizePlanner> {
    SampleSizePlanner::new(confidence_level)
}
