//! Core types for finite-population sampling
//!
//! This crate provides the building blocks shared by the rest of the
//! workspace:
//!
//! - [`Population`]: a fixed-size collection of binary (changed/unchanged) units
//! - [`sample_without_replacement`]: uniform simple random sampling driven by
//!   a caller-supplied random source
//! - [`AreaStatistics`]: region-level changed/total areas used to derive an
//!   expected proportion
//! - [`Error`]: the error taxonomy for every sampling-stats crate
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use sampling_core::{sample_without_replacement, Population};
//!
//! let population = Population::with_proportion(10_000, 0.05).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let sample = sample_without_replacement(&population, 500, &mut rng).unwrap();
//! assert_eq!(sample.len(), 500);
//! println!("sample proportion: {:.4}", sample.proportion());
//! ```

pub mod area;
pub mod error;
pub mod population;
pub mod sampler;
pub mod utils;

pub use area::AreaStatistics;
pub use error::{check_confidence_level, check_proportion, Error, Result};
pub use population::{Population, CHANGED, UNCHANGED};
pub use sampler::{check_sample_size, sample_without_replacement, Sample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
