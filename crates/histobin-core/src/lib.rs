//! Shared foundations for histogram binning
//!
//! This crate holds the pieces every other histobin crate leans on: the
//! unified [`Error`] type and the sample statistics (mean, population standard
//! deviation, linear-interpolation quantiles) used by the bin-count
//! heuristics. With the `rand` feature it also provides a seeded normal
//! sampler for generating demo data.
//!
//! # Example
//!
//! ```rust
//! use histobin_core::stats::{mean, quantile, std_dev};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(mean(&data).unwrap(), 2.5);
//! assert_eq!(quantile(&data, 0.5).unwrap(), 2.5);
//! assert!(std_dev(&data).unwrap() > 1.0);
//! ```

pub mod error;
pub mod stats;

#[cfg(feature = "rand")]
pub mod sampling;

pub use error::{Error, Result};

#[cfg(feature = "rand")]
pub use sampling::NormalSampler;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
