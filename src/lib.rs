//! Histogram binning toolkit
//!
//! Umbrella crate re-exporting the histobin workspace:
//!
//! - [`core`]: error types, sample statistics and seeded demo data
//! - [`histogram`]: bin layouts, bin-count heuristics, normalized views
//!
//! ```rust
//! use histobin::prelude::*;
//!
//! let data = [1.0, 2.0, 2.0, 3.0, 5.0];
//! let hist = BinRule::IntegerAware.build(&data).unwrap();
//! assert_eq!(hist.len(), 5);
//! assert_eq!(hist.counts().iter().sum::<usize>(), 5);
//! ```

pub use histobin_core as core;
pub use histobin_histogram as histogram;

pub use histobin_core::{Error, Result};

/// Commonly used types and traits
pub mod prelude {
    pub use histobin_core::stats::{quantile, quantiles};
    pub use histobin_core::{Error, Result};
    #[cfg(feature = "rand")]
    pub use histobin_core::NormalSampler;
    pub use histobin_histogram::{
        aligned_histograms, auto_histogram, edges_histogram, fixed_histogram, rule_histogram,
        width_histogram, BinRule, BinSpec, CategoricalCounts, Histogram, HistogramBin,
        HistogramBuilder, HistogramOps, Normalization, NormalizedView, RuleOptions,
    };
}
