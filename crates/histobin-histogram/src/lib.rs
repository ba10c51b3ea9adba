//! Histogram binning with bin-count heuristics and normalized views
//!
//! This crate turns a sample of real-valued observations into bins and counts
//! and derives probability or density views from them. It is the computation
//! behind a plotted histogram; drawing the bars is left to the caller.
//!
//! # Key Features
//!
//! - **Three bin layouts**: equal-width by count, fixed width, explicit edges
//! - **Bin-count heuristics**: Sturges, square root, Scott, Freedman-Diaconis,
//!   integer-aware, and a combined automatic rule
//! - **Deterministic boundaries**: interior edges belong to the bin on their
//!   left, the outer edges are always counted
//! - **Normalized views**: probability (%) and probability density
//! - **Overlays**: aligned layouts for comparing differently sized samples
//!
//! # Examples
//!
//! ## Automatic Bin Selection
//!
//! ```rust
//! use histobin_histogram::{BinRule, HistogramBuilder};
//!
//! let data: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.01).sin()).collect();
//! let histogram = BinRule::Automatic.build(&data).unwrap();
//!
//! println!("{histogram}");
//! for bin in histogram.bins() {
//!     println!("  {bin}");
//! }
//! assert_eq!(histogram.retained(), data.len());
//! ```
//!
//! ## Custom Edges and Density
//!
//! ```rust
//! use histobin_histogram::edges_histogram;
//!
//! let data = vec![-3.0, -0.4, 0.0, 0.2, 0.25, 1.1, 4.0];
//! let edges = vec![-10.0, -1.0, 0.0, 0.25, 1.0, 10.0];
//! let histogram = edges_histogram(&data, &edges).unwrap();
//!
//! // 0.0 and 0.25 sit on interior edges and are counted to their left
//! assert_eq!(histogram.counts(), vec![1, 2, 2, 0, 2]);
//! assert!((histogram.density_area() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Overlaying Two Samples
//!
//! ```rust
//! use histobin_histogram::{aligned_histograms, HistogramOps};
//!
//! let a = [0.1, 0.2, 0.6, 0.7];
//! let b = [0.3, 0.6, 0.65, 0.8, 0.9, 0.95];
//! let hists = aligned_histograms(&[&a[..], &b[..]], 0.25).unwrap();
//!
//! let pa = hists[0].probability();
//! let pb = hists[1].probability();
//! assert_eq!(pa.len(), pb.len());
//! println!("overlap: {:.3}", hists[0].intersection(&hists[1]).unwrap());
//! ```

pub mod binning;
pub mod builders;
pub mod categorical;
pub mod normalize;
pub mod ops;
pub mod rules;
pub mod spec;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{
    aligned_histograms, BinCountBuilder, BinWidthBuilder, EdgesBuilder, RuleBuilder,
};
pub use categorical::CategoricalCounts;
pub use normalize::{Normalization, NormalizedView};
pub use ops::HistogramOps;
pub use rules::{BinRule, RuleOptions, MAX_BINS};
pub use spec::BinSpec;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use histobin_core::{Error, Result};

// Convenience functions
/// Create a histogram with a fixed number of equal-width bins over the sample range
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    BinCountBuilder::new(num_bins).build(data)
}

/// Create a histogram with bins of a fixed width over the sample range
pub fn width_histogram(data: &[f64], width: f64) -> Result<Histogram> {
    BinWidthBuilder::new(width).build(data)
}

/// Create a histogram over explicit edges
pub fn edges_histogram(data: &[f64], edges: &[f64]) -> Result<Histogram> {
    Histogram::with_edges(data, edges)
}

/// Create a histogram whose bin count is chosen by `rule`
pub fn rule_histogram(data: &[f64], rule: BinRule) -> Result<Histogram> {
    rule.build(data)
}

/// Create a histogram using the automatic rule
pub fn auto_histogram(data: &[f64]) -> Result<Histogram> {
    rule_histogram(data, BinRule::Automatic)
}
