//! Core types for histogram representation

use std::fmt;

use histobin_core::Result;
use serde::Serialize;

use crate::binning::{count_into_bins, locate_bin};
use crate::spec::BinSpec;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Left edge of the bin
    pub left: f64,
    /// Right edge of the bin (inclusive)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize) -> Self {
        Self { left, right, count }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}]: count={}",
            self.left, self.right, self.count
        )
    }
}

/// A histogram of a sample over contiguous bins
///
/// Interior edges belong to the bin on their left, the first edge belongs to
/// the first bin and the last edge to the last bin. Samples outside
/// `[edges[0], edges[last]]` are not counted but still contribute to
/// [`sample_size`](Self::sample_size), which is the `N` every normalized view
/// divides by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// The bins that make up the histogram
    bins: Vec<HistogramBin>,
    /// Number of observations in the binned sample, counted or not
    sample_size: usize,
}

impl Histogram {
    /// Build a histogram of `sample` over the bins described by `spec`
    ///
    /// Fails if the sample holds NaN or infinite values or if `spec` is
    /// malformed. An empty sample yields empty bins.
    pub fn from_spec(sample: &[f64], spec: &BinSpec) -> Result<Self> {
        histobin_core::stats::check_finite(sample, "sample")?;
        let edges = spec.resolve_edges()?;
        let counts = count_into_bins(sample, &edges);
        Ok(Self::from_edges_and_counts(&edges, counts, sample.len()))
    }

    /// Build a histogram of `sample` over explicit, strictly increasing edges
    pub fn with_edges(sample: &[f64], edges: &[f64]) -> Result<Self> {
        Self::from_spec(sample, &BinSpec::with_edges(edges.to_vec()))
    }

    pub(crate) fn from_edges_and_counts(
        edges: &[f64],
        counts: Vec<usize>,
        sample_size: usize,
    ) -> Self {
        let bins = edges
            .windows(2)
            .zip(counts)
            .map(|(pair, count)| HistogramBin::new(pair[0], pair[1], count))
            .collect();
        Self { bins, sample_size }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of observations in the binned sample (`N`)
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Number of observations that landed in some bin
    pub fn retained(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Number of observations outside the outer edges
    pub fn dropped(&self) -> usize {
        self.sample_size - self.retained()
    }

    /// Lowest edge
    pub fn min(&self) -> f64 {
        self.bins.first().map_or(0.0, |bin| bin.left)
    }

    /// Highest edge
    pub fn max(&self) -> f64 {
        self.bins.last().map_or(0.0, |bin| bin.right)
    }

    /// Get the range covered by the bins
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// Width of the first bin, the nominal width of fixed-width histograms
    pub fn first_bin_width(&self) -> f64 {
        self.bins.first().map_or(0.0, HistogramBin::width)
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Find which bin a value would be counted in
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        locate_bin(&self.edges(), value)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(HistogramBin::center).collect()
    }

    /// Get bin widths as a vector
    pub fn widths(&self) -> Vec<f64> {
        self.bins.iter().map(HistogramBin::width).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let Some(last) = self.bins.last() else {
            return vec![];
        };

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        edges.extend(self.bins.iter().map(|bin| bin.left));
        edges.push(last.right);
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.sample_size,
            self.min(),
            self.max()
        )
    }
}
