//! Various histogram building strategies

use histobin_core::stats::{check_finite, min_max};
use histobin_core::{Error, Result};
use tracing::{debug, instrument};

use crate::rules::{BinRule, RuleOptions};
use crate::spec::BinSpec;
use crate::traits::HistogramBuilder;
use crate::types::Histogram;

/// Equal-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins. Without
/// an explicit range the bins span the sample's `[min, max]`.
#[derive(Debug, Clone)]
pub struct BinCountBuilder {
    num_bins: usize,
    range: Option<(f64, f64)>,
}

impl BinCountBuilder {
    /// Create a new equal-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins,
            range: None,
        }
    }

    /// Bin over `[min, max]` instead of the sample's own range
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }
}

impl HistogramBuilder for BinCountBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let (min, max) = match self.range {
            Some(range) => range,
            None => min_max(sample)?,
        };
        Histogram::from_spec(sample, &BinSpec::with_count(self.num_bins, min, max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Fixed-width histogram builder
///
/// Bins of `width` start at the lower bound of the range; the last bin is
/// stretched to end exactly at the upper bound.
#[derive(Debug, Clone)]
pub struct BinWidthBuilder {
    width: f64,
    range: Option<(f64, f64)>,
}

impl BinWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(width: f64) -> Self {
        Self { width, range: None }
    }

    /// Bin over `[first, last]` instead of the sample's own range
    pub fn with_range(mut self, first: f64, last: f64) -> Self {
        self.range = Some((first, last));
        self
    }
}

impl HistogramBuilder for BinWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let (first, last) = match self.range {
            Some(range) => range,
            None => min_max(sample)?,
        };
        Histogram::from_spec(sample, &BinSpec::with_width(self.width, first, last))
    }
}

/// Histogram builder over caller-supplied edges
#[derive(Debug, Clone)]
pub struct EdgesBuilder {
    edges: Vec<f64>,
}

impl EdgesBuilder {
    /// Create a builder for strictly increasing `edges`
    ///
    /// The edges are validated when the histogram is built.
    pub fn new(edges: Vec<f64>) -> Self {
        Self { edges }
    }
}

impl HistogramBuilder for EdgesBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        Histogram::from_spec(sample, &BinSpec::Edges(self.edges.clone()))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.edges.len().saturating_sub(1))
    }
}

/// Equal-width histogram whose bin count is chosen by a [`BinRule`]
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    rule: BinRule,
    options: RuleOptions,
}

impl RuleBuilder {
    /// Create a builder for `rule` with default options
    pub fn new(rule: BinRule) -> Self {
        Self {
            rule,
            options: RuleOptions::default(),
        }
    }

    /// Use explicit rule options
    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }
}

impl HistogramBuilder for RuleBuilder {
    #[instrument(skip(self, sample), fields(rule = %self.rule, n = sample.len()))]
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let num_bins = self.rule.bin_count_with(sample, &self.options)?;
        let (min, max) = min_max(sample)?;
        BinCountBuilder::new(num_bins)
            .with_range(min, max)
            .build(sample)
    }
}

impl HistogramBuilder for BinRule {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        RuleBuilder::new(*self).build(sample)
    }
}

/// Fixed-width histograms of several samples over one shared layout
///
/// The layout starts at the smallest value of all samples and ends at the
/// largest, so the bins of every histogram line up and no sample is
/// dropped. Empty samples are allowed as long as some sample has data.
#[instrument(skip(samples), fields(samples = samples.len()))]
pub fn aligned_histograms(samples: &[&[f64]], width: f64) -> Result<Vec<Histogram>> {
    for sample in samples {
        check_finite(sample, "sample")?;
    }

    let (global_min, global_max) = samples
        .iter()
        .filter(|sample| !sample.is_empty())
        .map(|sample| min_max(sample))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
        .ok_or_else(|| Error::empty_input("aligned_histograms"))?;

    let spec = BinSpec::with_width(width, global_min, global_max);
    debug!("Aligning histograms over [{global_min}, {global_max}] with width {width}");
    samples
        .iter()
        .map(|sample| Histogram::from_spec(sample, &spec))
        .collect()
}
