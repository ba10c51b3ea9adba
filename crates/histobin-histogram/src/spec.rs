//! Bin layouts: equal-count, fixed-width, and explicit edges

use histobin_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound on the number of bins a layout may resolve to
pub const MAX_LAYOUT_BINS: usize = 1_000_000;

/// Slack when dividing a range by a bin width, so that a range that is an
/// exact multiple of the width is not cut one bin short by rounding.
const WIDTH_STEP_SLACK: f64 = 1e-9;

/// How the value axis is divided into bins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BinSpec {
    /// `count` equal-width bins over `[min, max]`
    Count { count: usize, min: f64, max: f64 },
    /// Bins of `width` starting at `first`; the last bin stretches to `last`
    ///
    /// When `width` exceeds `last - first` the layout is the single bin
    /// `[first, last]`, narrower than `width`. Callers that need the nominal
    /// width on screen should widen the range themselves.
    Width { width: f64, first: f64, last: f64 },
    /// Explicit, strictly increasing edges (possibly unequal widths)
    Edges(Vec<f64>),
}

impl BinSpec {
    /// Equal-width bins over `[min, max]`
    pub fn with_count(count: usize, min: f64, max: f64) -> Self {
        Self::Count { count, min, max }
    }

    /// Fixed-width bins over `[first, last]`
    pub fn with_width(width: f64, first: f64, last: f64) -> Self {
        Self::Width { width, first, last }
    }

    /// Custom edges
    pub fn with_edges(edges: Vec<f64>) -> Self {
        Self::Edges(edges)
    }

    /// Validate the layout and compute its edge sequence
    ///
    /// A count or width layout over an empty range (`min == max`) resolves to
    /// the single zero-width bin `[min, min]`. Over any other range the
    /// resolved edges are strictly increasing, even where rounding would
    /// otherwise make neighbouring edges coincide.
    pub fn resolve_edges(&self) -> Result<Vec<f64>> {
        match self {
            Self::Count { count, min, max } => count_edges(*count, *min, *max),
            Self::Width { width, first, last } => width_edges(*width, *first, *last),
            Self::Edges(edges) => {
                validate_edges(edges)?;
                Ok(edges.clone())
            }
        }
    }

    /// Number of bins this layout resolves to
    pub fn bin_count(&self) -> Result<usize> {
        Ok(self.resolve_edges()?.len() - 1)
    }
}

fn check_range(lo: f64, hi: f64) -> Result<()> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(Error::InvalidInput(format!(
            "bin range [{lo}, {hi}] must be finite"
        )));
    }
    if lo > hi {
        return Err(Error::InvalidInput(format!(
            "bin range [{lo}, {hi}] is inverted"
        )));
    }
    Ok(())
}

fn check_layout_size(bins: usize) -> Result<()> {
    if bins > MAX_LAYOUT_BINS {
        return Err(Error::InvalidParameter(format!(
            "layout needs {bins} bins, more than the limit of {MAX_LAYOUT_BINS}"
        )));
    }
    Ok(())
}

fn count_edges(count: usize, min: f64, max: f64) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(Error::InvalidParameter(
            "bin count must be positive".to_string(),
        ));
    }
    check_layout_size(count)?;
    check_range(min, max)?;

    if min == max {
        return Ok(vec![min, max]);
    }

    let width = (max - min) / count as f64;
    let mut edges: Vec<f64> = (0..count).map(|i| min + i as f64 * width).collect();
    // Ensure last bin ends exactly at max
    edges.push(max);
    Ok(merge_collapsed_edges(edges))
}

fn width_edges(width: f64, first: f64, last: f64) -> Result<Vec<f64>> {
    if !(width.is_finite() && width > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "bin width must be positive and finite, got {width}"
        )));
    }
    check_range(first, last)?;

    if first == last {
        return Ok(vec![first, last]);
    }

    let steps = ((last - first) / width + WIDTH_STEP_SLACK).floor().max(1.0);
    if steps > MAX_LAYOUT_BINS as f64 {
        return Err(Error::InvalidParameter(format!(
            "bin width {width} over [{first}, {last}] exceeds the limit of {MAX_LAYOUT_BINS} bins"
        )));
    }

    let steps = steps as usize;
    let mut edges: Vec<f64> = (0..steps).map(|i| first + i as f64 * width).collect();
    // The final bin absorbs whatever remainder is left before `last`
    edges.push(last);
    Ok(merge_collapsed_edges(edges))
}

/// Drop generated edges that rounding pushed onto (or behind) their
/// predecessor, so a non-empty range never yields a zero-width bin.
///
/// Happens when the range is tiny next to the magnitude of its bounds, e.g.
/// `[1e16, 1e16 + 2]` split into many bins. The first and last edges survive.
fn merge_collapsed_edges(mut edges: Vec<f64>) -> Vec<f64> {
    let generated = edges.len();
    edges.dedup_by(|next, prev| *next <= *prev);
    if edges.len() < generated {
        debug!(
            "Merged {} collapsed edges over [{:?}, {:?}]",
            generated - edges.len(),
            edges.first(),
            edges.last()
        );
    }
    edges
}

/// Check that `edges` has at least two finite, strictly increasing values
pub fn validate_edges(edges: &[f64]) -> Result<()> {
    if edges.len() < 2 {
        return Err(Error::invalid_edges(format!(
            "need at least 2 edges, got {}",
            edges.len()
        )));
    }
    if let Some(index) = edges.iter().position(|e| !e.is_finite()) {
        return Err(Error::invalid_edges(format!(
            "edge {index} is {}",
            edges[index]
        )));
    }
    if let Some(index) = edges.windows(2).position(|pair| pair[0] >= pair[1]) {
        return Err(Error::invalid_edges(format!(
            "edges must be strictly increasing, but edge {} ({}) >= edge {} ({})",
            index,
            edges[index],
            index + 1,
            edges[index + 1]
        )));
    }
    check_layout_size(edges.len() - 1)
}
