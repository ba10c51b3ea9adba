//! Normalized views of histogram counts
//!
//! Views are recomputed from `(counts, widths, N)` on every call and never
//! change the histogram they were derived from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Histogram;

/// How bin counts are scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Normalization {
    /// Raw counts
    Count,
    /// Percentage of the sample, `100 * count / N`
    Probability,
    /// Probability density, `count / (N * width)`
    Density,
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Normalization::Count => "Count",
            Normalization::Probability => "Probability (%)",
            Normalization::Density => "Probability density",
        };
        f.write_str(label)
    }
}

/// One value per bin under a given [`Normalization`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedView {
    normalization: Normalization,
    values: Vec<f64>,
}

impl NormalizedView {
    /// The scaling these values were produced with
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Per-bin values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the histogram had no bins
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of the per-bin values
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Consume the view, returning its values
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// `100 * count_i / n`; all zeros when `n == 0`
pub fn probabilities(counts: &[usize], n: usize) -> Vec<f64> {
    if n == 0 {
        return vec![0.0; counts.len()];
    }
    let n = n as f64;
    counts.iter().map(|&c| 100.0 * c as f64 / n).collect()
}

/// `count_i / (n * width_i)`; zero for empty samples and zero-width bins
pub fn densities(counts: &[usize], widths: &[f64], n: usize) -> Vec<f64> {
    let n = n as f64;
    counts
        .iter()
        .zip(widths)
        .map(|(&c, &w)| {
            if n > 0.0 && w > 0.0 {
                c as f64 / (n * w)
            } else {
                0.0
            }
        })
        .collect()
}

impl Histogram {
    /// Values of every bin under `normalization`
    pub fn view(&self, normalization: Normalization) -> NormalizedView {
        let counts = self.counts();
        let values = match normalization {
            Normalization::Count => counts.iter().map(|&c| c as f64).collect(),
            Normalization::Probability => probabilities(&counts, self.sample_size()),
            Normalization::Density => densities(&counts, &self.widths(), self.sample_size()),
        };
        NormalizedView {
            normalization,
            values,
        }
    }

    /// Percentage of the sample in each bin
    pub fn probability(&self) -> NormalizedView {
        self.view(Normalization::Probability)
    }

    /// Probability density of each bin
    pub fn density(&self) -> NormalizedView {
        self.view(Normalization::Density)
    }

    /// Area under the density view, `sum(density_i * width_i)`
    ///
    /// Equals the retained fraction of the sample, so it is 1 when nothing was
    /// dropped and no bin has zero width.
    pub fn density_area(&self) -> f64 {
        self.density()
            .values()
            .iter()
            .zip(self.widths())
            .map(|(d, w)| d * w)
            .sum()
    }
}
