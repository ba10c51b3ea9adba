//! Operations on histograms
//!
//! Comparisons work on histograms that share their edges, which is what
//! [`aligned_histograms`](crate::builders::aligned_histograms) produces.
//! Bins are compared as fractions of each histogram's own sample size, so
//! samples of different sizes compare by shape alone.

use histobin_core::{Error, Result};

use crate::types::Histogram;

/// Operations that can be performed on histograms
pub trait HistogramOps {
    /// Overlap of the two distributions, in `[0, 1]`
    fn intersection(&self, other: &Self) -> Result<f64>;

    /// Symmetric chi-squared distance, `0.5 * sum((p - q)^2 / (p + q))`
    fn chi_squared_distance(&self, other: &Self) -> Result<f64>;

    /// Largest absolute gap between the density view and `pdf` at bin centers
    fn max_density_deviation<F>(&self, pdf: F) -> f64
    where
        F: Fn(f64) -> f64;
}

impl HistogramOps for Histogram {
    fn intersection(&self, other: &Self) -> Result<f64> {
        let (p, q) = aligned_fractions(self, other)?;
        Ok(p.iter().zip(&q).map(|(a, b)| a.min(*b)).sum())
    }

    fn chi_squared_distance(&self, other: &Self) -> Result<f64> {
        let (p, q) = aligned_fractions(self, other)?;
        let sum: f64 = p
            .iter()
            .zip(&q)
            .map(|(a, b)| {
                let total = a + b;
                if total > 0.0 {
                    (a - b).powi(2) / total
                } else {
                    0.0
                }
            })
            .sum();
        Ok(sum * 0.5)
    }

    fn max_density_deviation<F>(&self, pdf: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        self.density()
            .values()
            .iter()
            .zip(self.centers())
            .map(|(density, center)| (density - pdf(center)).abs())
            .fold(0.0, f64::max)
    }
}

// Helper functions

fn aligned_fractions(a: &Histogram, b: &Histogram) -> Result<(Vec<f64>, Vec<f64>)> {
    if a.edges() != b.edges() {
        return Err(Error::InvalidInput(format!(
            "histograms do not share bin edges ({} vs {} bins)",
            a.len(),
            b.len()
        )));
    }
    Ok((fractions(a), fractions(b)))
}

fn fractions(hist: &Histogram) -> Vec<f64> {
    hist.bins()
        .iter()
        .map(|bin| bin.frequency(hist.sample_size()))
        .collect()
}
