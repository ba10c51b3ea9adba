//! Assigning samples to bins
//!
//! Bin `i` covers `(edges[i], edges[i + 1]]`, except that the first bin also
//! holds `edges[0]`. A value sitting exactly on an interior edge is therefore
//! counted in the bin to its left, and a value equal to the last edge is
//! counted rather than dropped. Values outside `[edges[0], edges[last]]` are
//! dropped.

use tracing::debug;

/// Samples at or above this size are counted on the rayon pool
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Index of the bin `value` is counted in, or `None` when it is out of range
///
/// `edges` must be sorted ascending and hold at least two values. Runs a
/// binary search, `O(log bins)`.
pub fn locate_bin(edges: &[f64], value: f64) -> Option<usize> {
    if edges.len() < 2 {
        return None;
    }
    let (first, last) = (edges[0], edges[edges.len() - 1]);
    if !(value >= first && value <= last) {
        return None;
    }

    // Index of the first edge >= value. An exact hit on edge k > 0 belongs
    // to bin k - 1, and so does any value strictly inside bin k - 1.
    let upper = edges.partition_point(|&edge| edge < value);
    Some(upper.saturating_sub(1).min(edges.len() - 2))
}

/// Count how many values of `sample` fall in each bin of `edges`
pub fn count_into_bins(sample: &[f64], edges: &[f64]) -> Vec<usize> {
    let bins = edges.len().saturating_sub(1);

    #[cfg(feature = "parallel")]
    let counts = if sample.len() >= PARALLEL_THRESHOLD {
        debug!("Counting {} samples into {} bins in parallel", sample.len(), bins);
        count_parallel(sample, edges, bins)
    } else {
        count_sequential(sample, edges, bins)
    };

    #[cfg(not(feature = "parallel"))]
    let counts = count_sequential(sample, edges, bins);

    let retained: usize = counts.iter().sum();
    if retained < sample.len() {
        debug!(
            "Dropped {} of {} samples outside [{:?}, {:?}]",
            sample.len() - retained,
            sample.len(),
            edges.first(),
            edges.last()
        );
    }
    counts
}

fn count_sequential(sample: &[f64], edges: &[f64], bins: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bins];
    for &value in sample {
        if let Some(idx) = locate_bin(edges, value) {
            counts[idx] += 1;
        }
    }
    counts
}

#[cfg(feature = "parallel")]
fn count_parallel(sample: &[f64], edges: &[f64], bins: usize) -> Vec<usize> {
    use rayon::prelude::*;

    sample
        .par_iter()
        .fold(
            || vec![0usize; bins],
            |mut counts, &value| {
                if let Some(idx) = locate_bin(edges, value) {
                    counts[idx] += 1;
                }
                counts
            },
        )
        .reduce(
            || vec![0usize; bins],
            |mut acc, partial| {
                for (total, part) in acc.iter_mut().zip(partial) {
                    *total += part;
                }
                acc
            },
        )
}
