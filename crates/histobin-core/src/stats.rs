//! Sample statistics used by the bin-count heuristics
//!
//! Every function here validates its input: an empty sample is reported as
//! [`Error::InsufficientData`] and a NaN or infinite value as
//! [`Error::InvalidInput`]. The caller's slice is never reordered; sorting
//! always happens on a private copy.

use crate::error::{Error, Result};

/// Reject samples holding NaN or infinite values
pub fn check_finite(sample: &[f64], context: &str) -> Result<()> {
    match sample.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(Error::non_finite(context, index, sample[index])),
        None => Ok(()),
    }
}

/// Reject empty samples and samples holding non-finite values
pub fn validate_sample(sample: &[f64], operation: &str) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_input(operation));
    }
    check_finite(sample, operation)
}

/// Sort data and return a new vector
///
/// # Examples
///
/// ```rust
/// use histobin_core::stats::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Smallest and largest value of a sample
pub fn min_max(sample: &[f64]) -> Result<(f64, f64)> {
    validate_sample(sample, "min_max")?;
    Ok(sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        }))
}

/// Arithmetic mean
///
/// # Examples
///
/// ```rust
/// use histobin_core::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(sample: &[f64]) -> Result<f64> {
    validate_sample(sample, "mean")?;
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Population standard deviation, `sqrt(mean((x - mean)^2))`
///
/// Not sample-corrected: a single observation has a deviation of zero.
pub fn std_dev(sample: &[f64]) -> Result<f64> {
    let m = mean(sample)?;
    let variance = sample
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / sample.len() as f64;
    Ok(variance.sqrt())
}

/// Linear-interpolation quantile of already sorted data
///
/// Interpolates between the two order statistics around the fractional rank
/// `p * (n - 1)`. Finiteness of `sorted` is the caller's responsibility.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }
    if sorted.is_empty() {
        return Err(Error::empty_input("quantile"));
    }
    if sorted.len() == 1 {
        return Ok(sorted[0]);
    }

    let pos = (sorted.len() - 1) as f64 * p;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }

    let frac = pos - lo as f64;
    Ok(sorted[lo] * (1.0 - frac) + sorted[hi] * frac)
}

/// Linear-interpolation quantile, `p` in `[0, 1]`
///
/// # Examples
///
/// ```rust
/// use histobin_core::stats::quantile;
///
/// assert_eq!(quantile(&[4.0, 1.0, 3.0, 2.0], 0.5).unwrap(), 2.5);
/// ```
pub fn quantile(sample: &[f64], p: f64) -> Result<f64> {
    validate_sample(sample, "quantile")?;
    quantile_sorted(&sorted(sample), p)
}

/// Several quantiles of one sample, sorting it only once
pub fn quantiles(sample: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
    validate_sample(sample, "quantiles")?;
    if let Some(&bad) = ps.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        return Err(Error::invalid_quantile(bad));
    }
    let sorted = sorted(sample);
    ps.iter().map(|&p| quantile_sorted(&sorted, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(data, original);
    }

    #[test]
    fn test_sorted_negative_numbers() {
        assert_eq!(sorted(&[3.0, -1.0, 0.0, -5.0, 2.0]), vec![-5.0, -1.0, 0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
        assert_eq!(mean(&[-10.0, 10.0]).unwrap(), 0.0);
        assert_eq!(mean(&[42.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_mean_empty_is_rejected() {
        assert!(matches!(
            mean(&[]),
            Err(Error::InsufficientData { expected: 1, actual: 0 })
        ));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(matches!(mean(&[1.0, f64::NAN]), Err(Error::InvalidInput(_))));
        assert!(matches!(std_dev(&[f64::INFINITY]), Err(Error::InvalidInput(_))));
        assert!(matches!(
            quantile(&[1.0, f64::NEG_INFINITY], 0.5),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_std_dev_is_population() {
        // Population variance of 1..=5 is 2, not the corrected 2.5
        let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_relative_eq!(sd, std::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_std_dev_degenerate() {
        assert_eq!(std_dev(&[42.0]).unwrap(), 0.0);
        assert_eq!(std_dev(&[5.0, 5.0, 5.0, 5.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_std_dev_large_offset() {
        let sd = std_dev(&[1e10, 1e10 + 1.0, 1e10 + 2.0]).unwrap();
        assert_relative_eq!(sd, (2.0f64 / 3.0).sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_quantile_median() {
        assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.5).unwrap(), 3.0);
        assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.5).unwrap(), 2.5);
    }

    #[test]
    fn test_quantile_extremes() {
        let data = [7.0, -3.0, 12.0, 0.5];
        assert_eq!(quantile(&data, 0.0).unwrap(), -3.0);
        assert_eq!(quantile(&data, 1.0).unwrap(), 12.0);
    }

    #[test]
    fn test_quantile_single_value() {
        for p in [0.0, 0.3, 1.0] {
            assert_eq!(quantile(&[9.5], p).unwrap(), 9.5);
        }
    }

    #[test]
    fn test_quantile_interpolation() {
        // rank 0.25 * 4 = 1.0 lands exactly, rank 0.1 * 4 = 0.4 interpolates
        let data = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(quantile(&data, 0.25).unwrap(), 20.0);
        assert_relative_eq!(quantile(&data, 0.1).unwrap(), 14.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quantile_out_of_range() {
        assert!(matches!(quantile(&[1.0, 2.0], 1.5), Err(Error::InvalidParameter(_))));
        assert!(matches!(quantile(&[1.0, 2.0], -0.1), Err(Error::InvalidParameter(_))));
        assert!(matches!(quantile(&[1.0, 2.0], f64::NAN), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_quantiles_batch_matches_single() {
        let data = [3.0, 9.0, 1.0, 4.0, 7.0, 2.0];
        let ps = [0.25, 0.5, 0.75];
        let batch = quantiles(&data, &ps).unwrap();
        for (q, &p) in batch.iter().zip(&ps) {
            assert_eq!(*q, quantile(&data, p).unwrap());
        }
        assert!(quantiles(&data, &[0.5, 2.0]).is_err());
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3.0, -1.0, 8.0]).unwrap(), (-1.0, 8.0));
        assert!(min_max(&[]).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn quantile_stays_within_range(
                data in prop::collection::vec(-1e6f64..1e6, 1..200),
                p in 0.0f64..=1.0
            ) {
                let (lo, hi) = min_max(&data).unwrap();
                let q = quantile(&data, p).unwrap();
                prop_assert!(q >= lo - 1e-9 && q <= hi + 1e-9);
            }

            #[test]
            fn quantile_is_monotone_in_p(
                data in prop::collection::vec(-1e3f64..1e3, 1..100),
                a in 0.0f64..=1.0,
                b in 0.0f64..=1.0
            ) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(quantile(&data, lo).unwrap() <= quantile(&data, hi).unwrap() + 1e-9);
            }
        }
    }
}
