//! Bin-count heuristics
//!
//! Every rule maps a non-empty sample to a bin count clamped to
//! `[1, max_bins]` (500 by default). Degenerate samples never fail: constant
//! data and single observations resolve to documented fallbacks instead.

use std::fmt;
use std::str::FromStr;

use histobin_core::stats::{min_max, quantile_sorted, sorted, std_dev, validate_sample};
use histobin_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default upper bound on the bin count returned by any rule
pub const MAX_BINS: usize = 500;

/// Default distance from an integer under which a value counts as integral
pub const INTEGER_TOLERANCE: f64 = 1e-9;

/// Tunable limits shared by all rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Largest bin count a rule may return
    pub max_bins: usize,
    /// Tolerance used by the integer-aware rule
    pub integer_tolerance: f64,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            max_bins: MAX_BINS,
            integer_tolerance: INTEGER_TOLERANCE,
        }
    }
}

impl RuleOptions {
    /// Check that the options describe a usable configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_bins == 0 {
            return Err(Error::InvalidParameter(
                "max_bins must be at least 1".to_string(),
            ));
        }
        if !(self.integer_tolerance.is_finite() && self.integer_tolerance >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "integer_tolerance must be finite and non-negative, got {}",
                self.integer_tolerance
            )));
        }
        Ok(())
    }

    fn clamp(&self, raw: f64) -> usize {
        if raw.is_nan() {
            return 1;
        }
        raw.clamp(1.0, self.max_bins as f64) as usize
    }
}

/// Named rule for choosing the number of equal-width bins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BinRule {
    /// `ceil(log2(n) + 1)`
    Sturges,
    /// `ceil(sqrt(n))`
    SquareRoot,
    /// Width `3.5 * sigma / n^(1/3)`
    Scott,
    /// Width `2 * IQR / n^(1/3)`
    FreedmanDiaconis,
    /// One bin per integer when the data is integral, Sturges otherwise
    IntegerAware,
    /// The larger of Freedman-Diaconis and Sturges
    Automatic,
}

impl BinRule {
    /// Every rule, in the order they are usually compared
    pub const ALL: [BinRule; 6] = [
        BinRule::Automatic,
        BinRule::Scott,
        BinRule::FreedmanDiaconis,
        BinRule::IntegerAware,
        BinRule::Sturges,
        BinRule::SquareRoot,
    ];

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            BinRule::Sturges => "Sturges' rule",
            BinRule::SquareRoot => "Square root rule",
            BinRule::Scott => "Scott's rule",
            BinRule::FreedmanDiaconis => "Freedman-Diaconis",
            BinRule::IntegerAware => "Integers rule",
            BinRule::Automatic => "Automatic",
        }
    }

    /// Recommended bin count using the default [`RuleOptions`]
    pub fn bin_count(&self, sample: &[f64]) -> Result<usize> {
        self.bin_count_with(sample, &RuleOptions::default())
    }

    /// Recommended bin count using explicit options
    pub fn bin_count_with(&self, sample: &[f64], options: &RuleOptions) -> Result<usize> {
        options.validate()?;
        validate_sample(sample, self.name())?;

        let count = match self {
            BinRule::Sturges => sturges_count(sample.len(), options),
            BinRule::SquareRoot => sqrt_count(sample.len(), options),
            BinRule::Scott => scott_count(sample, options)?,
            BinRule::FreedmanDiaconis => freedman_diaconis_count(sample, options)?,
            BinRule::IntegerAware => integer_count(sample, options),
            BinRule::Automatic => automatic_count(sample, options)?,
        };
        debug!("{} chose {} bins for n={}", self.name(), count, sample.len());
        Ok(count)
    }

    /// Equal bin width implied by this rule over the sample's range
    ///
    /// Zero for constant data.
    pub fn bin_width(&self, sample: &[f64]) -> Result<f64> {
        let count = self.bin_count(sample)?;
        let (min, max) = min_max(sample)?;
        Ok((max - min) / count as f64)
    }
}

impl fmt::Display for BinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BinRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sturges" => Ok(BinRule::Sturges),
            "sqrt" | "square-root" | "squareroot" => Ok(BinRule::SquareRoot),
            "scott" => Ok(BinRule::Scott),
            "fd" | "freedman-diaconis" | "freedmandiaconis" => Ok(BinRule::FreedmanDiaconis),
            "integer" | "integers" | "integer-aware" => Ok(BinRule::IntegerAware),
            "auto" | "automatic" => Ok(BinRule::Automatic),
            other => Err(Error::InvalidParameter(format!("unknown bin rule '{other}'"))),
        }
    }
}

/// Sturges' rule, `ceil(log2(n) + 1)`
pub fn sturges(sample: &[f64]) -> Result<usize> {
    BinRule::Sturges.bin_count(sample)
}

/// Square-root rule, `ceil(sqrt(n))`
pub fn square_root(sample: &[f64]) -> Result<usize> {
    BinRule::SquareRoot.bin_count(sample)
}

/// Scott's rule
pub fn scott(sample: &[f64]) -> Result<usize> {
    BinRule::Scott.bin_count(sample)
}

/// Freedman-Diaconis rule
pub fn freedman_diaconis(sample: &[f64]) -> Result<usize> {
    BinRule::FreedmanDiaconis.bin_count(sample)
}

/// Integer-aware rule
pub fn integer_aware(sample: &[f64]) -> Result<usize> {
    BinRule::IntegerAware.bin_count(sample)
}

/// Combined rule, `max(Freedman-Diaconis, Sturges)`
pub fn automatic(sample: &[f64]) -> Result<usize> {
    BinRule::Automatic.bin_count(sample)
}

// The helpers below assume a validated, non-empty, finite sample.

fn sturges_count(n: usize, options: &RuleOptions) -> usize {
    let n = n.max(1) as f64;
    options.clamp((n.log2() + 1.0).ceil())
}

fn sqrt_count(n: usize, options: &RuleOptions) -> usize {
    let n = n.max(1) as f64;
    options.clamp(n.sqrt().ceil())
}

fn cube_root_of_len(n: usize) -> f64 {
    (n as f64).powf(1.0 / 3.0)
}

fn scott_count(sample: &[f64], options: &RuleOptions) -> Result<usize> {
    let n = sample.len();
    if n < 2 {
        return Ok(1);
    }

    let sigma = std_dev(sample)?;
    let h = 3.5 * sigma / cube_root_of_len(n);
    if h <= 0.0 {
        debug!("Scott's rule: zero spread, using a single bin");
        return Ok(1);
    }

    let (min, max) = min_max(sample)?;
    Ok(options.clamp(((max - min) / h).ceil()))
}

fn freedman_diaconis_count(sample: &[f64], options: &RuleOptions) -> Result<usize> {
    let n = sample.len();
    if n < 2 {
        return Ok(1);
    }

    let sorted = sorted(sample);
    let q1 = quantile_sorted(&sorted, 0.25)?;
    let q3 = quantile_sorted(&sorted, 0.75)?;
    let iqr = q3 - q1;

    if iqr <= 0.0 {
        debug!("Freedman-Diaconis: IQR is {iqr}, falling back to Sturges' rule");
        return Ok(sturges_count(n, options));
    }

    let h = 2.0 * iqr / cube_root_of_len(n);
    if h <= 0.0 {
        return Ok(1);
    }

    let range = sorted[n - 1] - sorted[0];
    Ok(options.clamp((range / h).ceil()))
}

fn integer_count(sample: &[f64], options: &RuleOptions) -> usize {
    let tol = options.integer_tolerance;
    let integer_like = sample.iter().all(|v| (v - v.round()).abs() < tol);
    if !integer_like {
        debug!("Integers rule: non-integral data, falling back to Sturges' rule");
        return sturges_count(sample.len(), options);
    }

    let (min, max) = sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    options.clamp(max.ceil() - min.floor() + 1.0)
}

fn automatic_count(sample: &[f64], options: &RuleOptions) -> Result<usize> {
    let fd = freedman_diaconis_count(sample, options)?;
    let st = sturges_count(sample.len(), options);
    Ok(options.clamp(fd.max(st) as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sturges() {
        let data: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        assert_eq!(sturges(&data).unwrap(), 11);
        assert_eq!(sturges(&[1.0]).unwrap(), 1);
        assert_eq!(sturges(&[1.0, 2.0]).unwrap(), 2);
    }

    #[test]
    fn test_square_root() {
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        assert_eq!(square_root(&data).unwrap(), 10);
        assert_eq!(square_root(&data[..99]).unwrap(), 10);
        assert_eq!(square_root(&[0.0; 10]).unwrap(), 4);
    }

    #[test]
    fn test_scott() {
        // sigma of 0..=9 is sqrt(8.25), h = 3.5 * 2.8723 / 10^(1/3) = 4.666
        let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert_eq!(scott(&data).unwrap(), 2);
    }

    #[test]
    fn test_scott_degenerate() {
        assert_eq!(scott(&[4.0]).unwrap(), 1);
        assert_eq!(scott(&[4.0, 4.0, 4.0]).unwrap(), 1);
    }

    #[test]
    fn test_freedman_diaconis() {
        // IQR of 0..=99 is 49.5, h = 99 / 100^(1/3) = 21.33, range 99
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        assert_eq!(freedman_diaconis(&data).unwrap(), 5);
    }

    #[test]
    fn test_freedman_diaconis_zero_iqr_falls_back() {
        let data = [5.0, 5.0, 5.0, 5.0, 5.0];
        assert_eq!(freedman_diaconis(&data).unwrap(), sturges(&data).unwrap());
        assert_eq!(freedman_diaconis(&data).unwrap(), 4);

        // Mostly constant with outliers: IQR still zero
        let spiky = [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 50.0];
        assert_eq!(freedman_diaconis(&spiky).unwrap(), sturges(&spiky).unwrap());
    }

    #[test]
    fn test_freedman_diaconis_single_value() {
        assert_eq!(freedman_diaconis(&[3.0]).unwrap(), 1);
    }

    #[test]
    fn test_integer_aware() {
        assert_eq!(integer_aware(&[1.0, 2.0, 2.0, 3.0, 5.0]).unwrap(), 5);
        assert_eq!(integer_aware(&[-2.0, 2.0]).unwrap(), 5);
        assert_eq!(integer_aware(&[7.0]).unwrap(), 1);
    }

    #[test]
    fn test_integer_aware_tolerance() {
        assert_eq!(integer_aware(&[1.0 + 1e-12, 4.0]).unwrap(), 4);
        // Not integral: falls back to Sturges for n = 3
        assert_eq!(integer_aware(&[1.0, 2.5, 4.0]).unwrap(), 3);
    }

    #[test]
    fn test_integer_aware_is_clamped() {
        assert_eq!(integer_aware(&[0.0, 10_000.0]).unwrap(), MAX_BINS);
    }

    #[test]
    fn test_automatic_prefers_larger() {
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        // FD gives 5, Sturges gives 8
        assert_eq!(automatic(&data).unwrap(), 8);

        let constant = [2.0; 16];
        assert_eq!(automatic(&constant).unwrap(), 5);
    }

    #[test]
    fn test_empty_and_non_finite_rejected() {
        for rule in BinRule::ALL {
            assert!(matches!(
                rule.bin_count(&[]),
                Err(Error::InsufficientData { .. })
            ));
            assert!(matches!(
                rule.bin_count(&[1.0, f64::NAN]),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_huge_range_is_clamped() {
        let data = [-1e308, 1e308, 0.0, 1.0];
        for rule in BinRule::ALL {
            let count = rule.bin_count(&data).unwrap();
            assert!((1..=MAX_BINS).contains(&count), "{rule}: {count}");
        }
    }

    #[test]
    fn test_options() {
        let data: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let options = RuleOptions { max_bins: 4, ..Default::default() };
        assert_eq!(BinRule::Sturges.bin_count_with(&data, &options).unwrap(), 4);

        let bad = RuleOptions { max_bins: 0, ..Default::default() };
        assert!(BinRule::Sturges.bin_count_with(&data, &bad).is_err());

        let bad = RuleOptions { integer_tolerance: f64::NAN, ..Default::default() };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: RuleOptions = serde_json::from_str(r#"{"max_bins": 64}"#).unwrap();
        assert_eq!(options.max_bins, 64);
        assert_eq!(options.integer_tolerance, INTEGER_TOLERANCE);
    }

    #[test]
    fn test_bin_width() {
        let data: Vec<f64> = (0..=10).map(|i| i as f64).collect();
        let count = BinRule::Sturges.bin_count(&data).unwrap();
        assert_eq!(BinRule::Sturges.bin_width(&data).unwrap(), 10.0 / count as f64);
        assert_eq!(BinRule::Scott.bin_width(&[1.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("fd".parse::<BinRule>().unwrap(), BinRule::FreedmanDiaconis);
        assert_eq!("Auto".parse::<BinRule>().unwrap(), BinRule::Automatic);
        assert_eq!(" sqrt ".parse::<BinRule>().unwrap(), BinRule::SquareRoot);
        assert!("doane".parse::<BinRule>().is_err());
        assert_eq!(BinRule::Scott.to_string(), "Scott's rule");
        assert_eq!(
            serde_json::to_string(&BinRule::FreedmanDiaconis).unwrap(),
            "\"freedman-diaconis\""
        );
    }
}
