//! Walks through the binning engine on seeded demo data
//!
//! Run with: cargo run -p histobin-histogram --example binning_demo
//! Set `RUST_LOG=debug` to see rule fallbacks and dropped samples.

use anyhow::Result;
use histobin_core::NormalSampler;
use histobin_histogram::{
    aligned_histograms, edges_histogram, fixed_histogram, width_histogram, BinRule,
    CategoricalCounts, Histogram, HistogramBuilder, HistogramOps,
};
use statrs::distribution::{Continuous, Normal};
use tracing_subscriber::EnvFilter;

fn print_bins(hist: &Histogram, values: &[f64], label: &str) {
    for (bin, value) in hist.bins().iter().zip(values) {
        println!(
            "  [{:8.3}, {:8.3}]  count={:5}  {}={:.4}",
            bin.left, bin.right, bin.count, label, value
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let mut sampler = NormalSampler::seeded(0);
    let data = sampler.sample(10_000, 5.0, 2.0)?;

    // Example 1: fixed layouts
    println!("=== Fixed Layouts ===");
    let by_count = fixed_histogram(&data, 40)?;
    let by_width = width_histogram(&data, 0.5)?;
    println!("{by_count}");
    println!("{by_width}");

    // Example 2: every rule on the same sample
    println!("\n=== Bin-Count Rules ===");
    for rule in BinRule::ALL {
        let hist = rule.build(&data)?;
        println!(
            "  {:20} {:4} bins, width {:.4}",
            rule.name(),
            hist.len(),
            hist.first_bin_width()
        );
    }

    let dice: Vec<f64> = sampler
        .sample(500, 3.5, 1.2)?
        .into_iter()
        .map(|x| x.round().clamp(1.0, 6.0))
        .collect();
    let dice_hist = BinRule::IntegerAware.build(&dice)?;
    println!("  Integers rule on rounded data: {} bins", dice_hist.len());

    // Example 3: custom edges with unequal widths
    println!("\n=== Custom Edges ===");
    let edges = [-2.0, 2.0, 4.0, 4.5, 5.0, 5.5, 6.0, 8.0, 12.0];
    let custom = edges_histogram(&data, &edges)?;
    print_bins(&custom, custom.density().values(), "density");
    println!(
        "  dropped {} of {}, density area {:.4}",
        custom.dropped(),
        custom.sample_size(),
        custom.density_area()
    );

    // Example 4: overlaying samples of different sizes
    println!("\n=== Aligned Overlay ===");
    let small = sampler.sample(2_000, 0.0, 1.0)?;
    let large = sampler.sample(5_000, 0.5, 1.5)?;
    let overlay = aligned_histograms(&[&small[..], &large[..]], 0.25)?;
    let (a, b) = (&overlay[0], &overlay[1]);
    println!("  {a}");
    println!("  {b}");
    println!(
        "  intersection {:.4}, chi-squared distance {:.4}",
        a.intersection(b)?,
        a.chi_squared_distance(b)?
    );

    // Example 5: density against the generating PDF
    println!("\n=== Density vs PDF ===");
    let pdf = Normal::new(5.0, 2.0)?;
    let fine = width_histogram(&data, 0.25)?;
    println!(
        "  {} bins, max |density - pdf| = {:.4}",
        fine.len(),
        fine.max_density_deviation(|x| pdf.pdf(x))
    );

    // Example 6: categorical labels
    println!("\n=== Categorical Counts ===");
    let answers = ["yes", "no", "no", "undecided", "yes", "no", "yes", "no"];
    let categories = CategoricalCounts::from_labels(answers);
    for ((label, count), pct) in categories.iter().zip(categories.probability()) {
        println!("  {label:10} {count:3}  ({pct:.1}%)");
    }

    Ok(())
}
