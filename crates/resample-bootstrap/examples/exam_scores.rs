//! Bootstrap the 90th percentile of exam scores

use resample_bootstrap::{bootstrap_percentile, HIGH_PRECISION_RESAMPLES};

fn main() {
    let scores = vec![
        65.0, 70.0, 72.0, 75.0, 78.0, 80.0, 82.0, 84.0, 85.0, 87.0, 88.0, 89.0, 90.0, 91.0,
        92.0, 93.0, 94.0, 95.0, 96.0, 97.0, 98.0, 85.0, 88.0, 91.0, 93.0, 76.0, 79.0, 81.0,
        83.0, 86.0,
    ];

    let result =
        bootstrap_percentile(&scores, 90.0, HIGH_PRECISION_RESAMPLES).expect("valid sample");

    println!("{}", result.summary());
    println!(
        "distribution spans [{:.1}, {:.1}] over {} resamples",
        result
            .bootstrap_distribution
            .iter()
            .cloned()
            .fold(f64::INFINITY, f64::min),
        result
            .bootstrap_distribution
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max),
        result.n_resamples
    );
}
