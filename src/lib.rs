//! Bootstrap resampling estimates with standard errors and percentile
//! confidence intervals
//!
//! This crate re-exports the resample-stats workspace:
//!
//! - [`resample_core`]: error type and scalar numeric kernels
//! - [`resample_statistics`]: the `Statistic` capability and the five
//!   adapters (mean, median, standard deviation, proportion, percentile)
//! - [`resample_bootstrap`]: the resampling engine, result types, and the
//!   request API
//! - [`resample_histogram`]: histogram summaries for comparison charts
//!
//! # Examples
//!
//! ```rust
//! use resample_stats::{bootstrap_mean, comparison_histograms};
//!
//! let heights = vec![
//!     165.0, 170.0, 168.0, 172.0, 175.0, 169.0, 171.0, 167.0, 174.0, 173.0,
//! ];
//!
//! let result = bootstrap_mean(&heights, 1000).unwrap();
//! println!("{}", result.summary());
//!
//! // The two panels of a comparison chart:
//! let (original, bootstrap) = comparison_histograms(&result, 15).unwrap();
//! assert_eq!(original.total_count(), heights.len());
//! assert_eq!(bootstrap.total_count(), 1000);
//! ```

pub use resample_bootstrap::{
    bootstrap_mean, bootstrap_median, bootstrap_percentile, bootstrap_proportion,
    bootstrap_std_dev, percentile_interval, resample, resample_into, Bootstrap,
    BootstrapRequest, ConfidenceInterval, EstimateResult, DEFAULT_PERCENTILE_TARGET,
    DEFAULT_RESAMPLES, FAST_RESAMPLES, HIGH_PRECISION_RESAMPLES,
};
pub use resample_core::{math, Error, Result};
pub use resample_histogram::{
    fixed_histogram, scott_histogram, FixedWidthBuilder, Histogram, HistogramBin,
    HistogramBuilder, ScottsRule,
};
pub use resample_statistics::{
    Mean, Median, Percentile, Proportion, SampleStdDev, Statistic, StatisticDetail,
    StatisticKind,
};

/// Histograms for the two panels of a bootstrap comparison chart
///
/// Returns `(original_sample, bootstrap_distribution)` binned with the same
/// fixed bin count; the panels share a bin count, not bin edges, since the
/// distribution is usually far narrower than the sample.
pub fn comparison_histograms(
    result: &EstimateResult,
    num_bins: usize,
) -> Result<(Histogram, Histogram)> {
    let original = fixed_histogram(&result.original_sample, num_bins)?;
    let bootstrap = fixed_histogram(&result.bootstrap_distribution, num_bins)?;
    Ok((original, bootstrap))
}
