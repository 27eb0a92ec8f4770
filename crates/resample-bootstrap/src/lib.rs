//! Bootstrap resampling engine
//!
//! This crate estimates the sampling distribution of a statistic by drawing
//! many resamples with replacement from an observed sample, re-computing the
//! statistic per resample, and summarizing the resulting distribution:
//!
//! - **bootstrap mean**: mean of the distribution,
//! - **standard error**: population standard deviation of the distribution,
//! - **percentile confidence intervals**: the [2.5, 97.5] pair for 95%,
//!   the [5, 95] pair for 90%.
//!
//! # Overview
//!
//! The engine is a pure computation: one call consumes a sample and a
//! resample count and returns an [`EstimateResult`] snapshot. It is generic
//! over the [`Statistic`](resample_statistics::Statistic) capability, so
//! mean, median, standard deviation, proportion, and percentile estimates
//! all share one resampling loop.
//!
//! # Examples
//!
//! ```rust
//! use resample_bootstrap::{bootstrap_percentile, Bootstrap};
//! use resample_statistics::Median;
//!
//! let salaries = vec![
//!     25_000.0, 28_000.0, 30_000.0, 32_000.0, 35_000.0, 38_000.0, 40_000.0,
//!     45_000.0, 50_000.0, 55_000.0, 60_000.0, 70_000.0, 85_000.0, 120_000.0,
//! ];
//!
//! let result = Bootstrap::new()
//!     .with_resamples(1000)
//!     .with_seed(42)
//!     .run(&salaries, &Median)
//!     .unwrap();
//!
//! println!("{}", result.summary());
//! assert!(result.ci_95.contains(result.original_statistic));
//!
//! // Or through the one-call API:
//! let scores = vec![65.0, 70.0, 72.0, 75.0, 78.0, 80.0, 82.0, 84.0, 85.0, 87.0];
//! let p90 = bootstrap_percentile(&scores, 90.0, 1000).unwrap();
//! assert!((p90.original_statistic - 85.2).abs() < 1e-12);
//! ```
//!
//! # Determinism
//!
//! By default the base seed comes from the thread generator and results vary
//! run to run. [`Bootstrap::with_seed`] pins it; each of the B iterations
//! then derives its own generator from the base seed, so seeded runs are
//! reproducible even under the `parallel` feature.

mod api;
mod engine;
mod resampler;
mod types;

pub use api::{
    bootstrap_mean, bootstrap_median, bootstrap_percentile, bootstrap_proportion,
    bootstrap_std_dev, BootstrapRequest, DEFAULT_PERCENTILE_TARGET, DEFAULT_RESAMPLES,
    FAST_RESAMPLES, HIGH_PRECISION_RESAMPLES,
};
pub use engine::{percentile_interval, Bootstrap};
pub use resampler::{resample, resample_into};
pub use types::{ConfidenceInterval, EstimateResult};

pub use resample_core::{Error, Result};
