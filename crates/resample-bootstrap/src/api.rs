//! High-level API consumed by presentation layers
//!
//! [`BootstrapRequest`] mirrors the calling contract a UI hands over
//! (sample, resample count, statistic tag, percentile target), and the five
//! one-call wrappers cover the common statistics directly.

use crate::engine::Bootstrap;
use crate::types::EstimateResult;
use resample_core::Result;
use resample_statistics::StatisticKind;
use serde::{Deserialize, Serialize};

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 1000;

/// Fast number of resamples for quick estimates
pub const FAST_RESAMPLES: usize = 100;

/// High-precision number of resamples
pub const HIGH_PRECISION_RESAMPLES: usize = 5000;

/// Default percentile target for [`StatisticKind::Percentile`]
pub const DEFAULT_PERCENTILE_TARGET: f64 = 90.0;

/// One bootstrap estimation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapRequest {
    /// The observed sample
    pub sample: Vec<f64>,
    /// Number of resamples to draw
    pub resample_count: usize,
    /// Which statistic to bootstrap
    pub statistic_kind: StatisticKind,
    /// Percentile target, consulted only for the percentile statistic
    pub percentile_target: f64,
    /// Base seed for reproducible runs; `None` draws a fresh one
    pub seed: Option<u64>,
}

impl BootstrapRequest {
    /// Create a request with default resample count and percentile target
    pub fn new(sample: Vec<f64>, statistic_kind: StatisticKind) -> Self {
        Self {
            sample,
            resample_count: DEFAULT_RESAMPLES,
            statistic_kind,
            percentile_target: DEFAULT_PERCENTILE_TARGET,
            seed: None,
        }
    }

    /// Set the number of resamples
    pub fn with_resample_count(mut self, resample_count: usize) -> Self {
        self.resample_count = resample_count;
        self
    }

    /// Set the percentile target
    pub fn with_percentile_target(mut self, percentile_target: f64) -> Self {
        self.percentile_target = percentile_target;
        self
    }

    /// Set the base random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the request through the engine
    pub fn run(&self) -> Result<EstimateResult> {
        let statistic = self.statistic_kind.statistic(self.percentile_target)?;

        let mut engine = Bootstrap::new().with_resamples(self.resample_count);
        if let Some(seed) = self.seed {
            engine = engine.with_seed(seed);
        }
        // The mean estimate also reports the 90% interval.
        if self.statistic_kind == StatisticKind::Mean {
            engine = engine.with_ci_90();
        }

        engine.run(&self.sample, statistic.as_ref())
    }
}

/// Bootstrap the mean of a sample
pub fn bootstrap_mean(sample: &[f64], resample_count: usize) -> Result<EstimateResult> {
    BootstrapRequest::new(sample.to_vec(), StatisticKind::Mean)
        .with_resample_count(resample_count)
        .run()
}

/// Bootstrap the median of a sample
pub fn bootstrap_median(sample: &[f64], resample_count: usize) -> Result<EstimateResult> {
    BootstrapRequest::new(sample.to_vec(), StatisticKind::Median)
        .with_resample_count(resample_count)
        .run()
}

/// Bootstrap the sample standard deviation
pub fn bootstrap_std_dev(sample: &[f64], resample_count: usize) -> Result<EstimateResult> {
    BootstrapRequest::new(sample.to_vec(), StatisticKind::StdDev)
        .with_resample_count(resample_count)
        .run()
}

/// Bootstrap the proportion of a 0/1-coded sample
pub fn bootstrap_proportion(sample: &[f64], resample_count: usize) -> Result<EstimateResult> {
    BootstrapRequest::new(sample.to_vec(), StatisticKind::Proportion)
        .with_resample_count(resample_count)
        .run()
}

/// Bootstrap a percentile of a sample
pub fn bootstrap_percentile(
    sample: &[f64],
    percentile_target: f64,
    resample_count: usize,
) -> Result<EstimateResult> {
    BootstrapRequest::new(sample.to_vec(), StatisticKind::Percentile)
        .with_percentile_target(percentile_target)
        .with_resample_count(resample_count)
        .run()
}
