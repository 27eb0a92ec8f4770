//! The five statistic adapters
//!
//! Each adapter is a stateless reduction from a sample to one number; the
//! numeric work lives in `resample_core::math`. `Percentile` is the only
//! adapter with a parameter, validated at construction so the engine never
//! sees an out-of-range target.

use crate::traits::Statistic;
use crate::types::StatisticDetail;
use resample_core::{math, Error, Result};
use tracing::warn;

/// Arithmetic mean
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl Statistic for Mean {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        math::mean(sample)
    }

    fn name(&self) -> &'static str {
        "mean"
    }
}

/// Sample median
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl Statistic for Median {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        math::median(sample)
    }

    fn name(&self) -> &'static str {
        "median"
    }
}

/// Sample standard deviation with Bessel's correction (divisor n−1)
///
/// Requires at least two observations. Note the contrast with the bootstrap
/// standard error, which divides by the distribution length.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleStdDev;

impl Statistic for SampleStdDev {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        math::sample_std_dev(sample)
    }

    fn name(&self) -> &'static str {
        "std_dev"
    }

    fn min_sample_len(&self) -> usize {
        2
    }
}

/// Proportion of a 0/1-coded sample
///
/// Numerically identical to [`Mean`]; the detail record carries the success
/// count. A sample with values outside {0, 1} is still reduced to its mean,
/// but the result is no longer a proportion; that case is logged, not
/// rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Proportion;

impl Statistic for Proportion {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        if sample.iter().any(|&x| x != 0.0 && x != 1.0) {
            warn!("proportion statistic applied to a non-binary sample; the estimate is a plain mean");
        }
        math::mean(sample)
    }

    fn name(&self) -> &'static str {
        "proportion"
    }

    fn detail(&self, sample: &[f64]) -> StatisticDetail {
        StatisticDetail::Proportion {
            successes: sample.iter().filter(|&&x| x == 1.0).count(),
            trials: sample.len(),
        }
    }
}

/// Percentile at a fixed target, linear interpolation between order statistics
#[derive(Debug, Clone, Copy)]
pub struct Percentile {
    target: f64,
}

impl Percentile {
    /// Create a percentile statistic
    ///
    /// The target must be in [0, 100]; anything else is
    /// [`Error::InvalidPercentile`].
    pub fn new(target: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&target) {
            return Err(Error::InvalidPercentile(target));
        }
        Ok(Self { target })
    }

    /// The percentile target
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Statistic for Percentile {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        math::percentile(sample, self.target)
    }

    fn name(&self) -> &'static str {
        "percentile"
    }

    fn detail(&self, _sample: &[f64]) -> StatisticDetail {
        StatisticDetail::Percentile {
            target: self.target,
        }
    }
}
