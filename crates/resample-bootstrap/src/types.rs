//! Result types for bootstrap estimation

use resample_statistics::StatisticDetail;
use serde::Serialize;
use std::fmt;

/// A two-sided percentile confidence interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// Confidence level (e.g. 0.95 for 95% CI)
    pub level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, level: f64) -> Self {
        Self {
            lower,
            upper,
            level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.3}, {:.3}]",
            self.level * 100.0,
            self.lower,
            self.upper
        )
    }
}

/// Snapshot of one bootstrap estimation run
///
/// Created fresh per call and never mutated afterwards; the engine retains
/// no reference to it. The two sequences (`original_sample`,
/// `bootstrap_distribution`) are what a presentation layer feeds to its
/// comparison histograms.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResult {
    /// Unmodified copy of the input sample
    pub original_sample: Vec<f64>,
    /// The statistic computed once on the original sample
    pub original_statistic: f64,
    /// One statistic value per resample, length equal to `n_resamples`
    pub bootstrap_distribution: Vec<f64>,
    /// Mean of the bootstrap distribution
    pub bootstrap_mean: f64,
    /// Population standard deviation of the distribution (divisor B, not
    /// B−1; this differs from the Bessel-corrected statistic convention)
    pub standard_error: f64,
    /// The [2.5, 97.5] percentile pair of the distribution
    pub ci_95: ConfidenceInterval,
    /// The [5, 95] percentile pair, when requested
    pub ci_90: Option<ConfidenceInterval>,
    /// Number of resamples performed
    pub n_resamples: usize,
    /// Name of the statistic that was bootstrapped
    pub statistic: &'static str,
    /// Variant-specific context (percentile target, success count)
    pub detail: StatisticDetail,
}

impl EstimateResult {
    /// One-line display summary, formatted the way metric cards render it
    pub fn summary(&self) -> String {
        format!(
            "{}: original {:.3}, bootstrap {:.3} (SE {:.3}), {}",
            self.statistic,
            self.original_statistic,
            self.bootstrap_mean,
            self.standard_error,
            self.ci_95
        )
    }
}
