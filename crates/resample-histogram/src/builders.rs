//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use resample_core::{math, Result};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins.
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let mut sorted = sample.to_vec();
        math::sort_values(&mut sorted);
        self.build_sorted(&sorted)
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        if sorted_sample.is_empty() {
            return Ok(Histogram::new(vec![], 0, 0.0, 0.0));
        }

        let n = sorted_sample.len();
        let min = sorted_sample[0];
        let max = sorted_sample[n - 1];

        if (max - min).abs() < 1e-10 {
            // All values are the same
            let bin = HistogramBin::new(min, max, n, n);
            return Ok(Histogram::new(vec![bin], n, min, max));
        }

        let width = (max - min) / self.num_bins as f64;
        let mut bins = Vec::with_capacity(self.num_bins);
        for i in 0..self.num_bins {
            let left = min + i as f64 * width;
            let right = if i == self.num_bins - 1 {
                max // Last bin closes on the maximum
            } else {
                min + (i + 1) as f64 * width
            };
            bins.push(HistogramBin::new(left, right, 0, n));
        }

        // Single pass through sorted data
        let mut current_bin = 0;
        for &value in sorted_sample {
            while current_bin < self.num_bins - 1 && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        for bin in &mut bins {
            bin.density = bin.count as f64 / (n as f64 * bin.width());
        }

        Ok(Histogram::new(bins, n, min, max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Scott's rule for optimal bin width
///
/// Uses the formula: h = 3.5 * σ * n^(-1/3)
/// where σ is the standard deviation and n is the sample size.
pub struct ScottsRule;

impl HistogramBuilder for ScottsRule {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        if sample.is_empty() {
            return Ok(Histogram::new(vec![], 0, 0.0, 0.0));
        }

        let n = sample.len();
        let std_dev = math::population_std_dev(sample)?;
        let bin_width = 3.5 * std_dev * (n as f64).powf(-1.0 / 3.0);

        let mut sorted = sample.to_vec();
        math::sort_values(&mut sorted);
        let range = sorted[n - 1] - sorted[0];

        let num_bins = if bin_width > 1e-10 {
            ((range / bin_width).ceil() as usize).max(1)
        } else {
            1
        };

        FixedWidthBuilder::new(num_bins).build_sorted(&sorted)
    }
}
