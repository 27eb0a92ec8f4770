//! The statistic reduction capability

use crate::types::StatisticDetail;
use resample_core::{Error, Result};

/// A statistic reduces a numeric sample to a single number
///
/// This is the only capability the bootstrap engine needs: it evaluates the
/// statistic once on the original sample and once per resample. There is no
/// shared state between evaluations.
pub trait Statistic: Send + Sync {
    /// Compute the statistic on a sample
    fn evaluate(&self, sample: &[f64]) -> Result<f64>;

    /// Statistic name for result records and spans
    fn name(&self) -> &'static str;

    /// Smallest sample length the statistic is defined for
    fn min_sample_len(&self) -> usize {
        1
    }

    /// Validate a sample before any resampling work begins
    fn validate(&self, sample: &[f64]) -> Result<()> {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }
        if sample.len() < self.min_sample_len() {
            return Err(Error::insufficient_data(self.min_sample_len(), sample.len()));
        }
        Ok(())
    }

    /// Variant-specific context recorded alongside the estimate
    fn detail(&self, _sample: &[f64]) -> StatisticDetail {
        StatisticDetail::None
    }
}
