//! Scalar numeric kernels shared by the statistic adapters and the
//! bootstrap engine
//!
//! Two standard-deviation conventions live side by side here: the
//! Bessel-corrected [`sample_std_dev`] (divisor n−1) is the *statistic*,
//! while [`population_std_dev`] (divisor n) summarizes a bootstrap
//! distribution as a standard error.

use crate::error::{Error, Result};

/// Arithmetic mean
pub fn mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Sample median: the middle order statistic, averaging the two middle
/// values on even length
pub fn median(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    let mut sorted = sample.to_vec();
    sort_values(&mut sorted);

    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Sample standard deviation with Bessel's correction (divisor n−1)
///
/// Undefined below two observations.
pub fn sample_std_dev(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::insufficient_data(2, sample.len()));
    }
    let m = mean(sample)?;
    let sum_sq: f64 = sample.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok((sum_sq / (sample.len() - 1) as f64).sqrt())
}

/// Population standard deviation (divisor n)
///
/// This is the convention for the bootstrap standard error, not for the
/// standard-deviation statistic itself.
pub fn population_std_dev(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    let m = mean(sample)?;
    let sum_sq: f64 = sample.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok((sum_sq / sample.len() as f64).sqrt())
}

/// The p-th percentile via linear interpolation between order statistics
///
/// rank = p/100 · (n−1); the value is interpolated between the floor and
/// ceil ranks of the sorted sample. `p` must be in [0, 100].
pub fn percentile(sample: &[f64], p: f64) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    let mut sorted = sample.to_vec();
    sort_values(&mut sorted);
    percentile_of_sorted(&sorted, p)
}

/// [`percentile`] over data the caller has already sorted
///
/// Lets the engine sort a bootstrap distribution once and read several
/// percentile pairs from it.
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(Error::EmptySample);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::InvalidPercentile(p));
    }

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }

    let t = rank - lo as f64;
    Ok(sorted[lo] + t * (sorted[hi] - sorted[lo]))
}

/// Sort in place with a total order (NaN sorts last)
pub fn sort_values(values: &mut [f64]) {
    values.sort_unstable_by(f64::total_cmp);
}
