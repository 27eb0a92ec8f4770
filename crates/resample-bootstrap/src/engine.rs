//! The bootstrap estimation engine
//!
//! One call consumes a sample and a resample count and returns one
//! [`EstimateResult`]; the engine holds no state between calls and never
//! mutates its inputs. Each iteration draws from its own RNG stream derived
//! from the base seed, so a seeded run reproduces exactly, with or without
//! the `parallel` feature.

use crate::api::DEFAULT_RESAMPLES;
use crate::resampler;
use crate::types::{ConfidenceInterval, EstimateResult};
use rand::prelude::*;
use resample_core::{math, Error, Result};
use resample_statistics::Statistic;
use tracing::{debug, instrument};

/// Bootstrap engine
///
/// Builder-style configuration, then [`Bootstrap::run`] per estimation:
///
/// ```rust
/// use resample_bootstrap::Bootstrap;
/// use resample_statistics::Mean;
///
/// let heights = vec![165.0, 170.0, 168.0, 172.0, 175.0, 169.0, 171.0, 167.0];
/// let result = Bootstrap::new()
///     .with_resamples(500)
///     .with_seed(42)
///     .run(&heights, &Mean)
///     .unwrap();
///
/// assert_eq!(result.bootstrap_distribution.len(), 500);
/// ```
#[derive(Debug, Clone)]
pub struct Bootstrap {
    n_resamples: usize,
    seed: Option<u64>,
    ci_90: bool,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self {
            n_resamples: DEFAULT_RESAMPLES,
            seed: None,
            ci_90: false,
        }
    }
}

impl Bootstrap {
    /// Create a new bootstrap engine with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bootstrap resamples
    ///
    /// Validated in [`Bootstrap::run`]: zero is
    /// [`Error::InvalidResampleCount`].
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set the base random seed for reproducible runs
    ///
    /// Without a seed, each run draws a fresh base seed from the thread
    /// generator and results vary run to run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Also compute the 90% interval alongside the 95% one
    pub fn with_ci_90(mut self) -> Self {
        self.ci_90 = true;
        self
    }

    /// Run the bootstrap: resample, re-estimate, summarize
    ///
    /// Validation happens up front; a failed validation produces no partial
    /// result and no resampling work.
    #[instrument(skip(self, sample, statistic),
                 fields(n = sample.len(), n_resamples = self.n_resamples, statistic = statistic.name()))]
    pub fn run<S>(&self, sample: &[f64], statistic: &S) -> Result<EstimateResult>
    where
        S: Statistic + ?Sized,
    {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }
        if self.n_resamples < 1 {
            return Err(Error::InvalidResampleCount(self.n_resamples));
        }
        statistic.validate(sample)?;

        let original_statistic = statistic.evaluate(sample)?;

        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        debug!(
            "drawing {} resamples of size {}",
            self.n_resamples,
            sample.len()
        );
        let bootstrap_distribution = self.draw_distribution(sample, statistic, seed)?;

        let bootstrap_mean = math::mean(&bootstrap_distribution)?;
        // Population convention (divisor B): the spread of the distribution
        // is a standard error, not a sample statistic.
        let standard_error = math::population_std_dev(&bootstrap_distribution)?;

        let mut sorted = bootstrap_distribution.clone();
        math::sort_values(&mut sorted);
        let ci_95 = percentile_interval(&sorted, 0.95)?;
        let ci_90 = if self.ci_90 {
            Some(percentile_interval(&sorted, 0.90)?)
        } else {
            None
        };

        debug!("bootstrap complete, standard error {:.6}", standard_error);

        Ok(EstimateResult {
            original_sample: sample.to_vec(),
            original_statistic,
            bootstrap_distribution,
            bootstrap_mean,
            standard_error,
            ci_95,
            ci_90,
            n_resamples: self.n_resamples,
            statistic: statistic.name(),
            detail: statistic.detail(sample),
        })
    }

    /// Evaluate the statistic on each of the B resamples
    ///
    /// Iteration i seeds its own generator from the base seed, so the
    /// distribution is identical whichever execution path runs it.
    #[cfg(not(feature = "parallel"))]
    fn draw_distribution<S>(&self, sample: &[f64], statistic: &S, seed: u64) -> Result<Vec<f64>>
    where
        S: Statistic + ?Sized,
    {
        let mut buffer = vec![0.0; sample.len()];
        let mut distribution = Vec::with_capacity(self.n_resamples);
        for i in 0..self.n_resamples {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            resampler::resample_into(sample, &mut rng, &mut buffer)?;
            distribution.push(statistic.evaluate(&buffer)?);
        }
        Ok(distribution)
    }

    /// Evaluate the statistic on each of the B resamples
    ///
    /// Iteration i seeds its own generator from the base seed, so the
    /// distribution is identical whichever execution path runs it.
    #[cfg(feature = "parallel")]
    fn draw_distribution<S>(&self, sample: &[f64], statistic: &S, seed: u64) -> Result<Vec<f64>>
    where
        S: Statistic + ?Sized,
    {
        use rayon::prelude::*;

        (0..self.n_resamples)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                let resampled = resampler::resample(sample, &mut rng)?;
                statistic.evaluate(&resampled)
            })
            .collect()
    }
}

/// Percentile confidence interval of a sorted bootstrap distribution
///
/// The bounds are the [α/2, 1−α/2] percentile pair, interpolated with the
/// same rule the percentile statistic uses.
pub fn percentile_interval(sorted: &[f64], level: f64) -> Result<ConfidenceInterval> {
    assert!(
        level > 0.0 && level < 1.0,
        "Confidence level must be in (0, 1)"
    );

    let alpha = 1.0 - level;
    let lower = math::percentile_of_sorted(sorted, 100.0 * alpha / 2.0)?;
    let upper = math::percentile_of_sorted(sorted, 100.0 * (1.0 - alpha / 2.0))?;
    Ok(ConfidenceInterval::new(lower, upper, level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use resample_statistics::{Mean, Median, Proportion, SampleStdDev, StatisticDetail};

    const TIMES: [f64; 10] = [12.5, 13.2, 11.8, 14.1, 12.9, 13.5, 12.1, 13.8, 12.7, 13.3];

    #[test]
    fn test_distribution_length_matches_resamples() {
        let result = Bootstrap::new()
            .with_resamples(250)
            .with_seed(42)
            .run(&TIMES, &Mean)
            .unwrap();

        assert_eq!(result.bootstrap_distribution.len(), 250);
        assert_eq!(result.n_resamples, 250);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let engine = Bootstrap::new().with_resamples(100).with_seed(7);
        let first = engine.run(&TIMES, &Median).unwrap();
        let second = engine.run(&TIMES, &Median).unwrap();

        assert_eq!(first.bootstrap_distribution, second.bootstrap_distribution);
        assert_eq!(first.standard_error, second.standard_error);
    }

    #[test]
    fn test_original_statistic_ignores_resample_count() {
        let small = Bootstrap::new().with_resamples(1).with_seed(1);
        let large = Bootstrap::new().with_resamples(500).with_seed(2);

        assert_eq!(
            small.run(&TIMES, &Mean).unwrap().original_statistic,
            large.run(&TIMES, &Mean).unwrap().original_statistic
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let sample = TIMES.to_vec();
        let result = Bootstrap::new()
            .with_resamples(50)
            .with_seed(3)
            .run(&sample, &Mean)
            .unwrap();

        assert_eq!(sample, TIMES);
        assert_eq!(result.original_sample, TIMES);
    }

    #[test]
    fn test_constant_sample_degenerates() {
        let constant = [7.0, 7.0, 7.0, 7.0];
        let result = Bootstrap::new()
            .with_resamples(2000)
            .with_seed(11)
            .run(&constant, &Mean)
            .unwrap();

        assert_relative_eq!(result.original_statistic, 7.0);
        assert_relative_eq!(result.standard_error, 0.0);
        assert_relative_eq!(result.ci_95.lower, 7.0);
        assert_relative_eq!(result.ci_95.upper, 7.0);

        let std_result = Bootstrap::new()
            .with_resamples(2000)
            .with_seed(11)
            .run(&constant, &SampleStdDev)
            .unwrap();
        assert_relative_eq!(std_result.ci_95.lower, 0.0);
        assert_relative_eq!(std_result.ci_95.upper, 0.0);
    }

    #[test]
    fn test_ci_bounds_are_ordered() {
        let result = Bootstrap::new()
            .with_resamples(500)
            .with_seed(19)
            .with_ci_90()
            .run(&TIMES, &SampleStdDev)
            .unwrap();

        assert!(result.ci_95.lower <= result.ci_95.upper);
        let ci_90 = result.ci_90.expect("requested");
        assert!(ci_90.lower <= ci_90.upper);
        // The 90% interval nests inside the 95% one.
        assert!(ci_90.lower >= result.ci_95.lower);
        assert!(ci_90.upper <= result.ci_95.upper);
    }

    #[test]
    fn test_ci_90_is_opt_in() {
        let result = Bootstrap::new()
            .with_resamples(50)
            .with_seed(5)
            .run(&TIMES, &Mean)
            .unwrap();
        assert!(result.ci_90.is_none());
    }

    #[test]
    fn test_single_resample_is_degenerate_but_valid() {
        let result = Bootstrap::new()
            .with_resamples(1)
            .with_seed(23)
            .run(&TIMES, &Mean)
            .unwrap();

        assert_eq!(result.bootstrap_distribution.len(), 1);
        assert_relative_eq!(result.standard_error, 0.0);
        assert_eq!(result.ci_95.lower, result.ci_95.upper);
    }

    #[test]
    fn test_validation_failures() {
        let engine = Bootstrap::new().with_seed(1);

        assert!(matches!(engine.run(&[], &Mean), Err(Error::EmptySample)));
        assert!(matches!(
            engine.clone().with_resamples(0).run(&TIMES, &Mean),
            Err(Error::InvalidResampleCount(0))
        ));
        assert!(matches!(
            engine.run(&[5.0], &SampleStdDev),
            Err(Error::InsufficientData {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_detail_travels_with_the_result() {
        let defects = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        let result = Bootstrap::new()
            .with_resamples(100)
            .with_seed(31)
            .run(&defects, &Proportion)
            .unwrap();

        assert_eq!(result.statistic, "proportion");
        assert_eq!(
            result.detail,
            StatisticDetail::Proportion {
                successes: 2,
                trials: 7
            }
        );
    }

    #[test]
    fn test_percentile_interval_matches_interpolation() {
        let sorted: Vec<f64> = (1..=100).map(|x| x as f64).collect();
        let ci = percentile_interval(&sorted, 0.95).unwrap();

        // rank 0.025 * 99 = 2.475 -> 3.475; rank 0.975 * 99 = 96.525 -> 97.525
        assert_relative_eq!(ci.lower, 3.475, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 97.525, epsilon = 1e-12);
        assert_relative_eq!(ci.level, 0.95);
    }
}
