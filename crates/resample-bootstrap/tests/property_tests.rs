//! Property-based tests for the bootstrap engine

use proptest::prelude::*;
use resample_bootstrap::Bootstrap;
use resample_statistics::{Mean, Median};

proptest! {
    #[test]
    fn distribution_length_always_matches_resample_count(
        sample in prop::collection::vec(-1e6f64..1e6, 1..40),
        n_resamples in 1usize..64,
        seed in any::<u64>(),
    ) {
        let result = Bootstrap::new()
            .with_resamples(n_resamples)
            .with_seed(seed)
            .run(&sample, &Mean)
            .unwrap();

        prop_assert_eq!(result.bootstrap_distribution.len(), n_resamples);
        prop_assert_eq!(result.n_resamples, n_resamples);
    }

    #[test]
    fn interval_bounds_are_ordered(
        sample in prop::collection::vec(-1e6f64..1e6, 1..40),
        seed in any::<u64>(),
    ) {
        let result = Bootstrap::new()
            .with_resamples(50)
            .with_seed(seed)
            .with_ci_90()
            .run(&sample, &Median)
            .unwrap();

        prop_assert!(result.ci_95.lower <= result.ci_95.upper);
        let ci_90 = result.ci_90.unwrap();
        prop_assert!(ci_90.lower <= ci_90.upper);
    }

    #[test]
    fn original_statistic_is_independent_of_resample_count(
        sample in prop::collection::vec(-1e6f64..1e6, 1..40),
        n1 in 1usize..32,
        n2 in 32usize..64,
        seed in any::<u64>(),
    ) {
        let first = Bootstrap::new()
            .with_resamples(n1)
            .with_seed(seed)
            .run(&sample, &Mean)
            .unwrap();
        let second = Bootstrap::new()
            .with_resamples(n2)
            .with_seed(seed.wrapping_add(1))
            .run(&sample, &Mean)
            .unwrap();

        prop_assert_eq!(first.original_statistic, second.original_statistic);
    }

    #[test]
    fn median_distribution_stays_within_sample_range(
        sample in prop::collection::vec(-1e3f64..1e3, 1..30),
        seed in any::<u64>(),
    ) {
        let result = Bootstrap::new()
            .with_resamples(40)
            .with_seed(seed)
            .run(&sample, &Median)
            .unwrap();

        let min = sample.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = sample.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for &value in &result.bootstrap_distribution {
            prop_assert!(value >= min && value <= max);
        }
        prop_assert!(result.ci_95.lower >= min && result.ci_95.upper <= max);
    }
}
