//! Uniform with-replacement resampling
//!
//! One resample has exactly as many elements as the original sample, each
//! drawn uniformly at random, independently, with replacement. Duplicates
//! within a resample are expected. The generator is injected so callers
//! (and tests) control determinism.

use rand::Rng;
use resample_core::{Error, Result};

/// Draw one bootstrap resample
pub fn resample<R: Rng>(sample: &[f64], rng: &mut R) -> Result<Vec<f64>> {
    let mut out = vec![0.0; sample.len()];
    resample_into(sample, rng, &mut out)?;
    Ok(out)
}

/// Draw one bootstrap resample into a preallocated buffer
///
/// Eliminates allocation when called repeatedly with the same buffer.
///
/// # Panics
///
/// Panics if `out.len() != sample.len()`.
pub fn resample_into<R: Rng>(sample: &[f64], rng: &mut R, out: &mut [f64]) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    assert_eq!(
        out.len(),
        sample.len(),
        "Output buffer must have same length as the sample"
    );

    let n = sample.len();
    for slot in out.iter_mut() {
        *slot = sample[rng.gen_range(0..n)];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_resample_preserves_length() {
        let sample: Vec<f64> = (0..50).map(|x| x as f64).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let resampled = resample(&sample, &mut rng).unwrap();
        assert_eq!(resampled.len(), sample.len());
    }

    #[test]
    fn test_resample_draws_from_sample() {
        let sample = vec![1.0, 5.0, 9.0];
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            let resampled = resample(&sample, &mut rng).unwrap();
            for value in &resampled {
                assert!(sample.contains(value));
            }
        }
    }

    #[test]
    fn test_resample_is_deterministic_given_rng() {
        let sample: Vec<f64> = (0..30).map(|x| x as f64 * 0.5).collect();

        let mut rng1 = ChaCha8Rng::seed_from_u64(99);
        let mut rng2 = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(
            resample(&sample, &mut rng1).unwrap(),
            resample(&sample, &mut rng2).unwrap()
        );
    }

    #[test]
    fn test_resampling_with_replacement_repeats_values() {
        // A draw with no duplicates is a full permutation; over several
        // seeds at least one resample must repeat a value.
        let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

        let repeated = (0..5).any(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut resampled = resample(&sample, &mut rng).unwrap();
            resampled.sort_unstable_by(f64::total_cmp);
            let before = resampled.len();
            resampled.dedup();
            resampled.len() < before
        });
        assert!(repeated);
    }

    #[test]
    fn test_empty_sample_fails_fast() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            resample(&[], &mut rng),
            Err(Error::EmptySample)
        ));
    }

    #[test]
    fn test_resample_into_reuses_buffer() {
        let sample = vec![2.0, 4.0, 6.0];
        let mut out = vec![0.0; 3];
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        resample_into(&sample, &mut rng, &mut out).unwrap();
        for value in &out {
            assert!(sample.contains(value));
        }
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_resample_into_rejects_mismatched_buffer() {
        let sample = vec![1.0, 2.0];
        let mut out = vec![0.0; 3];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let _ = resample_into(&sample, &mut rng, &mut out);
    }
}
