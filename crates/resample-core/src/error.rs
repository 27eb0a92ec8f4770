//! Error types for bootstrap resampling
//!
//! Provides a unified error type for all resample-stats crates.

use thiserror::Error;

/// Core error type for resampling operations
///
/// Every variant is a caller-input contract violation, detected before any
/// resampling work begins. Nothing here is transient, so nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Sample has zero elements
    #[error("Empty sample: at least one observation is required")]
    EmptySample,

    /// Sample too small for the requested statistic
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Resample count below one
    #[error("Invalid resample count: {0} (must be at least 1)")]
    InvalidResampleCount(usize),

    /// Percentile target outside [0, 100]
    #[error("Invalid percentile: {0} must be in [0, 100]")]
    InvalidPercentile(f64),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a sample below a statistic's minimum length
    pub fn insufficient_data(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} produced a non-finite value"))
    }
}
