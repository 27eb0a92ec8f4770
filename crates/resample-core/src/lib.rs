//! Core error types and numeric kernels for bootstrap resampling
//!
//! This crate is the leaf of the resample-stats workspace. It provides:
//!
//! - a unified [`Error`] type shared by every crate in the workspace, and
//! - the scalar kernels in [`math`] that the statistic adapters and the
//!   bootstrap engine are built from.
//!
//! # Examples
//!
//! ```rust
//! use resample_core::math;
//!
//! let scores = vec![65.0, 70.0, 72.0, 75.0, 78.0, 80.0, 82.0, 84.0, 85.0, 87.0];
//! let p90 = math::percentile(&scores, 90.0).unwrap();
//! assert!((p90 - 85.2).abs() < 1e-12);
//! ```

mod error;
pub mod math;

pub use error::{Error, Result};
