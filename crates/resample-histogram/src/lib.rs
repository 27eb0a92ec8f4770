//! Histogram summaries for bootstrap comparison charts
//!
//! A bootstrap run is usually displayed as two histograms side by side:
//! the original sample and the bootstrap distribution. This crate turns a
//! `&[f64]` into the [`Histogram`] data a presentation layer renders,
//! without committing to any charting backend.
//!
//! # Examples
//!
//! ```rust
//! use resample_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = FixedWidthBuilder::new(5).build(&data).unwrap();
//!
//! for bin in histogram.bins() {
//!     println!("{}", bin);
//! }
//! ```

mod builders;
mod traits;
mod types;

pub use builders::{FixedWidthBuilder, ScottsRule};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use resample_core::Result;

/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(data)
}

/// Create a histogram using Scott's rule for bin width
pub fn scott_histogram(data: &[f64]) -> Result<Histogram> {
    ScottsRule.build(data)
}
