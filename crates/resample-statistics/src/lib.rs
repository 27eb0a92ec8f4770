//! Statistic adapters for bootstrap resampling
//!
//! A [`Statistic`] reduces a numeric sample to one number. The bootstrap
//! engine is generic over this capability, so the five adapters here
//! ([`Mean`], [`Median`], [`SampleStdDev`], [`Proportion`], [`Percentile`])
//! are all it ever needs to know about a statistic.
//!
//! # Examples
//!
//! ```rust
//! use resample_statistics::{Percentile, Statistic, StatisticKind};
//!
//! let scores = vec![65.0, 70.0, 72.0, 75.0, 78.0, 80.0, 82.0, 84.0, 85.0, 87.0];
//!
//! let p90 = Percentile::new(90.0).unwrap();
//! assert!((p90.evaluate(&scores).unwrap() - 85.2).abs() < 1e-12);
//!
//! // Or from the presentation-facing tag:
//! let statistic = StatisticKind::Percentile.statistic(90.0).unwrap();
//! assert_eq!(statistic.name(), "percentile");
//! ```

mod estimators;
mod traits;
mod types;

pub use estimators::{Mean, Median, Percentile, Proportion, SampleStdDev};
pub use traits::Statistic;
pub use types::{StatisticDetail, StatisticKind};
