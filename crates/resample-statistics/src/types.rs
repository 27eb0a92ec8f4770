//! Common types for statistic selection and result context

use resample_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which statistic to bootstrap
///
/// This is the tag a presentation layer hands over; [`StatisticKind::statistic`]
/// turns it into the corresponding adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatisticKind {
    /// Arithmetic mean
    Mean,
    /// Sample median
    Median,
    /// Sample standard deviation (Bessel-corrected)
    StdDev,
    /// Proportion of a 0/1-coded sample
    Proportion,
    /// Percentile at a target in [0, 100]
    Percentile,
}

impl StatisticKind {
    /// Statistic name as it appears in result records
    pub fn name(&self) -> &'static str {
        match self {
            StatisticKind::Mean => "mean",
            StatisticKind::Median => "median",
            StatisticKind::StdDev => "std_dev",
            StatisticKind::Proportion => "proportion",
            StatisticKind::Percentile => "percentile",
        }
    }

    /// Build the adapter for this kind
    ///
    /// `percentile_target` is only consulted for [`StatisticKind::Percentile`]
    /// and is validated there.
    pub fn statistic(self, percentile_target: f64) -> Result<Box<dyn crate::Statistic>> {
        use crate::estimators::{Mean, Median, Percentile, Proportion, SampleStdDev};
        Ok(match self {
            StatisticKind::Mean => Box::new(Mean),
            StatisticKind::Median => Box::new(Median),
            StatisticKind::StdDev => Box::new(SampleStdDev),
            StatisticKind::Proportion => Box::new(Proportion),
            StatisticKind::Percentile => Box::new(Percentile::new(percentile_target)?),
        })
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Variant-specific context recorded alongside an estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum StatisticDetail {
    /// No auxiliary context
    None,
    /// 0/1-coded sample: how many ones out of how many observations
    Proportion { successes: usize, trials: usize },
    /// Percentile target in [0, 100]
    Percentile { target: f64 },
}
