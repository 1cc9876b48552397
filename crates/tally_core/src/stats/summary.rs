//! All descriptive statistics of an `f64` slice in one value.

use super::{average, maximum, minimum, mode, sum, Mode};
use crate::error::{Result, StatsError};

/// Descriptive statistics summarising a dataset.
///
/// # Examples
/// ```
/// use tally_core::Summary;
///
/// let summary = Summary::from_values(&[2.0, 4.0, 4.0, 10.0]).unwrap();
/// assert_eq!(summary.count, 4);
/// assert_eq!(summary.sum, 20.0);
/// assert_eq!(summary.average, 5.0);
/// assert_eq!(summary.minimum, 2.0);
/// assert_eq!(summary.maximum, 10.0);
/// assert_eq!(summary.mode.value, 4.0);
/// assert_eq!(summary.mode.count, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic sum.
    pub sum: f64,
    /// Arithmetic mean.
    pub average: f64,
    /// Smallest value.
    pub minimum: f64,
    /// Largest value.
    pub maximum: f64,
    /// Most frequent value and its occurrence count.
    pub mode: Mode<f64>,
}

impl Summary {
    /// Computes every statistic of `values`.
    ///
    /// # Errors
    /// Returns [`StatsError::EmptyInput`] if `values` is empty.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput {
                operation: "summary",
            });
        }
        Ok(Self {
            count: values.len(),
            sum: sum(values)?,
            average: average(values)?,
            minimum: minimum(values)?,
            maximum: maximum(values)?,
            mode: mode(values)?,
        })
    }
}
