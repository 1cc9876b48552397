//! Error types for structured error handling.
//!
//! This module provides:
//! - `StatsError`: Errors from statistics and generation operations
//! - `ConfigError`: Errors from check scenario configuration

use thiserror::Error;

/// Convenience alias for results carrying a [`StatsError`].
pub type Result<T> = std::result::Result<T, StatsError>;

/// Failures of the statistics and generation operations.
///
/// All variants are programmer errors: they are reported immediately and
/// never retried.
///
/// # Variants
/// - `EmptyInput`: A statistic was requested over a zero-length sequence
/// - `InvalidRange`: Generation was requested with `min > max`, or with bounds
///   (or a width) that are not finite
/// - `Overflow`: An integer accumulation exceeded the element type
///
/// # Examples
/// ```
/// use tally_core::StatsError;
///
/// let err = StatsError::EmptyInput { operation: "sum" };
/// assert_eq!(format!("{}", err), "Empty input: sum requires at least one value");
///
/// let err = StatsError::InvalidRange { min: 5.0, max: 1.0 };
/// assert!(format!("{}", err).contains("[5, 1]"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Statistic requested over an empty sequence.
    #[error("Empty input: {operation} requires at least one value")]
    EmptyInput {
        /// Name of the operation that rejected the input
        operation: &'static str,
    },

    /// Generation range with minimum greater than maximum, or with a
    /// non-finite bound or width.
    #[error("Invalid range: [{min}, {max}] must be finite with min <= max")]
    InvalidRange {
        /// Requested lower bound
        min: f64,
        /// Requested upper bound
        max: f64,
    },

    /// Integer accumulation exceeded the range of the element type.
    #[error("Overflow: {operation} exceeded the range of the element type")]
    Overflow {
        /// Name of the operation that overflowed
        operation: &'static str,
    },
}

/// Configuration error for the check scenario.
///
/// Raised by [`CheckConfigBuilder::build`](crate::CheckConfigBuilder::build)
/// when a parameter falls outside its valid domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
