//! Validated generation bounds.

use crate::error::{Result, StatsError};
use crate::rng::UniformSource;

/// Closed pair of finite bounds `(min, max)` with `min <= max`, sampled over
/// the half-open interval `[min, max)`.
///
/// The width `max - min` must also be finite, so every sample is finite.
///
/// A degenerate range (`min == max`) is valid and always samples `min`.
///
/// # Examples
/// ```
/// use tally_core::ValueRange;
///
/// let range = ValueRange::new(10.0, 110.0).unwrap();
/// assert_eq!(range.width(), 100.0);
/// assert!(ValueRange::new(5.0, 1.0).is_err());
/// assert!(ValueRange::new(-1e308, 1e308).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Creates a range after checking `min <= max` and finiteness.
    ///
    /// # Errors
    /// Returns [`StatsError::InvalidRange`] if `min > max`, either bound is
    /// NaN or infinite, or `max - min` overflows to infinity.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        // Negated `<=` so that NaN bounds are rejected as well.
        if !(min <= max) || !(max - min).is_finite() {
            return Err(StatsError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (exclusive unless the range is degenerate).
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Distance between the bounds.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `value` lies in `[min, max)`, or equals `min` for a
    /// degenerate range.
    pub fn contains(&self, value: f64) -> bool {
        if self.min == self.max {
            return value == self.min;
        }
        self.min <= value && value < self.max
    }

    /// Draws one value as `u * (max - min) + min`.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, rng: &mut S) -> f64 {
        rng.next_unit() * (self.max - self.min) + self.min
    }
}
