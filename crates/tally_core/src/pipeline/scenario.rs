//! End-to-end check run of the generate-and-smooth pipeline.
//!
//! A check run draws everything it needs from one uniform source:
//!
//! 1. a sequence length in `[min_length, min_length + length_span)`
//! 2. a lower bound in `[bound_floor, bound_ceiling)`
//! 3. an upper bound in `[lower, bound_ceiling)`
//! 4. the values themselves, which are then smoothed
//! 5. `sample_count` random indices to inspect after generation, and another
//!    `sample_count` after smoothing
//!
//! With a [`SeededRng`](crate::SeededRng) the whole run is reproducible from
//! its seed.

use tracing::debug;

use super::{generate_random_values, smooth_values, ValueRange};
use crate::error::{ConfigError, Result};
use crate::rng::UniformSource;

/// Maximum sequence length a check run may generate.
pub const MAX_LENGTH: usize = 10_000_000;

/// Default shortest generated sequence.
pub const DEFAULT_MIN_LENGTH: usize = 1000;

/// Default number of distinct lengths above `min_length`.
pub const DEFAULT_LENGTH_SPAN: usize = 10_000;

/// Default lowest possible lower bound.
pub const DEFAULT_BOUND_FLOOR: f64 = 10.0;

/// Default bound that no generated value reaches.
pub const DEFAULT_BOUND_CEILING: f64 = 110.0;

/// Default number of indices inspected at each stage.
pub const DEFAULT_SAMPLE_COUNT: usize = 5;

/// Maximum number of indices a check run may inspect at each stage.
pub const MAX_SAMPLE_COUNT: usize = MAX_LENGTH;

/// Check run configuration.
///
/// Immutable once built. Use [`CheckConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use tally_core::CheckConfig;
///
/// let config = CheckConfig::builder()
///     .min_length(10)
///     .length_span(5)
///     .sample_count(3)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.min_length(), 10);
/// assert_eq!(config.bound_ceiling(), 110.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CheckConfig {
    min_length: usize,
    length_span: usize,
    bound_floor: f64,
    bound_ceiling: f64,
    sample_count: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            length_span: DEFAULT_LENGTH_SPAN,
            bound_floor: DEFAULT_BOUND_FLOOR,
            bound_ceiling: DEFAULT_BOUND_CEILING,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl CheckConfig {
    /// Creates a new configuration builder seeded with the defaults.
    #[inline]
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::default()
    }

    /// Returns the shortest sequence length.
    #[inline]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns the number of distinct lengths above `min_length`.
    #[inline]
    pub fn length_span(&self) -> usize {
        self.length_span
    }

    /// Returns the lowest possible lower bound.
    #[inline]
    pub fn bound_floor(&self) -> f64 {
        self.bound_floor
    }

    /// Returns the upper limit for both generated bounds.
    #[inline]
    pub fn bound_ceiling(&self) -> f64 {
        self.bound_ceiling
    }

    /// Returns the number of indices inspected per stage.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `length_span` is 0
    /// - `min_length + length_span` exceeds [`MAX_LENGTH`]
    /// - either bound is not finite, or `bound_floor >= bound_ceiling`
    /// - `bound_ceiling - bound_floor` is not finite
    /// - `sample_count` exceeds [`MAX_SAMPLE_COUNT`]
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.length_span == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "length_span",
                value: "must be at least 1".to_string(),
            });
        }
        match self.min_length.checked_add(self.length_span) {
            Some(upper) if upper <= MAX_LENGTH => {}
            _ => {
                return Err(ConfigError::InvalidParameter {
                    name: "min_length",
                    value: format!(
                        "min_length {} + length_span {} exceeds {}",
                        self.min_length, self.length_span, MAX_LENGTH
                    ),
                })
            }
        }
        if !self.bound_floor.is_finite() || !self.bound_ceiling.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "bound_floor",
                value: format!(
                    "bounds must be finite, got [{}, {}]",
                    self.bound_floor, self.bound_ceiling
                ),
            });
        }
        if self.bound_floor >= self.bound_ceiling {
            return Err(ConfigError::InvalidParameter {
                name: "bound_ceiling",
                value: format!(
                    "must exceed bound_floor {}, got {}",
                    self.bound_floor, self.bound_ceiling
                ),
            });
        }
        if !(self.bound_ceiling - self.bound_floor).is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "bound_ceiling",
                value: format!(
                    "width of [{}, {}] is not finite",
                    self.bound_floor, self.bound_ceiling
                ),
            });
        }
        if self.sample_count > MAX_SAMPLE_COUNT {
            return Err(ConfigError::InvalidParameter {
                name: "sample_count",
                value: format!("{} exceeds {}", self.sample_count, MAX_SAMPLE_COUNT),
            });
        }
        Ok(())
    }
}

/// Builder for [`CheckConfig`].
///
/// Unset fields fall back to the defaults; validation happens in
/// [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct CheckConfigBuilder {
    min_length: Option<usize>,
    length_span: Option<usize>,
    bound_floor: Option<f64>,
    bound_ceiling: Option<f64>,
    sample_count: Option<usize>,
}

impl CheckConfigBuilder {
    /// Sets the shortest sequence length.
    #[inline]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the number of distinct lengths above `min_length` (at least 1).
    #[inline]
    pub fn length_span(mut self, length_span: usize) -> Self {
        self.length_span = Some(length_span);
        self
    }

    /// Sets the lowest possible lower bound.
    #[inline]
    pub fn bound_floor(mut self, bound_floor: f64) -> Self {
        self.bound_floor = Some(bound_floor);
        self
    }

    /// Sets the upper limit for both generated bounds.
    #[inline]
    pub fn bound_ceiling(mut self, bound_ceiling: f64) -> Self {
        self.bound_ceiling = Some(bound_ceiling);
        self
    }

    /// Sets the number of indices inspected per stage.
    #[inline]
    pub fn sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = Some(sample_count);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails; see
    /// [`CheckConfig::validate`].
    pub fn build(self) -> std::result::Result<CheckConfig, ConfigError> {
        let config = CheckConfig {
            min_length: self.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
            length_span: self.length_span.unwrap_or(DEFAULT_LENGTH_SPAN),
            bound_floor: self.bound_floor.unwrap_or(DEFAULT_BOUND_FLOOR),
            bound_ceiling: self.bound_ceiling.unwrap_or(DEFAULT_BOUND_CEILING),
            sample_count: self.sample_count.unwrap_or(DEFAULT_SAMPLE_COUNT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Outcome of a check run.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckReport {
    range: ValueRange,
    values: Vec<f64>,
    smoothed: Vec<i64>,
    assigned_indices: Vec<usize>,
    smoothed_indices: Vec<usize>,
}

impl CheckReport {
    /// Range the values were drawn from.
    #[inline]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Number of generated values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values were generated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Generated values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smoothed values, index-aligned with [`values`](Self::values).
    #[inline]
    pub fn smoothed(&self) -> &[i64] {
        &self.smoothed
    }

    /// `(index, value)` pairs inspected after generation.
    pub fn assigned_samples(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.assigned_indices
            .iter()
            .map(move |&i| (i, self.values[i]))
    }

    /// `(index, original, smoothed)` triples inspected after smoothing.
    pub fn smoothed_samples(&self) -> impl Iterator<Item = (usize, f64, i64)> + '_ {
        self.smoothed_indices
            .iter()
            .map(move |&i| (i, self.values[i], self.smoothed[i]))
    }
}

/// Runs one check of the generate-and-smooth pipeline.
///
/// # Errors
///
/// Returns [`StatsError::InvalidRange`](crate::StatsError::InvalidRange) only
/// if `config` was constructed without validation and has inverted bounds.
///
/// # Examples
///
/// ```rust
/// use tally_core::{run_check, CheckConfig, SeededRng};
///
/// let config = CheckConfig::default();
/// let report = run_check(&config, &mut SeededRng::from_seed(42)).unwrap();
///
/// assert!((1000..11_000).contains(&report.len()));
/// assert_eq!(report.assigned_samples().count(), 5);
/// ```
pub fn run_check<S: UniformSource + ?Sized>(
    config: &CheckConfig,
    rng: &mut S,
) -> Result<CheckReport> {
    let length = (rng.next_unit() * config.length_span as f64) as usize + config.min_length;
    let lower = ValueRange::new(config.bound_floor, config.bound_ceiling)?.sample(rng);
    let upper = ValueRange::new(lower, config.bound_ceiling)?.sample(rng);
    let range = ValueRange::new(lower, upper)?;
    debug!(length, min = range.min(), max = range.max(), "check run parameters drawn");

    let values = generate_random_values(length, range, rng);
    let assigned_indices = draw_indices(config.sample_count, length, rng);
    debug!(samples = assigned_indices.len(), "values assigned");

    let smoothed = smooth_values(&values);
    let smoothed_indices = draw_indices(config.sample_count, length, rng);
    debug!(samples = smoothed_indices.len(), "values smoothed");

    Ok(CheckReport {
        range,
        values,
        smoothed,
        assigned_indices,
        smoothed_indices,
    })
}

/// Draws `count` indices uniformly from `[0, length)`; none if `length` is 0.
fn draw_indices<S: UniformSource + ?Sized>(count: usize, length: usize, rng: &mut S) -> Vec<usize> {
    if length == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| ((rng.next_unit() * length as f64) as usize).min(length - 1))
        .collect()
}
