//! Filling sequences with uniformly distributed values.

use super::ValueRange;
use crate::error::Result;
use crate::rng::UniformSource;

/// Writes a sample from `range` into every slot of `buffer`.
///
/// Zero-allocation variant for callers that already own a buffer. Empty
/// buffers are left untouched.
///
/// # Examples
/// ```
/// use tally_core::{fill_random_values, SeededRng, ValueRange};
///
/// let mut buffer = [0.0; 8];
/// let range = ValueRange::new(1.0, 2.0).unwrap();
/// fill_random_values(&mut buffer, range, &mut SeededRng::from_seed(3));
/// assert!(buffer.iter().all(|&v| range.contains(v)));
/// ```
pub fn fill_random_values<S: UniformSource + ?Sized>(
    buffer: &mut [f64],
    range: ValueRange,
    rng: &mut S,
) {
    for value in buffer.iter_mut() {
        *value = range.sample(rng);
    }
}

/// Overwrites every element of `values` with `random() * (max - min) + min`
/// and hands the vector back.
///
/// The vector is taken by value: the caller gives up the old contents and
/// receives the filled sequence, so no other handle can observe the
/// overwrite. The length is preserved; an empty vector comes back empty.
///
/// # Errors
/// Returns [`StatsError::InvalidRange`](crate::StatsError::InvalidRange) if
/// `min > max` or either bound is NaN.
///
/// # Examples
/// ```
/// use tally_core::{assign_random_values, SeededRng};
///
/// let mut rng = SeededRng::from_seed(1);
/// let values = assign_random_values(vec![0.0; 4], 10.0, 10.0, &mut rng).unwrap();
/// assert_eq!(values, vec![10.0; 4]);
/// ```
pub fn assign_random_values<S: UniformSource + ?Sized>(
    mut values: Vec<f64>,
    min: f64,
    max: f64,
    rng: &mut S,
) -> Result<Vec<f64>> {
    let range = ValueRange::new(min, max)?;
    fill_random_values(&mut values, range, rng);
    Ok(values)
}

/// Allocates and returns `len` samples from `range`.
pub fn generate_random_values<S: UniformSource + ?Sized>(
    len: usize,
    range: ValueRange,
    rng: &mut S,
) -> Vec<f64> {
    let mut values = vec![0.0; len];
    fill_random_values(&mut values, range, rng);
    values
}
