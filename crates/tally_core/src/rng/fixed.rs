//! Scripted uniform source for tests and replays.

use super::UniformSource;

/// Uniform source that replays a fixed list of unit values, cycling back to
/// the start when exhausted.
///
/// # Examples
///
/// ```rust
/// use tally_core::rng::{FixedSequence, UniformSource};
///
/// let mut source = FixedSequence::new(vec![0.0, 0.5]);
/// assert_eq!(source.next_unit(), 0.0);
/// assert_eq!(source.next_unit(), 0.5);
/// assert_eq!(source.next_unit(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSequence {
    values: Vec<f64>,
    position: usize,
}

impl FixedSequence {
    /// Creates a source replaying `values` in order.
    ///
    /// # Panics
    /// Panics if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        assert!(
            values.iter().all(|u| (0.0..1.0).contains(u)),
            "sequence values must lie in [0, 1)"
        );
        Self {
            values,
            position: 0,
        }
    }

    /// Number of values drawn so far.
    #[inline]
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl UniformSource for FixedSequence {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
