//! The uniform source abstraction.

use rand::rngs::StdRng;
use rand::Rng;

/// Source of uniformly distributed `f64` values in `[0, 1)`.
///
/// Generating functions take `&mut impl UniformSource` instead of reaching
/// for a global generator. Production code passes a [`SeededRng`]; tests and
/// replays pass a [`FixedSequence`].
///
/// [`SeededRng`]: super::SeededRng
/// [`FixedSequence`]: super::FixedSequence
pub trait UniformSource {
    /// Returns the next value, which must lie in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl UniformSource for StdRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
