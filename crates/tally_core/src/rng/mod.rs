//! # Random Number Generation Infrastructure
//!
//! This module provides the uniform random source that every generating
//! function in the crate draws from.
//!
//! ## Design Rationale
//!
//! - **Injection**: Generators are passed explicitly as `&mut impl UniformSource`;
//!   there is no process-wide generator
//! - **Reproducibility**: [`SeededRng`] records its seed so any run can be replayed
//! - **Replay**: [`FixedSequence`] yields a scripted sequence of unit values,
//!   giving exact expected outputs in tests
//!
//! ## Module Structure
//!
//! - [`source`]: The [`UniformSource`] trait
//! - [`prng`]: Seeded PRNG wrapper around `rand::rngs::StdRng`
//! - [`fixed`]: Scripted cyclic sequence
//!
//! ## Usage Example
//!
//! ```rust
//! use tally_core::rng::{SeededRng, UniformSource};
//!
//! let mut rng = SeededRng::from_seed(12345);
//! let u = rng.next_unit();
//! assert!((0.0..1.0).contains(&u));
//! ```

pub mod fixed;
pub mod prng;
pub mod source;

pub use fixed::FixedSequence;
pub use prng::SeededRng;
pub use source::UniformSource;
