//! Generate-and-transform pipeline.
//!
//! Random values are drawn uniformly from a validated [`ValueRange`] and then
//! "smoothed" into integers with round-half-up rounding.
//!
//! ## Module Structure
//!
//! - [`range`]: Validated `[min, max)` generation bounds
//! - [`generate`]: Filling sequences with random values
//! - [`smooth`]: Round-half-up conversion to integers
//! - [`scenario`]: The end-to-end check run (random length, random range,
//!   generate, smooth, sample)

pub mod generate;
pub mod range;
pub mod scenario;
pub mod smooth;

pub use generate::{assign_random_values, fill_random_values, generate_random_values};
pub use range::ValueRange;
pub use scenario::{run_check, CheckConfig, CheckConfigBuilder, CheckReport};
pub use smooth::{smooth_value, smooth_values};
