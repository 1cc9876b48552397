//! # tally_core: Array Statistics and Transform Utilities
//!
//! ## Core Layer Role
//!
//! tally_core is the bottom layer of the workspace, providing:
//! - Descriptive statistics over numeric slices (`stats`)
//! - Exact-equality linear search (`stats::search`)
//! - An injectable uniform random source (`rng`)
//! - The generate-and-smooth pipeline and the check scenario (`pipeline`)
//! - Error types: `StatsError`, `ConfigError` (`error`)
//!
//! ## Determinism
//!
//! No function in this crate touches a process-wide random generator. Every
//! generating function takes `&mut impl UniformSource`, so callers decide
//! whether values come from a seeded [`SeededRng`] or a replayed
//! [`FixedSequence`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use tally_core::{average, mode, smooth_values, generate_random_values};
//! use tally_core::{SeededRng, ValueRange};
//!
//! let nums = [1.0, 2.0, 2.0, 3.0];
//! assert_eq!(average(&nums).unwrap(), 2.0);
//!
//! let m = mode(&nums).unwrap();
//! assert_eq!((m.value, m.count), (2.0, 2));
//!
//! let mut rng = SeededRng::from_seed(42);
//! let range = ValueRange::new(10.0, 20.0).unwrap();
//! let values = generate_random_values(100, range, &mut rng);
//! let smoothed = smooth_values(&values);
//! assert!(smoothed.iter().all(|&v| (10..=20).contains(&v)));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Summary`, `Mode` and `ValueRange`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod pipeline;
pub mod rng;
pub mod stats;

pub use error::{ConfigError, StatsError};
pub use pipeline::{
    assign_random_values, fill_random_values, generate_random_values, run_check, smooth_value,
    smooth_values, CheckConfig, CheckConfigBuilder, CheckReport, ValueRange,
};
pub use rng::{FixedSequence, SeededRng, UniformSource};
pub use stats::{
    average, contains, first_index_of, last_index_of, maximum, minimum, mode, mode_count, sum,
    Mode, Summable, Summary,
};
