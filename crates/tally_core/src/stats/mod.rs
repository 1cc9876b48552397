//! Descriptive statistics over numeric slices.
//!
//! All statistics reject empty input with
//! [`StatsError::EmptyInput`](crate::StatsError::EmptyInput) rather than
//! returning `0` or `NaN`. Floating-point comparisons are exact (`==`, `<`,
//! `>`); no tolerance is applied anywhere in this module.
//!
//! ## Module Structure
//!
//! - [`descriptive`]: `sum`, `average`, `minimum`, `maximum`
//! - [`mode`](mod@mode): most frequent value via nested exact-equality scan
//! - [`search`]: linear search by exact equality
//! - [`summary`]: all statistics of an `f64` slice at once

pub mod descriptive;
pub mod mode;
pub mod search;
pub mod summary;

pub use descriptive::{average, maximum, minimum, sum, Summable};
pub use mode::{mode, mode_count, Mode};
pub use search::{contains, first_index_of, last_index_of};
pub use summary::Summary;
