//! CLI command implementations
//!
//! Each submodule implements a specific CLI command as a `run` entry point
//! plus a pure `render` function that produces the printed text.

pub mod check;
pub mod find;
pub mod generate;
pub mod smooth;
pub mod stats;

use tally_core::SeededRng;
use tracing::info;

use crate::config::OutputFormat;
use crate::Result;

/// Builds the random source for a command, logging the seed so the run can
/// be replayed with `--seed`.
pub(crate) fn seeded_rng(seed: Option<u64>) -> SeededRng {
    let rng = match seed {
        Some(seed) => SeededRng::from_seed(seed),
        None => SeededRng::from_random_seed(),
    };
    info!(seed = rng.seed(), "random source initialised");
    rng
}

/// Renders `value` as pretty JSON, or with `table` otherwise.
pub(crate) fn render_with<T, F>(format: OutputFormat, value: &T, table: F) -> Result<String>
where
    T: serde::Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table(value)),
    }
}
