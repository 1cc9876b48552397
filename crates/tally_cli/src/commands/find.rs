//! Find command implementation

use serde::Serialize;
use tally_core::{contains, first_index_of, last_index_of};
use tracing::info;

use super::render_with;
use crate::config::OutputFormat;
use crate::Result;

/// Outcome of a search.
#[derive(Debug, Serialize)]
pub struct FindOutcome {
    /// Searched value
    pub target: f64,
    /// Whether any element equals `target`
    pub contains: bool,
    /// Index of the first match
    pub first_index: Option<usize>,
    /// Index of the last match
    pub last_index: Option<usize>,
}

/// Run the find command
pub fn run(values: &[f64], target: f64, format: OutputFormat) -> Result<()> {
    info!(count = values.len(), target, "Searching values");
    println!("{}", render(values, target, format)?);
    Ok(())
}

/// Render the search outcome
pub fn render(values: &[f64], target: f64, format: OutputFormat) -> Result<String> {
    let outcome = FindOutcome {
        target,
        contains: contains(values, target),
        first_index: first_index_of(values, target),
        last_index: last_index_of(values, target),
    };
    render_with(format, &outcome, |o| match (o.first_index, o.last_index) {
        (Some(first), Some(last)) if first == last => {
            format!("The values have {} at index {}", o.target, first)
        }
        (Some(first), Some(last)) => format!(
            "The values have {} at indices {} (first) and {} (last)",
            o.target, first, last
        ),
        _ => format!("The values do not contain {}", o.target),
    })
}
