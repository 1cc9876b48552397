//! Smooth command implementation

use tally_core::smooth_values;
use tracing::info;

use super::render_with;
use crate::config::OutputFormat;
use crate::Result;

/// Run the smooth command
pub fn run(values: &[f64], format: OutputFormat) -> Result<()> {
    info!(count = values.len(), "Smoothing values");
    println!("{}", render(values, format)?);
    Ok(())
}

/// Render the smoothed integers of `values`
pub fn render(values: &[f64], format: OutputFormat) -> Result<String> {
    let smoothed = smooth_values(values);
    render_with(format, &smoothed, |s| {
        values
            .iter()
            .zip(s)
            .map(|(original, rounded)| format!("{} -> {}", original, rounded))
            .collect::<Vec<_>>()
            .join("\n")
    })
}
