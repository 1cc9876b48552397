//! Stats command implementation
//!
//! Describes a sequence with every statistic tally_core offers.

use tally_core::Summary;
use tracing::info;

use super::render_with;
use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Run the stats command
pub fn run(values: &[f64], format: OutputFormat) -> Result<()> {
    info!(count = values.len(), "Describing values");
    println!("{}", render(values, format)?);
    Ok(())
}

/// Render the summary of `values`
///
/// JSON has no encoding for infinities or NaN, so a summary with a
/// non-finite statistic is rejected in JSON format. The table shows it as is.
pub fn render(values: &[f64], format: OutputFormat) -> Result<String> {
    let summary = Summary::from_values(values)?;
    if format == OutputFormat::Json {
        ensure_finite(&summary)?;
    }
    render_with(format, &summary, |s| {
        [
            format!("{:<10} {}", "count", s.count),
            format!("{:<10} {}", "sum", s.sum),
            format!("{:<10} {}", "average", s.average),
            format!("{:<10} {}", "minimum", s.minimum),
            format!("{:<10} {}", "maximum", s.maximum),
            format!("{:<10} {} (x{})", "mode", s.mode.value, s.mode.count),
        ]
        .join("\n")
    })
}

fn ensure_finite(summary: &Summary) -> Result<()> {
    let fields = [
        ("sum", summary.sum),
        ("average", summary.average),
        ("minimum", summary.minimum),
        ("maximum", summary.maximum),
        ("mode", summary.mode.value),
    ];
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(CliError::InvalidArgument(format!(
            "{} is {}, which JSON cannot represent; use --format table",
            name, value
        ))),
        None => Ok(()),
    }
}
