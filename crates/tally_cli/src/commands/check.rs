//! Check command implementation
//!
//! Runs the generate-and-smooth scenario: a random-length sequence is filled
//! from a random range, a few indices are inspected, the sequence is
//! smoothed, and a few more indices are inspected.
//!
//! # Expected Output
//!
//! ```text
//! Minimum: 47.11...
//! Maximum: 93.05...
//! After assigning values:
//! Index 812 is 61.27...
//! ...
//! After smoothing values:
//! Index 4410 was 88.64... and is now 89
//! ...
//! ```

use serde::Serialize;
use tally_core::{run_check, CheckConfig, CheckReport};
use tracing::info;

use super::{render_with, seeded_rng};
use crate::config::OutputFormat;
use crate::Result;

/// Value inspected after generation.
#[derive(Debug, Serialize)]
pub struct AssignedSample {
    /// Position in the sequence
    pub index: usize,
    /// Generated value
    pub value: f64,
}

/// Value inspected after smoothing.
#[derive(Debug, Serialize)]
pub struct SmoothedSample {
    /// Position in the sequence
    pub index: usize,
    /// Generated value
    pub original: f64,
    /// Round-half-up integer
    pub smoothed: i64,
}

/// Printable view of a check report.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    /// Seed of the random source
    pub seed: Option<u64>,
    /// Generated sequence length
    pub length: usize,
    /// Lower bound of the drawn range
    pub minimum: f64,
    /// Upper bound of the drawn range
    pub maximum: f64,
    /// Indices inspected after generation
    pub assigned: Vec<AssignedSample>,
    /// Indices inspected after smoothing
    pub smoothed: Vec<SmoothedSample>,
}

impl CheckOutcome {
    /// Collect the inspected samples of `report`
    pub fn from_report(report: &CheckReport, seed: Option<u64>) -> Self {
        Self {
            seed,
            length: report.len(),
            minimum: report.range().min(),
            maximum: report.range().max(),
            assigned: report
                .assigned_samples()
                .map(|(index, value)| AssignedSample { index, value })
                .collect(),
            smoothed: report
                .smoothed_samples()
                .map(|(index, original, smoothed)| SmoothedSample {
                    index,
                    original,
                    smoothed,
                })
                .collect(),
        }
    }
}

/// Run the check command
pub fn run(config: &CheckConfig, seed: Option<u64>, format: OutputFormat) -> Result<()> {
    info!(
        min_length = config.min_length(),
        length_span = config.length_span(),
        "Starting check run"
    );
    let mut rng = seeded_rng(seed);
    let report = run_check(config, &mut rng)?;
    info!(length = report.len(), "Check run complete");

    let outcome = CheckOutcome::from_report(&report, Some(rng.seed()));
    println!("{}", render(&outcome, format)?);
    Ok(())
}

/// Render a check outcome
pub fn render(outcome: &CheckOutcome, format: OutputFormat) -> Result<String> {
    render_with(format, outcome, |o| {
        let mut lines = vec![
            format!("Minimum: {}", o.minimum),
            format!("Maximum: {}", o.maximum),
            "After assigning values:".to_string(),
        ];
        lines.extend(
            o.assigned
                .iter()
                .map(|s| format!("Index {} is {}", s.index, s.value)),
        );
        lines.push("After smoothing values:".to_string());
        lines.extend(o.smoothed.iter().map(|s| {
            format!(
                "Index {} was {} and is now {}",
                s.index, s.original, s.smoothed
            )
        }));
        lines.join("\n")
    })
}
