//! Generate command implementation
//!
//! Draws uniformly distributed values and optionally smooths them.

use serde::Serialize;
use tally_core::pipeline::scenario::MAX_LENGTH;
use tally_core::{assign_random_values, smooth_values, UniformSource};
use tracing::info;

use super::{render_with, seeded_rng};
use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Generated values with the parameters needed to reproduce them.
#[derive(Debug, Serialize)]
pub struct Generated {
    /// Seed of the random source
    pub seed: Option<u64>,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Drawn values
    pub values: Vec<f64>,
    /// Round-half-up integers, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothed: Option<Vec<i64>>,
}

/// Run the generate command
pub fn run(
    length: usize,
    min: f64,
    max: f64,
    smooth: bool,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    info!(length, min, max, smooth, "Generating values");
    let mut rng = seeded_rng(seed);
    let generated = generate(length, min, max, smooth, &mut rng)?;
    let generated = Generated {
        seed: Some(rng.seed()),
        ..generated
    };
    println!("{}", render(&generated, format)?);
    Ok(())
}

/// Draw `length` values from `[min, max)` using `rng`
pub fn generate<S: UniformSource>(
    length: usize,
    min: f64,
    max: f64,
    smooth: bool,
    rng: &mut S,
) -> Result<Generated> {
    if length > MAX_LENGTH {
        return Err(CliError::InvalidArgument(format!(
            "length {} exceeds maximum {}",
            length, MAX_LENGTH
        )));
    }
    let values = assign_random_values(vec![0.0; length], min, max, rng)?;
    let smoothed = smooth.then(|| smooth_values(&values));
    Ok(Generated {
        seed: None,
        min,
        max,
        values,
        smoothed,
    })
}

/// Render generated values
pub fn render(generated: &Generated, format: OutputFormat) -> Result<String> {
    render_with(format, generated, |g| {
        let rows = g.values.iter().enumerate().map(|(i, value)| {
            match g.smoothed.as_ref().and_then(|s| s.get(i)) {
                Some(rounded) => format!("{:>8} {} -> {}", i, value, rounded),
                None => format!("{:>8} {}", i, value),
            }
        });
        std::iter::once(format!("Minimum: {}\nMaximum: {}", g.min, g.max))
            .chain(rows)
            .collect::<Vec<_>>()
            .join("\n")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{FixedSequence, StatsError};

    #[test]
    fn test_generate_with_fixed_source() {
        let mut rng = FixedSequence::new(vec![0.25, 0.5]);
        let generated = generate(3, 0.0, 4.0, true, &mut rng).unwrap();
        assert_eq!(generated.values, vec![1.0, 2.0, 1.0]);
        assert_eq!(generated.smoothed, Some(vec![1, 2, 1]));
    }

    #[test]
    fn test_generate_without_smoothing() {
        let mut rng = FixedSequence::new(vec![0.5]);
        let generated = generate(2, 10.0, 10.0, false, &mut rng).unwrap();
        assert_eq!(generated.values, vec![10.0, 10.0]);
        assert!(generated.smoothed.is_none());
    }

    #[test]
    fn test_generate_inverted_range_is_error() {
        let mut rng = FixedSequence::new(vec![0.5]);
        let err = generate(2, 5.0, 1.0, false, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            CliError::Stats(StatsError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_generate_rejects_unbounded_range() {
        let mut rng = FixedSequence::new(vec![0.5]);
        let err = generate(2, -1e308, 1e308, false, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            CliError::Stats(StatsError::InvalidRange { .. })
        ));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_generate_rejects_huge_length() {
        let mut rng = FixedSequence::new(vec![0.5]);
        let err = generate(MAX_LENGTH + 1, 0.0, 1.0, false, &mut rng).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_render_table() {
        let mut rng = FixedSequence::new(vec![0.5]);
        let generated = generate(2, 0.0, 3.0, true, &mut rng).unwrap();
        let out = render(&generated, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Minimum: 0");
        assert_eq!(lines[1], "Maximum: 3");
        assert_eq!(lines[2], "       0 1.5 -> 2");
        assert_eq!(lines[3], "       1 1.5 -> 2");
    }

    #[test]
    fn test_render_json_omits_missing_smoothing() {
        let mut rng = FixedSequence::new(vec![0.5]);
        let generated = generate(1, 0.0, 2.0, false, &mut rng).unwrap();
        let out = render(&generated, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["values"][0], 1.0);
        assert!(json.get("smoothed").is_none());
    }
}
