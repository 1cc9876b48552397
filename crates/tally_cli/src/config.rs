//! CLI configuration management.
//!
//! Handles loading configuration from a TOML file with environment variable
//! override support. Command-line flags are applied on top by `main`.
//!
//! ```toml
//! seed = 42
//! log_level = "info"
//! format = "table"
//!
//! [check]
//! min_length = 1000
//! length_span = 10000
//! bound_floor = 10.0
//! bound_ceiling = 110.0
//! sample_count = 5
//! ```

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use tally_core::pipeline::scenario::{
    DEFAULT_BOUND_CEILING, DEFAULT_BOUND_FLOOR, DEFAULT_LENGTH_SPAN, DEFAULT_MIN_LENGTH,
    DEFAULT_SAMPLE_COUNT,
};
use tally_core::CheckConfig;
use thiserror::Error;

/// Log levels accepted in `log_level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(ConfigFileError::Validation(vec![format!(
                "Invalid format '{}'. Valid values: table, json",
                s
            )])),
        }
    }
}

/// `[check]` section: parameters of the check scenario.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckSection {
    /// Shortest generated sequence
    pub min_length: usize,
    /// Number of distinct lengths above `min_length`
    pub length_span: usize,
    /// Lowest possible lower bound
    pub bound_floor: f64,
    /// Upper limit for both generated bounds
    pub bound_ceiling: f64,
    /// Indices inspected per stage
    pub sample_count: usize,
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            length_span: DEFAULT_LENGTH_SPAN,
            bound_floor: DEFAULT_BOUND_FLOOR,
            bound_ceiling: DEFAULT_BOUND_CEILING,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl CheckSection {
    /// Build the validated core configuration.
    pub fn to_check_config(&self) -> Result<CheckConfig, tally_core::ConfigError> {
        CheckConfig::builder()
            .min_length(self.min_length)
            .length_span(self.length_span)
            .bound_floor(self.bound_floor)
            .bound_ceiling(self.bound_ceiling)
            .sample_count(self.sample_count)
            .build()
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Seed for every random draw; a fresh seed is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Check scenario parameters
    #[serde(default)]
    pub check: CheckSection,

    /// Environment overrides that could not be parsed, reported by `validate`
    #[serde(skip)]
    override_errors: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: default_log_level(),
            format: OutputFormat::default(),
            check: CheckSection::default(),
            override_errors: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigFileError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigFileError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `TALLY_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("TALLY_SEED") {
            match seed.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => self.override_errors.push(format!(
                    "Invalid TALLY_SEED '{}': expected an unsigned integer",
                    seed
                )),
            }
        }

        if let Some(log_level) = lookup("TALLY_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("TALLY_FORMAT") {
            match format.parse() {
                Ok(format) => self.format = format,
                Err(_) => self.override_errors.push(format!(
                    "Invalid TALLY_FORMAT '{}'. Valid values: table, json",
                    format
                )),
            }
        }

        self
    }

    /// Validate the configuration, including any rejected overrides
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        let mut errors = self.override_errors.clone();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Err(e) = self.check.to_check_config() {
            errors.push(format!("[check] {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigFileError::Validation(errors))
        }
    }
}

/// Configuration file error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigFileError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.check.min_length, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
seed = 42
log_level = "debug"
format = "json"

[check]
min_length = 10
length_span = 20
bound_floor = -5.0
bound_ceiling = 5.0
sample_count = 2
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.check.length_span, 20);
        assert_eq!(config.check.bound_floor, -5.0);

        let check = config.check.to_check_config().unwrap();
        assert_eq!(check.sample_count(), 2);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[check]\nsample_count = 9").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.check.sample_count, 9);
        assert_eq!(config.check.min_length, 1000);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = \"not a number\"").unwrap();
        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::default().with_overrides(lookup_from(&[
            ("TALLY_SEED", "7"),
            ("TALLY_LOG_LEVEL", "warn"),
            ("TALLY_FORMAT", "JSON"),
        ]));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_unparseable_overrides_fail_validation() {
        let base = CliConfig {
            seed: Some(3),
            ..CliConfig::default()
        };
        let config = base.with_overrides(lookup_from(&[
            ("TALLY_SEED", "abc"),
            ("TALLY_FORMAT", "xml"),
        ]));
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.format, OutputFormat::Table);

        match config.validate() {
            Err(ConfigFileError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("TALLY_SEED 'abc'"));
                assert!(errors[1].contains("TALLY_FORMAT 'xml'"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_flags_do_not_clear_override_errors() {
        // A later --format flag still leaves the bad env value reported.
        let mut config =
            CliConfig::default().with_overrides(lookup_from(&[("TALLY_FORMAT", "xml")]));
        config.format = OutputFormat::Json;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_collects_errors() {
        let config = CliConfig {
            log_level: "loud".to_string(),
            check: CheckSection {
                length_span: 0,
                ..CheckSection::default()
            },
            ..CliConfig::default()
        };
        match config.validate() {
            Err(ConfigFileError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("loud"));
                assert!(errors[1].contains("length_span"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
