//! CLI error type.

use thiserror::Error;

use crate::config::ConfigFileError;

/// Errors surfaced by the `tally` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Statistics or generation failure from the core.
    #[error(transparent)]
    Stats(#[from] tally_core::StatsError),

    /// Invalid check scenario parameters.
    #[error(transparent)]
    Config(#[from] tally_core::ConfigError),

    /// Configuration file could not be read, parsed or validated.
    #[error(transparent)]
    ConfigFile(#[from] ConfigFileError),

    /// Command-line argument outside its valid domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON rendering failure.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
