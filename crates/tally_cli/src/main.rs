//! Tally CLI - Command Line Front End for Array Statistics
//!
//! This is the operational entry point for the tally_core library.
//!
//! # Commands
//!
//! - `tally stats <VALUES>...` - Describe a sequence (sum, average, min, max, mode)
//! - `tally find --target <X> <VALUES>...` - Search a sequence by exact equality
//! - `tally generate --length <N> --min <A> --max <B>` - Draw random values
//! - `tally smooth <VALUES>...` - Round values half-up to integers
//! - `tally check` - Run the generate-and-smooth check scenario
//!
//! Logs go to stderr so that stdout carries only command output.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// Tally array statistics CLI
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "tally.toml")]
    config: String,

    /// Seed for random draws (overrides config and TALLY_SEED)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Output format (overrides config and TALLY_FORMAT); JSON rejects non-finite results
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a sequence: count, sum, average, minimum, maximum, mode
    Stats {
        /// Values to describe
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Search a sequence for a value by exact equality
    Find {
        /// Value to search for
        #[arg(short, long, allow_negative_numbers = true)]
        target: f64,

        /// Values to search
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Draw uniformly distributed values from [min, max)
    Generate {
        /// Number of values
        #[arg(short, long)]
        length: usize,

        /// Lower bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        /// Upper bound (exclusive)
        #[arg(long, allow_negative_numbers = true)]
        max: f64,

        /// Also print the round-half-up integers
        #[arg(long)]
        smooth: bool,
    },

    /// Round values half-up to integers
    Smooth {
        /// Values to smooth
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Run the generate-and-smooth check scenario
    Check,
}

fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load_or_default(Path::new(&cli.config))?.with_env_override();
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.validate()?;

    init_tracing(&config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Stats { values } => commands::stats::run(&values, config.format),
        Commands::Find { target, values } => commands::find::run(&values, target, config.format),
        Commands::Generate {
            length,
            min,
            max,
            smooth,
        } => commands::generate::run(length, min, max, smooth, config.seed, config.format),
        Commands::Smooth { values } => commands::smooth::run(&values, config.format),
        Commands::Check => {
            let check = config.check.to_check_config()?;
            commands::check::run(&check, config.seed, config.format)
        }
    }
}
