//! slm - Command Line Operations for the Stochastic Layer Model
//!
//! Simulates neutron transmission through a sample built from thin layers,
//! each filled at random with one of two materials.
//!
//! # Commands
//!
//! - `slm simulate [--scenario <file>]` - Draw realisations and report attenuation statistics
//! - `slm variance [--scenario <file>]` - Report the per-layer cross-section variance
//! - `slm demo` - Run the reference two-material scenario
//!
//! # Configuration
//!
//! Scenarios are TOML files. `SLM_REALISATIONS`, `SLM_SEED` and
//! `SLM_LOG_LEVEL` override the file; command-line flags override both.
//! `RUST_LOG`, when set, takes precedence over the configured log level.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::OutputFormat;
use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// Stochastic Layer Model CLI
#[derive(Parser)]
#[command(name = "slm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw realisations and report attenuation statistics
    Simulate {
        /// Scenario file (TOML); the reference scenario is used when absent
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Number of realisations
        #[arg(short = 'n', long)]
        realisations: Option<usize>,

        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Report the per-layer cross-section variance
    Variance {
        /// Scenario file (TOML); the reference scenario is used when absent
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },

    /// Run the reference two-material scenario
    Demo {
        /// Number of realisations
        #[arg(short = 'n', long)]
        realisations: Option<usize>,

        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let log_level = self.log_level.clone();
        match &self.command {
            Commands::Simulate {
                scenario,
                realisations,
                seed,
            } => CliArgs {
                scenario_file: scenario.clone(),
                realisations: *realisations,
                seed: *seed,
                log_level,
            },
            Commands::Variance { scenario } => CliArgs {
                scenario_file: scenario.clone(),
                log_level,
                ..CliArgs::default()
            },
            Commands::Demo { realisations, seed } => CliArgs {
                realisations: *realisations,
                seed: *seed,
                log_level,
                ..CliArgs::default()
            },
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());
    info!("slm v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Simulate { .. } => commands::simulate::run(&config, cli.format),
        Commands::Variance { .. } => commands::variance::run(&config, cli.format),
        Commands::Demo { .. } => commands::demo::run(&config, cli.format),
    }
}
