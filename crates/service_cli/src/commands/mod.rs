//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod demo;
pub mod simulate;
pub mod variance;

use clap::ValueEnum;

/// Output format shared by all commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Format an energy coordinate for table output
pub(crate) fn energy_label(energy: Option<&[f64]>, bin: usize) -> String {
    match energy {
        Some(axis) => format!("{:.3e}", axis[bin]),
        None => format!("#{}", bin),
    }
}
