//! Variance command implementation
//!
//! Prints the variance of the per-layer cross section without drawing
//! any realisations.

use serde::Serialize;
use slm_core::types::EnergySeries;
use tracing::info;

use super::{energy_label, OutputFormat};
use crate::config::ScenarioConfig;
use crate::Result;

/// Per-layer cross-section variance of a scenario
#[derive(Debug, Serialize)]
pub struct VarianceReport {
    pub volume_fraction_1: f64,
    pub volume_fraction_2: f64,
    pub variance: EnergySeries,
}

/// Compute the variance spectrum for the scenario's sample
pub fn variance(config: &ScenarioConfig) -> Result<VarianceReport> {
    let sample = config.build_sample()?;
    let variance = sample.layer_xs_variance_spectrum()?;

    info!(bins = variance.len(), "Computed layer cross-section variance");

    Ok(VarianceReport {
        volume_fraction_1: sample.volume_fraction_1(),
        volume_fraction_2: sample.volume_fraction_2(),
        variance,
    })
}

/// Run the variance command
pub fn run(config: &ScenarioConfig, format: OutputFormat) -> Result<()> {
    let report = variance(config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => {
            println!(
                "\nLayer cross-section variance (f1 = {}, f2 = {})",
                report.volume_fraction_1, report.volume_fraction_2
            );
            println!("┌────────────┬──────────────┐");
            println!("│ Energy     │ Var(σ)       │");
            println!("├────────────┼──────────────┤");
            for (bin, value) in report.variance.values().iter().enumerate() {
                println!(
                    "│ {:<10} │ {:>12.6e} │",
                    energy_label(report.variance.energy(), bin),
                    value
                );
            }
            println!("└────────────┴──────────────┘");
        }
    }
    Ok(())
}
