//! Simulate command implementation
//!
//! Draws realisations for the configured scenario and prints the
//! attenuation mean and standard deviation per energy bin.

use serde::Serialize;
use slm_engine::mc::{AttenuationStatistics, Simulator};
use tracing::info;

use super::{energy_label, OutputFormat};
use crate::config::ScenarioConfig;
use crate::Result;

/// Summary of one simulation run
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub material_1: String,
    pub material_2: String,
    pub width: f64,
    pub dx: f64,
    pub volume_fraction_1: f64,
    pub volume_fraction_2: f64,
    pub layer_count: f64,
    pub seed: Option<u64>,
    pub statistics: AttenuationStatistics,
    pub std_error: Vec<f64>,
}

/// Run the scenario and collect the report
pub fn simulate(config: &ScenarioConfig) -> Result<SimulationReport> {
    let sample = config.build_sample()?;
    let sim_config = config.simulation_config()?;
    let simulator = Simulator::new(&sample);

    info!(
        realisations = sim_config.realisations(),
        seed = ?sim_config.seed(),
        layers = simulator.layer_count(),
        "Starting attenuation simulation"
    );

    let batch = simulator.run(&sim_config)?;
    let statistics = simulator.get_statistics(&batch);

    info!(realisations = batch.n_realisations(), "Simulation complete");

    Ok(SimulationReport {
        material_1: sample.material_1().name().to_string(),
        material_2: sample.material_2().name().to_string(),
        width: sample.width(),
        dx: sample.dx(),
        volume_fraction_1: sample.volume_fraction_1(),
        volume_fraction_2: sample.volume_fraction_2(),
        layer_count: simulator.layer_count(),
        seed: sim_config.seed(),
        std_error: statistics.std_error(),
        statistics,
    })
}

/// Run the simulate command
pub fn run(config: &ScenarioConfig, format: OutputFormat) -> Result<()> {
    let report = simulate(config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report),
    }
    Ok(())
}

fn print_table(report: &SimulationReport) {
    let stats = &report.statistics;
    println!(
        "\n{} (f1 = {}) / {} (f2 = {}), width = {}, dx = {}, n = {}, N = {}",
        report.material_1,
        report.volume_fraction_1,
        report.material_2,
        report.volume_fraction_2,
        report.width,
        report.dx,
        report.layer_count,
        stats.n_realisations()
    );
    println!("┌────────────┬──────────────┬──────────────┬──────────────┐");
    println!("│ Energy     │ Mean A       │ Std A        │ Std error    │");
    println!("├────────────┼──────────────┼──────────────┼──────────────┤");
    for bin in 0..stats.mean().len() {
        println!(
            "│ {:<10} │ {:>12.6} │ {:>12.6} │ {:>12.3e} │",
            energy_label(stats.energy(), bin),
            stats.mean()[bin],
            stats.std()[bin],
            report.std_error[bin]
        );
    }
    println!("└────────────┴──────────────┴──────────────┴──────────────┘");
}
