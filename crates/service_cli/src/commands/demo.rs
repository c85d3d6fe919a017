//! Demo command for the two-material reference sample.
//!
//! Runs the reference scenario (σ1 = 0.1, σ2 = 0.05 at 1 MeV, width 1,
//! dx 0.1, f1 = 0.5) and compares the simulated mean attenuation with the
//! exact expectation over the binomial layer count:
//!
//! ```text
//! E[A] = (f1·exp(-σ1·w/n) + f2·exp(-σ2·w/n))^n
//! ```
//!
//! Environment and command-line overrides (realisations, seed) still apply.

use serde::Serialize;
use slm_core::sample::LayeredSample;
use slm_core::types::SampleError;

use super::simulate::{self, SimulationReport};
use super::variance::{self, VarianceReport};
use super::{energy_label, OutputFormat};
use crate::config::ScenarioConfig;
use crate::Result;

/// Exact mean attenuation per energy bin.
fn expected_mean(
    sample: &LayeredSample,
    layer_count: f64,
) -> std::result::Result<Vec<f64>, SampleError> {
    let aligned = sample
        .material_1()
        .cross_section()
        .align(sample.material_2().cross_section())?;
    let thickness = sample.width() / layer_count;

    Ok(aligned
        .left
        .iter()
        .zip(&aligned.right)
        .map(|(sigma_1, sigma_2)| {
            let per_layer = sample.volume_fraction_1() * (-sigma_1 * thickness).exp()
                + sample.volume_fraction_2() * (-sigma_2 * thickness).exp();
            per_layer.powf(layer_count)
        })
        .collect())
}

/// Variance, simulation and exact mean for one scenario
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub variance: VarianceReport,
    pub simulation: SimulationReport,
    pub expected_mean: Vec<f64>,
}

/// Runs the reference demonstration.
pub fn run(config: &ScenarioConfig, format: OutputFormat) -> Result<()> {
    let sample = config.build_sample()?;
    let simulation = simulate::simulate(config)?;
    let report = DemoReport {
        variance: variance::variance(config)?,
        expected_mean: expected_mean(&sample, simulation.layer_count)?,
        simulation,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report),
    }
    Ok(())
}

fn print_table(report: &DemoReport) {
    let stats = &report.simulation.statistics;

    println!("========================================");
    println!("Stochastic Layer Model Demo");
    println!("========================================");
    println!();
    println!(
        "Layers: {}, f1 = {}, f2 = {}",
        report.simulation.layer_count,
        report.variance.volume_fraction_1,
        report.variance.volume_fraction_2
    );
    println!(
        "\nSimulated vs expected mean ({} realisations)",
        stats.n_realisations()
    );
    println!("┌────────────┬──────────────┬──────────────┬──────────────┬──────────────┐");
    println!("│ Energy     │ Var(σ)       │ Simulated    │ Expected     │ |Δ| / SE     │");
    println!("├────────────┼──────────────┼──────────────┼──────────────┼──────────────┤");
    for (bin, expected) in report.expected_mean.iter().enumerate() {
        let z = (stats.mean()[bin] - expected).abs() / report.simulation.std_error[bin];
        println!(
            "│ {:<10} │ {:>12.4e} │ {:>12.6} │ {:>12.6} │ {:>12.2} │",
            energy_label(stats.energy(), bin),
            report.variance.variance.values()[bin],
            stats.mean()[bin],
            expected,
            z
        );
    }
    println!("└────────────┴──────────────┴──────────────┴──────────────┴──────────────┘");
    println!();
    println!("[Demo] Complete!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_expected_mean_reference() {
        let sample = ScenarioConfig::reference().build_sample().unwrap();
        let expected = expected_mean(&sample, 10.0).unwrap();

        let reference = (-0.05_f64).exp() * (0.5 + 0.5 * (-0.005_f64).exp()).powi(10);
        assert_relative_eq!(expected[0], reference, max_relative = 1e-12);
    }

    #[test]
    fn test_expected_mean_homogeneous() {
        let mut config = ScenarioConfig::reference();
        config.sample.volume_fraction_1 = 1.0;
        let sample = config.build_sample().unwrap();

        let expected = expected_mean(&sample, 10.0).unwrap();
        assert_relative_eq!(expected[0], (-0.1_f64).exp(), max_relative = 1e-12);
    }

    #[test]
    fn test_demo_runs() {
        let mut config = ScenarioConfig::reference();
        config.simulation.seed = Some(3);
        config.simulation.realisations = 100;
        assert!(run(&config, OutputFormat::Table).is_ok());
        assert!(run(&config, OutputFormat::Json).is_ok());
    }
}
