//! Scenario configuration management
//!
//! Loads a scenario from a TOML file, then applies environment variables and
//! command-line overrides.
//!
//! # Example scenario
//!
//! ```toml
//! log_level = "info"
//!
//! [sample]
//! width = 1.0
//! dx = 0.1
//! volume_fraction_1 = 0.5
//!
//! [material_1]
//! name = "A"
//! cross_section = [0.1]
//! energy = [1.0e6]
//!
//! [material_2]
//! name = "B"
//! cross_section = 0.05
//!
//! [simulation]
//! realisations = 1000
//! seed = 42
//! ```

use serde::Deserialize;
use slm_core::material::Material;
use slm_core::sample::{LayeredSample, DEFAULT_VOLUME_FRACTION};
use slm_core::types::{EnergySeries, SampleError};
use slm_engine::mc::{SimulationConfig, SimulationError};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Default realisation count when none is configured.
pub const DEFAULT_REALISATIONS: usize = 1000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Cross section as written in a scenario: a bare number or a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CrossSectionValues {
    Scalar(f64),
    Values(Vec<f64>),
}

/// One material of the scenario
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaterialConfig {
    #[serde(default)]
    pub name: String,
    pub cross_section: CrossSectionValues,
    /// Optional energy coordinates, one per cross-section value
    #[serde(default)]
    pub energy: Option<Vec<f64>>,
}

impl MaterialConfig {
    /// Build the material, attaching energy coordinates when given
    pub fn to_material(&self) -> Result<Material, SampleError> {
        let values = match &self.cross_section {
            CrossSectionValues::Scalar(value) => vec![*value],
            CrossSectionValues::Values(values) => values.clone(),
        };
        let cross_section = match (&self.energy, &self.cross_section) {
            (Some(energy), _) => EnergySeries::with_energy(energy.clone(), values)?,
            (None, CrossSectionValues::Scalar(value)) => EnergySeries::scalar(*value),
            (None, CrossSectionValues::Values(_)) => EnergySeries::unlabelled(values),
        };
        Ok(Material::new(self.name.clone(), cross_section))
    }
}

/// Sample geometry and mixing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SampleConfig {
    pub width: f64,
    pub dx: f64,
    #[serde(default = "default_volume_fraction")]
    pub volume_fraction_1: f64,
}

fn default_volume_fraction() -> f64 {
    DEFAULT_VOLUME_FRACTION
}

/// Monte Carlo settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    pub realisations: usize,
    pub seed: Option<u64>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            realisations: DEFAULT_REALISATIONS,
            seed: None,
        }
    }
}

/// Complete scenario configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioConfig {
    pub sample: SampleConfig,
    pub material_1: MaterialConfig,
    pub material_2: MaterialConfig,
    #[serde(default)]
    pub simulation: SimulationSection,
    #[serde(default, deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

impl ScenarioConfig {
    /// Reference scenario: σ1 = 0.1, σ2 = 0.05 at 1 MeV, width 1, dx 0.1, f1 = 0.5
    pub fn reference() -> Self {
        let material = |name: &str, sigma: f64| MaterialConfig {
            name: name.to_string(),
            cross_section: CrossSectionValues::Values(vec![sigma]),
            energy: Some(vec![1.0e6]),
        };
        Self {
            sample: SampleConfig {
                width: 1.0,
                dx: 0.1,
                volume_fraction_1: 0.5,
            },
            material_1: material("A", 0.1),
            material_2: material("B", 0.05),
            simulation: SimulationSection::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Parse a scenario from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load a scenario from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `SLM_REALISATIONS`, `SLM_SEED` and `SLM_LOG_LEVEL`
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SLM_REALISATIONS") {
            self.simulation.realisations =
                value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    name: "SLM_REALISATIONS",
                    value,
                })?;
        }
        if let Some(value) = lookup("SLM_SEED") {
            self.simulation.seed =
                Some(value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    name: "SLM_SEED",
                    value,
                })?);
        }
        if let Some(value) = lookup("SLM_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&value)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(realisations) = cli.realisations {
            self.simulation.realisations = realisations;
        }
        if let Some(seed) = cli.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }

    /// Build the validated layered sample
    pub fn build_sample(&self) -> Result<LayeredSample, SampleError> {
        let sample = LayeredSample::new(
            self.sample.width,
            self.sample.dx,
            self.material_1.to_material()?,
            self.material_2.to_material()?,
            self.sample.volume_fraction_1,
        )?;
        Ok(sample)
    }

    /// Build the engine's simulation config
    pub fn simulation_config(&self) -> Result<SimulationConfig, SimulationError> {
        SimulationConfig::builder()
            .realisations(self.simulation.realisations)
            .maybe_seed(self.simulation.seed)
            .build()
    }
}

/// CLI overrides
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Scenario file; the reference scenario is used when absent
    pub scenario_file: Option<std::path::PathBuf>,
    pub realisations: Option<usize>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Scenario file
/// 4. Reference scenario defaults
pub fn build_config(cli: &CliArgs) -> Result<ScenarioConfig, ConfigError> {
    let mut config = match &cli.scenario_file {
        Some(path) => ScenarioConfig::from_file(path)?,
        None => ScenarioConfig::reference(),
    };
    config.apply_env()?;
    config.merge_with_cli(cli)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SCENARIO: &str = r#"
log_level = "debug"

[sample]
width = 2.0
dx = 0.25
volume_fraction_1 = 0.3

[material_1]
name = "A"
cross_section = [0.4, 0.1]
energy = [1.0e5, 1.0e6]

[material_2]
name = "B"
cross_section = 0.05

[simulation]
realisations = 500
"#;

    #[test]
    fn test_parse_scenario() {
        let config = ScenarioConfig::from_toml_str(SCENARIO).unwrap();

        assert_eq!(config.sample.width, 2.0);
        assert_eq!(config.sample.volume_fraction_1, 0.3);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.simulation.realisations, 500);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(
            config.material_2.cross_section,
            CrossSectionValues::Scalar(0.05)
        );
    }

    #[test]
    fn test_defaults() {
        let config = ScenarioConfig::from_toml_str(
            r#"
[sample]
width = 1.0
dx = 0.1

[material_1]
cross_section = 0.1

[material_2]
cross_section = 0.05
"#,
        )
        .unwrap();

        assert_eq!(config.sample.volume_fraction_1, DEFAULT_VOLUME_FRACTION);
        assert_eq!(config.simulation, SimulationSection::default());
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.material_1.name, "");
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = ScenarioConfig::from_toml_str(
            r#"
log_level = "loud"
[sample]
width = 1.0
dx = 0.1
[material_1]
cross_section = 0.1
[material_2]
cross_section = 0.05
"#,
        );
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_log_level_filter_round_trip() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(LogLevel::from_str(level.as_filter_str()).unwrap(), level);
        }
    }

    #[test]
    fn test_build_sample() {
        let config = ScenarioConfig::from_toml_str(SCENARIO).unwrap();
        let sample = config.build_sample().unwrap();

        assert_eq!(sample.material_1().cross_section().len(), 2);
        assert!(sample.material_2().cross_section().is_scalar());
        assert!((sample.volume_fraction_2() - 0.7).abs() < 1e-15);
    }

    #[test]
    fn test_build_sample_rejects_bad_energy_axis() {
        let mut config = ScenarioConfig::reference();
        config.material_1.energy = Some(vec![1.0, 2.0]);
        assert!(matches!(config.build_sample(), Err(SampleError::Shape(_))));
    }

    #[test]
    fn test_build_sample_rejects_bad_fraction() {
        let mut config = ScenarioConfig::reference();
        config.sample.volume_fraction_1 = 1.5;
        assert!(matches!(
            config.build_sample(),
            Err(SampleError::Validation(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [("SLM_SEED", "17"), ("SLM_LOG_LEVEL", "WARN")]
            .into_iter()
            .collect();
        let mut config = ScenarioConfig::reference();
        config
            .apply_vars(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.simulation.seed, Some(17));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.simulation.realisations, DEFAULT_REALISATIONS);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let mut config = ScenarioConfig::reference();
        let result = config.apply_vars(|key| {
            (key == "SLM_REALISATIONS").then(|| "many".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "SLM_REALISATIONS",
                ..
            })
        ));
    }

    #[test]
    fn test_cli_takes_precedence() {
        let mut config = ScenarioConfig::from_toml_str(SCENARIO).unwrap();
        let cli = CliArgs {
            realisations: Some(12),
            seed: Some(3),
            log_level: Some("error".to_string()),
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.simulation.realisations, 12);
        assert_eq!(config.simulation.seed, Some(3));
        assert_eq!(config.log_level, LogLevel::Error);

        let engine_config = config.simulation_config().unwrap();
        assert_eq!(engine_config.realisations(), 12);
        assert_eq!(engine_config.seed(), Some(3));
    }

    #[test]
    fn test_zero_realisations_rejected_by_engine() {
        let mut config = ScenarioConfig::reference();
        config.simulation.realisations = 0;
        assert!(config.simulation_config().is_err());
    }
}
