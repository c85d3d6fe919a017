//! CLI error types

use slm_core::types::{SampleError, ValidationError};
use slm_engine::mc::SimulationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `slm` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid sample: {0}")]
    Sample(#[from] SampleError),

    #[error("Simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Sample(err.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
