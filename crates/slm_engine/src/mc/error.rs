//! Error types for the Monte Carlo attenuation kernel.
//!
//! Configuration problems are reported when a [`SimulationConfig`] is built;
//! sample and random-draw problems are reported by the simulator itself.
//!
//! [`SimulationConfig`]: super::config::SimulationConfig

use rand_distr::BinomialError;
use slm_core::types::{SampleError, ShapeError};
use thiserror::Error;

use super::config::MAX_REALISATIONS;

/// Error returned by simulation and configuration routines.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Realisation count outside valid range [1, MAX_REALISATIONS].
    #[error("Invalid realisation count {0}: must be in range [1, {max}]", max = MAX_REALISATIONS)]
    InvalidRealisationCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// The sample's cross sections could not be combined.
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// The layer-count distribution rejected its parameters.
    #[error("Invalid binomial parameters: {0}")]
    Binomial(#[from] BinomialError),
}

impl From<ShapeError> for SimulationError {
    fn from(err: ShapeError) -> Self {
        Self::Sample(SampleError::Shape(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_error_display() {
        let err = SimulationError::InvalidRealisationCount(0);
        assert!(err.to_string().contains("Invalid realisation count 0"));

        let err = SimulationError::InvalidParameter {
            name: "layer_count",
            value: "must be finite".to_string(),
        };
        assert!(err.to_string().contains("layer_count"));
    }

    #[test]
    fn test_shape_error_wraps_as_sample_error() {
        let err: SimulationError = ShapeError::LengthMismatch { left: 1, right: 2 }.into();
        assert!(matches!(
            err,
            SimulationError::Sample(SampleError::Shape(ShapeError::LengthMismatch { .. }))
        ));
        assert!(err.to_string().contains("dimension mismatch"));
    }
}
