//! Monte Carlo simulation configuration.
//!
//! This module provides [`SimulationConfig`] and its builder, used by
//! [`Simulator::run`](super::Simulator::run) and the command-line driver.

use super::error::SimulationError;

/// Maximum number of realisations allowed per call.
pub const MAX_REALISATIONS: usize = 10_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying how many realisations to draw and,
/// optionally, the seed to draw them with. Use [`SimulationConfigBuilder`] to
/// construct instances.
///
/// # Examples
///
/// ```rust
/// use slm_engine::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .realisations(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.realisations(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of independent realisations.
    realisations: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of realisations.
    #[inline]
    pub fn realisations(&self) -> usize {
        self.realisations
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidRealisationCount`] if `realisations`
    /// is 0 or greater than [`MAX_REALISATIONS`].
    pub fn validate(&self) -> Result<(), SimulationError> {
        validate_realisations(self.realisations)
    }
}

/// Checks a realisation count against [1, MAX_REALISATIONS].
pub(crate) fn validate_realisations(realisations: usize) -> Result<(), SimulationError> {
    if realisations == 0 || realisations > MAX_REALISATIONS {
        return Err(SimulationError::InvalidRealisationCount(realisations));
    }
    Ok(())
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    realisations: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of realisations.
    ///
    /// # Arguments
    ///
    /// * `realisations` - Number of realisations in [1, 10_000_000]
    #[inline]
    pub fn realisations(mut self, realisations: usize) -> Self {
        self.realisations = Some(realisations);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if `realisations` is not set or invalid.
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let realisations = self
            .realisations
            .ok_or(SimulationError::InvalidParameter {
                name: "realisations",
                value: "must be specified".to_string(),
            })?;

        let config = SimulationConfig {
            realisations,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
