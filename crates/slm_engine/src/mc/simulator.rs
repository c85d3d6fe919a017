//! Monte Carlo attenuation simulator.
//!
//! # Algorithm
//!
//! For a sample of width `w`, nominal layer thickness `dx` and material-1
//! volume fraction `f1`:
//!
//! 1. `n = ceil(w / dx)` layers span the sample.
//! 2. Each realisation draws `k ~ Binomial(n, f1)` material-1 layers; the
//!    remaining `n - k` are material 2.
//! 3. `σ_eff = (k σ1 + (n - k) σ2) / n`, elementwise over the energy axis.
//! 4. `A = exp(-σ_eff w)`.
//!
//! Only the aggregate layer count is sampled; layer positions play no role.

use rand::Rng;
use slm_core::sample::LayeredSample;
use tracing::debug;

use super::batch::AttenuationBatch;
use super::config::{validate_realisations, SimulationConfig};
use super::error::SimulationError;
use super::statistics::AttenuationStatistics;
use crate::rng::{fill_binomial, SimRng};

/// Largest layer count the binomial sampler accepts (its exponent is an `i32`).
const MAX_LAYER_COUNT: f64 = i32::MAX as f64;

/// Simulator for stochastic layered media attenuation.
///
/// Borrows its sample for its whole lifetime and keeps no other state; each
/// call draws fresh randomness.
///
/// # Examples
///
/// ```rust
/// use slm_core::material::Material;
/// use slm_core::sample::LayeredSample;
/// use slm_engine::mc::Simulator;
///
/// let sample = LayeredSample::new(
///     1.0,
///     0.1,
///     Material::new("A", 0.1),
///     Material::new("B", 0.05),
///     0.5,
/// )
/// .unwrap();
///
/// let simulator = Simulator::new(&sample);
/// let batch = simulator.simulate_attenuation(1000).unwrap();
/// let stats = simulator.get_statistics(&batch);
///
/// assert_eq!(batch.shape(), (1000, 1));
/// assert!(stats.mean()[0] > 0.0 && stats.mean()[0] <= 1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Simulator<'a> {
    sample: &'a LayeredSample,
}

impl<'a> Simulator<'a> {
    /// Creates a simulator over `sample`.
    #[inline]
    pub fn new(sample: &'a LayeredSample) -> Self {
        Self { sample }
    }

    /// Returns the simulated sample.
    #[inline]
    pub fn sample(&self) -> &'a LayeredSample {
        self.sample
    }

    /// Number of microscopic layers spanning the sample, `ceil(width / dx)`.
    #[inline]
    pub fn layer_count(&self) -> f64 {
        (self.sample.width() / self.sample.dx()).ceil()
    }

    /// Simulates `size` independent realisations with fresh entropy.
    ///
    /// The seed drawn for the call is logged at `debug` level.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidRealisationCount`] if `size` is 0 or too large
    /// - [`SimulationError::Sample`] if the cross sections cannot be aligned
    /// - [`SimulationError::InvalidParameter`] if the layer count is below 1 or
    ///   above `i32::MAX`
    pub fn simulate_attenuation(&self, size: usize) -> Result<AttenuationBatch, SimulationError> {
        let mut rng = SimRng::from_entropy();
        debug!(seed = rng.seed(), "seeded attenuation run from entropy");
        self.simulate_attenuation_with_rng(size, &mut rng)
    }

    /// Simulates `size` independent realisations using the caller's RNG.
    ///
    /// # Errors
    ///
    /// Same as [`simulate_attenuation`](Self::simulate_attenuation).
    pub fn simulate_attenuation_with_rng<R>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> Result<AttenuationBatch, SimulationError>
    where
        R: Rng + ?Sized,
    {
        validate_realisations(size)?;

        let n = self.layer_count();
        if !(1.0..=MAX_LAYER_COUNT).contains(&n) {
            return Err(SimulationError::InvalidParameter {
                name: "layer_count",
                value: format!("ceil(width / dx) = {n} must lie in [1, {MAX_LAYER_COUNT}]"),
            });
        }

        let cross_sections = self
            .sample
            .material_1()
            .cross_section()
            .align(self.sample.material_2().cross_section())?;
        let n_energy = cross_sections.left.len();

        let mut counts = vec![0_u64; size];
        fill_binomial(rng, n as u64, self.sample.volume_fraction_1(), &mut counts)?;

        let width = self.sample.width();
        let mut values = Vec::with_capacity(size * n_energy);
        for &k in &counts {
            let k = k as f64;
            for (&sigma_1, &sigma_2) in cross_sections.left.iter().zip(&cross_sections.right) {
                let sigma_eff = (k * sigma_1 + (n - k) * sigma_2) / n;
                values.push((-sigma_eff * width).exp());
            }
        }

        debug!(
            layers = n,
            realisations = size,
            energy_bins = n_energy,
            "simulated attenuation batch"
        );

        Ok(AttenuationBatch::from_raw(
            cross_sections.energy,
            size,
            n_energy,
            values,
        ))
    }

    /// Runs a configured simulation.
    ///
    /// Uses the configured seed when present, fresh entropy otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`simulate_attenuation`](Self::simulate_attenuation).
    pub fn run(&self, config: &SimulationConfig) -> Result<AttenuationBatch, SimulationError> {
        match config.seed() {
            Some(seed) => {
                let mut rng = SimRng::from_seed(seed);
                self.simulate_attenuation_with_rng(config.realisations(), &mut rng)
            }
            None => self.simulate_attenuation(config.realisations()),
        }
    }

    /// Reduces a batch to mean and population standard deviation.
    ///
    /// See [`AttenuationStatistics`] for the conventions used.
    #[inline]
    pub fn get_statistics(&self, batch: &AttenuationBatch) -> AttenuationStatistics {
        AttenuationStatistics::from_batch(batch)
    }
}
