//! Reduction of attenuation batches to summary statistics.
//!
//! Reductions run over the realisation axis only; the energy axis is kept.
//!
//! # Standard Deviation Convention
//!
//! `std` is the population standard deviation (divide by N, zero degrees of
//! freedom). A one-realisation batch therefore has `std == 0`.
//!
//! # Empty Batches
//!
//! Reducing zero realisations is not an error: every mean and standard
//! deviation is NaN, as for any reduction over zero elements.

use super::batch::AttenuationBatch;

/// Mean and standard deviation of attenuation per energy bin.
///
/// # Examples
///
/// ```rust
/// use slm_engine::mc::{AttenuationBatch, AttenuationStatistics};
///
/// let batch = AttenuationBatch::from_rows(None, vec![vec![0.2], vec![0.4]]).unwrap();
/// let stats = AttenuationStatistics::from_batch(&batch);
///
/// assert!((stats.mean()[0] - 0.3).abs() < 1e-15);
/// assert!((stats.std()[0] - 0.1).abs() < 1e-15);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttenuationStatistics {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    energy: Option<Vec<f64>>,
    mean: Vec<f64>,
    std: Vec<f64>,
    n_realisations: usize,
}

impl AttenuationStatistics {
    /// Reduces `batch` over its realisation axis.
    pub fn from_batch(batch: &AttenuationBatch) -> Self {
        let n = batch.n_realisations() as f64;
        let (mean, std) = (0..batch.n_energy())
            .map(|bin| {
                let mean = batch.column(bin).sum::<f64>() / n;
                let variance = batch.column(bin).map(|a| (a - mean).powi(2)).sum::<f64>() / n;
                (mean, variance.sqrt())
            })
            .unzip();

        Self {
            energy: batch.energy().map(<[f64]>::to_vec),
            mean,
            std,
            n_realisations: batch.n_realisations(),
        }
    }

    /// Returns the energy coordinates, if labelled.
    #[inline]
    pub fn energy(&self) -> Option<&[f64]> {
        self.energy.as_deref()
    }

    /// Returns the mean attenuation per energy bin.
    #[inline]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Returns the population standard deviation per energy bin.
    #[inline]
    pub fn std(&self) -> &[f64] {
        &self.std
    }

    /// Returns the number of realisations reduced.
    #[inline]
    pub fn n_realisations(&self) -> usize {
        self.n_realisations
    }

    /// Returns the standard error of the mean, `std / sqrt(N)`.
    pub fn std_error(&self) -> Vec<f64> {
        let root_n = (self.n_realisations as f64).sqrt();
        self.std.iter().map(|&s| s / root_n).collect()
    }

    /// Returns the 95% confidence interval half-width of the mean.
    pub fn confidence_95(&self) -> Vec<f64> {
        self.std_error().iter().map(|&e| 1.96 * e).collect()
    }
}
