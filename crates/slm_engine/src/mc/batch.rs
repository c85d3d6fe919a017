//! Batches of simulated attenuation values.
//!
//! An [`AttenuationBatch`] is a row-major `realisations x energy` array. Row
//! `i` belongs to realisation `i`; columns follow the energy axis of the
//! sample's aligned cross sections.

use std::ops::Range;

use slm_core::types::ShapeError;

/// Attenuation values for a batch of stochastic realisations.
///
/// Batches are produced by the [`Simulator`](super::Simulator) and owned by
/// the caller; the simulator keeps no reference to them.
///
/// # Examples
///
/// ```rust
/// use slm_engine::mc::AttenuationBatch;
///
/// let batch = AttenuationBatch::from_rows(None, vec![vec![0.9], vec![0.8]]).unwrap();
/// assert_eq!(batch.shape(), (2, 1));
/// assert_eq!(batch.realisation(1), Some(&[0.8][..]));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttenuationBatch {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    energy: Option<Vec<f64>>,
    n_realisations: usize,
    n_energy: usize,
    values: Vec<f64>,
}

impl AttenuationBatch {
    /// Assembles a batch from parts whose shapes are already consistent.
    pub(crate) fn from_raw(
        energy: Option<Vec<f64>>,
        n_realisations: usize,
        n_energy: usize,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(values.len(), n_realisations * n_energy);
        debug_assert!(energy.as_ref().map_or(true, |e| e.len() == n_energy));
        Self {
            energy,
            n_realisations,
            n_energy,
            values,
        }
    }

    /// Builds a batch from per-realisation rows.
    ///
    /// The column count is taken from `energy` when given, otherwise from
    /// the first row.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::LengthMismatch`] if any row has a different
    /// length from the energy axis.
    pub fn from_rows(energy: Option<Vec<f64>>, rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let n_energy = match (&energy, rows.first()) {
            (Some(axis), _) => axis.len(),
            (None, Some(row)) => row.len(),
            (None, None) => 0,
        };

        let mut values = Vec::with_capacity(rows.len() * n_energy);
        for row in &rows {
            if row.len() != n_energy {
                return Err(ShapeError::LengthMismatch {
                    left: n_energy,
                    right: row.len(),
                });
            }
            values.extend_from_slice(row);
        }

        Ok(Self::from_raw(energy, rows.len(), n_energy, values))
    }

    /// Returns `(realisations, energy bins)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_realisations, self.n_energy)
    }

    /// Returns the number of realisations.
    #[inline]
    pub fn n_realisations(&self) -> usize {
        self.n_realisations
    }

    /// Returns the number of energy bins.
    #[inline]
    pub fn n_energy(&self) -> usize {
        self.n_energy
    }

    /// Returns `true` when the batch holds no realisations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_realisations == 0
    }

    /// Returns the energy coordinates, if labelled.
    #[inline]
    pub fn energy(&self) -> Option<&[f64]> {
        self.energy.as_deref()
    }

    /// Returns the realisation identifiers `0..n_realisations`.
    #[inline]
    pub fn realisation_ids(&self) -> Range<usize> {
        0..self.n_realisations
    }

    /// Returns all values in row-major order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the row for realisation `index`.
    pub fn realisation(&self, index: usize) -> Option<&[f64]> {
        if index >= self.n_realisations {
            return None;
        }
        let start = index * self.n_energy;
        Some(&self.values[start..start + self.n_energy])
    }

    /// Iterates over realisation rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.realisation_ids().map(move |index| {
            let start = index * self.n_energy;
            &self.values[start..start + self.n_energy]
        })
    }

    /// Iterates over one energy column across all realisations.
    pub fn column(&self, bin: usize) -> impl Iterator<Item = f64> + '_ {
        let stride = self.n_energy.max(1);
        let take = if bin < self.n_energy {
            self.n_realisations
        } else {
            0
        };
        self.values.iter().skip(bin).step_by(stride).take(take).copied()
    }

    /// Recovers the per-realisation effective cross section `-ln(A) / width`.
    ///
    /// The result has the same row-major layout as [`values`](Self::values).
    pub fn effective_cross_sections(&self, width: f64) -> Vec<f64> {
        self.values.iter().map(|&a| -a.ln() / width).collect()
    }
}
