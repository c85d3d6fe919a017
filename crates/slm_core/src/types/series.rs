//! Energy-labelled one-dimensional series.
//!
//! [`EnergySeries`] pairs a vector of values with optional energy coordinates.
//! It stands in for a labelled array with a single `energy` dimension and is
//! used both for material cross sections and for reduced statistics.
//!
//! # Broadcasting Rules
//!
//! Binary operations first align their operands:
//!
//! - An unlabelled single value broadcasts against any non-empty series.
//! - Otherwise both series must have the same length.
//! - When both series are labelled their coordinates must be identical.
//!
//! Anything else is a [`ShapeError`]; nothing is broadcast implicitly.

use super::error::ShapeError;

/// A one-dimensional series of values along an optional energy axis.
///
/// # Examples
///
/// ```rust
/// use slm_core::types::EnergySeries;
///
/// let sigma = EnergySeries::with_energy(vec![1.0e6, 2.0e6], vec![0.1, 0.2]).unwrap();
/// assert_eq!(sigma.len(), 2);
/// assert_eq!(sigma.energy(), Some(&[1.0e6, 2.0e6][..]));
///
/// let flat = EnergySeries::scalar(0.05);
/// let diff = sigma.zip_with(&flat, |a, b| a - b).unwrap();
/// assert_eq!(diff.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnergySeries {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    energy: Option<Vec<f64>>,
    values: Vec<f64>,
}

/// Two series brought onto a common energy axis.
///
/// Produced by [`EnergySeries::align`]; `left` and `right` always have the
/// same length, and `energy` (when present) matches that length.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignedPair {
    /// Shared energy coordinates, if either operand was labelled.
    pub energy: Option<Vec<f64>>,
    /// Left operand values after broadcasting.
    pub left: Vec<f64>,
    /// Right operand values after broadcasting.
    pub right: Vec<f64>,
}

impl EnergySeries {
    /// Creates an empty, unlabelled series.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an unlabelled single-value series.
    ///
    /// A scalar series broadcasts against series of any length.
    #[inline]
    pub fn scalar(value: f64) -> Self {
        Self {
            energy: None,
            values: vec![value],
        }
    }

    /// Creates a series without energy coordinates.
    #[inline]
    pub fn unlabelled(values: Vec<f64>) -> Self {
        Self {
            energy: None,
            values,
        }
    }

    /// Creates a series labelled with energy coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CoordinateLength`] when `energy` and `values`
    /// differ in length.
    pub fn with_energy(energy: Vec<f64>, values: Vec<f64>) -> Result<Self, ShapeError> {
        if energy.len() != values.len() {
            return Err(ShapeError::CoordinateLength {
                energy: energy.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            energy: Some(energy),
            values,
        })
    }

    /// Returns the values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the energy coordinates, if labelled.
    #[inline]
    pub fn energy(&self) -> Option<&[f64]> {
        self.energy.as_deref()
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the series holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` for an unlabelled single value.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.energy.is_none() && self.values.len() == 1
    }

    /// Extracts the single value of a one-element series.
    ///
    /// Labelled one-bin series are accepted as well as scalars.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NotScalar`] unless the series has exactly one value.
    pub fn item(&self) -> Result<f64, ShapeError> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            other => Err(ShapeError::NotScalar { len: other.len() }),
        }
    }

    /// Applies `f` to every value, keeping the energy axis.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            energy: self.energy.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Brings `self` and `other` onto a common energy axis.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] when the operands cannot be aligned.
    pub fn align(&self, other: &Self) -> Result<AlignedPair, ShapeError> {
        if (self.is_scalar() && other.is_empty()) || (other.is_scalar() && self.is_empty()) {
            return Err(ShapeError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        if self.is_scalar() && !other.is_scalar() {
            return Ok(AlignedPair {
                energy: other.energy.clone(),
                left: vec![self.values[0]; other.len()],
                right: other.values.clone(),
            });
        }
        if other.is_scalar() && !self.is_scalar() {
            return Ok(AlignedPair {
                energy: self.energy.clone(),
                left: self.values.clone(),
                right: vec![other.values[0]; self.len()],
            });
        }

        if self.len() != other.len() {
            return Err(ShapeError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        let energy = match (&self.energy, &other.energy) {
            (Some(left), Some(right)) => {
                if let Some(index) = left.iter().zip(right).position(|(l, r)| l != r) {
                    return Err(ShapeError::CoordinateMismatch {
                        index,
                        left: left[index],
                        right: right[index],
                    });
                }
                Some(left.clone())
            }
            (Some(axis), None) | (None, Some(axis)) => Some(axis.clone()),
            (None, None) => None,
        };

        Ok(AlignedPair {
            energy,
            left: self.values.clone(),
            right: other.values.clone(),
        })
    }

    /// Combines two series elementwise after alignment.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] when the operands cannot be aligned.
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self, ShapeError>
    where
        F: Fn(f64, f64) -> f64,
    {
        let pair = self.align(other)?;
        let values = pair
            .left
            .iter()
            .zip(&pair.right)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self {
            energy: pair.energy,
            values,
        })
    }
}

impl From<f64> for EnergySeries {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}
