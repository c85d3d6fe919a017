//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: Rejected inputs at sample construction time
//! - `ShapeError`: Incompatible energy-labelled series
//! - `SampleError`: Umbrella error for operations on a layered sample

use thiserror::Error;

/// Construction-time validation errors.
///
/// Raised synchronously by [`LayeredSample`](crate::sample::LayeredSample)
/// constructors; an instance is never produced when one of these is returned.
///
/// # Examples
/// ```
/// use slm_core::types::ValidationError;
///
/// let err = ValidationError::InvalidVolumeFraction { value: 1.5 };
/// assert!(format!("{}", err).contains("invalid volume fraction"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Volume fraction outside [0, 1] (or NaN).
    #[error("invalid volume fraction: f1 = {value} (must lie in [0, 1])")]
    InvalidVolumeFraction {
        /// The rejected volume fraction
        value: f64,
    },

    /// Non-positive or non-finite geometric length.
    #[error("invalid geometry: {name} = {value} (must be finite and positive)")]
    InvalidGeometry {
        /// Name of the offending field (`width` or `dx`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Required builder field not supplied.
    #[error("missing required field: {name}")]
    MissingField {
        /// Name of the missing field
        name: &'static str,
    },
}

/// Shape and coordinate mismatches between energy series.
///
/// Arithmetic between two series never silently broadcasts across
/// incompatible shapes; one of these errors is returned instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShapeError {
    /// Values and energy coordinates of different lengths.
    #[error("energy axis has {energy} coordinates but {values} values were supplied")]
    CoordinateLength {
        /// Number of energy coordinates
        energy: usize,
        /// Number of values
        values: usize,
    },

    /// Two series of different, non-broadcastable lengths.
    #[error("dimension mismatch along energy axis: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },

    /// Two labelled series with different energy coordinates.
    #[error("energy coordinates differ at index {index}: {left} vs {right}")]
    CoordinateMismatch {
        /// First index where coordinates disagree
        index: usize,
        /// Coordinate on the left operand
        left: f64,
        /// Coordinate on the right operand
        right: f64,
    },

    /// Reduction to a scalar requested on a series without exactly one value.
    #[error("cannot reduce a series of {len} values to a scalar")]
    NotScalar {
        /// Number of values in the series
        len: usize,
    },
}

/// Errors from operations on a layered sample.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SampleError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Cross sections could not be combined.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidVolumeFraction { value: -0.1 };
        assert!(err.to_string().contains("invalid volume fraction"));
        assert!(err.to_string().contains("-0.1"));

        let err = ValidationError::InvalidGeometry {
            name: "dx",
            value: 0.0,
        };
        assert!(err.to_string().contains("dx"));
    }

    #[test]
    fn test_shape_error_display() {
        let err = ShapeError::LengthMismatch { left: 2, right: 3 };
        assert_eq!(
            err.to_string(),
            "dimension mismatch along energy axis: 2 vs 3"
        );

        let err = ShapeError::NotScalar { len: 4 };
        assert!(err.to_string().contains("4 values"));
    }

    #[test]
    fn test_sample_error_is_transparent() {
        let inner = ValidationError::InvalidVolumeFraction { value: 2.0 };
        let err: SampleError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert!(matches!(err, SampleError::Validation(_)));

        let err: SampleError = ShapeError::NotScalar { len: 0 }.into();
        assert!(matches!(err, SampleError::Shape(_)));
    }
}
