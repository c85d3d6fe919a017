//! Labelled numeric types and error types.
//!
//! This module provides:
//! - `series`: [`EnergySeries`], a one-dimensional series along an optional energy axis
//! - `error`: Structured error types for validation and shape mismatches
//!
//! # Re-exports
//!
//! - [`EnergySeries`], [`AlignedPair`] from `series`
//! - [`ValidationError`], [`ShapeError`], [`SampleError`] from `error`

pub mod error;
pub mod series;

pub use error::{SampleError, ShapeError, ValidationError};
pub use series::{AlignedPair, EnergySeries};
