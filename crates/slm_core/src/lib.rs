//! # slm_core: Data Model for Stochastic Layered Media
//!
//! ## Role
//!
//! slm_core is the bottom layer of the workspace and provides:
//! - Energy-labelled series (`types::series`)
//! - Materials with macroscopic cross sections (`material`)
//! - Two-material layered samples with validated volume fractions (`sample`)
//! - Error types: `ValidationError`, `ShapeError`, `SampleError` (`types::error`)
//!
//! It has no dependency on the simulation engine and no randomness.
//!
//! ## Usage Examples
//!
//! ```rust
//! use slm_core::material::Material;
//! use slm_core::sample::LayeredSample;
//!
//! let sample = LayeredSample::new(
//!     1.0,
//!     0.1,
//!     Material::new("A", 0.1),
//!     Material::new("B", 0.05),
//!     0.5,
//! )
//! .unwrap();
//!
//! let variance = sample.layer_xs_variance().unwrap();
//! # assert!((variance - 0.25 * 0.05 * 0.05).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `EnergySeries` and `Material`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod material;
pub mod sample;
pub mod types;

pub use material::Material;
pub use sample::{LayeredSample, LayeredSampleBuilder};
pub use types::{EnergySeries, SampleError, ShapeError, ValidationError};
