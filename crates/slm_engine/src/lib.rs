//! # slm_engine: Monte Carlo Attenuation Engine
//!
//! ## Role
//!
//! slm_engine draws stochastic realisations of a two-material layered sample
//! (from `slm_core`) and computes their attenuation:
//! - Random number generation with seed tracking (`rng`)
//! - Simulation configuration, batches, statistics and the simulator (`mc`)
//!
//! ## Usage Example
//!
//! ```rust
//! use slm_core::material::Material;
//! use slm_core::sample::LayeredSample;
//! use slm_engine::Simulator;
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
//! let simulator = Simulator::new(&sample);
//! let batch = simulator.simulate_attenuation(1000).unwrap();
//! let stats = simulator.get_statistics(&batch);
//! # assert_eq!(stats.n_realisations(), 1000);
//! ```
//!
//! ## Logging
//!
//! The engine emits `tracing` events at `debug` level (seed, layer count,
//! batch shape). It never installs a subscriber.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `AttenuationBatch` and `AttenuationStatistics`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

pub use mc::{
    AttenuationBatch, AttenuationStatistics, SimulationConfig, SimulationError, Simulator,
};
pub use rng::SimRng;
