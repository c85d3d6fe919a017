//! Monte Carlo attenuation kernel.
//!
//! # Architecture
//!
//! ```text
//! Simulator<'a>
//! ├── &LayeredSample     (geometry, materials, volume fractions)
//! ├── SimRng / caller Rng (binomial layer counts)
//! └── Orchestration
//!     ├── simulate_attenuation()  -> AttenuationBatch
//!     └── get_statistics()        -> AttenuationStatistics
//! ```
//!
//! # Examples
//!
//! ## Reproducible run
//!
//! ```rust
//! use slm_core::material::Material;
//! use slm_core::sample::LayeredSample;
//! use slm_engine::mc::{SimulationConfig, Simulator};
//!
//! let sample = LayeredSample::builder()
//!     .width(1.0)
//!     .dx(0.1)
//!     .material_1(Material::new("A", 0.1))
//!     .material_2(Material::new("B", 0.05))
//!     .volume_fraction_1(0.5)
//!     .build()
//!     .unwrap();
//!
//! let config = SimulationConfig::builder()
//!     .realisations(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let simulator = Simulator::new(&sample);
//! let batch = simulator.run(&config).unwrap();
//! let stats = simulator.get_statistics(&batch);
//!
//! println!("A = {:.5} ± {:.5}", stats.mean()[0], stats.confidence_95()[0]);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod simulator;
pub mod statistics;

pub use batch::AttenuationBatch;
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_REALISATIONS};
pub use error::SimulationError;
pub use simulator::Simulator;
pub use statistics::AttenuationStatistics;
