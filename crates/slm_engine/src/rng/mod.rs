//! # Random Number Generation Infrastructure
//!
//! Random number generation for the attenuation simulator.
//!
//! ## Reproducibility
//!
//! The simulator never fixes a seed on its own. Every call to
//! [`Simulator::simulate_attenuation`](crate::mc::Simulator::simulate_attenuation)
//! starts a fresh [`SimRng::from_entropy`] and logs the seed it drew. Callers
//! wanting deterministic runs pass their own generator instead.
//!
//! ## Module Structure
//!
//! - [`SimRng`]: `StdRng` wrapper with seed tracking
//! - [`fill_binomial`]: batched Binomial draws into a caller buffer
//!
//! ## Usage Example
//!
//! ```rust
//! use slm_engine::rng::{fill_binomial, SimRng};
//!
//! let mut rng = SimRng::from_seed(12345);
//! let mut counts = vec![0_u64; 1000];
//! fill_binomial(&mut rng, 10, 0.5, &mut counts).unwrap();
//! ```

mod prng;

pub use prng::{fill_binomial, SimRng};
