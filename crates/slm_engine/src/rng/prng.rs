//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`SimRng`], a seeded PRNG wrapper that records its
//! seed, and [`fill_binomial`], the batched layer-count draw used by the
//! simulator.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Binomial, BinomialError, Distribution};

/// Monte Carlo simulation random number generator.
///
/// Wraps [`StdRng`] and remembers the seed it was initialised with, so that
/// a run started from entropy can still be reproduced from the logs.
///
/// `SimRng` implements [`RngCore`], so it can be passed anywhere a
/// `rand::Rng` is expected.
///
/// # Examples
///
/// ```rust
/// use slm_engine::rng::SimRng;
///
/// let mut rng = SimRng::from_seed(42);
/// let u: f64 = rng.gen_uniform();
/// assert!((0.0..1.0).contains(&u));
///
/// let mut counts = vec![0_u64; 100];
/// rng.fill_binomial(10, 0.5, &mut counts).unwrap();
/// assert!(counts.iter().all(|&k| k <= 10));
/// ```
#[derive(Clone, Debug)]
pub struct SimRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl SimRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    ///
    /// ```rust
    /// use slm_engine::rng::SimRng;
    ///
    /// let mut rng1 = SimRng::from_seed(12345);
    /// let mut rng2 = SimRng::from_seed(12345);
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new RNG instance with a seed drawn from the thread-local
    /// entropy source.
    #[inline]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Fills the buffer with Binomial(`trials`, `probability`) variates.
    ///
    /// # Errors
    ///
    /// Returns [`BinomialError`] when `probability` lies outside [0, 1].
    #[inline]
    pub fn fill_binomial(
        &mut self,
        trials: u64,
        probability: f64,
        buffer: &mut [u64],
    ) -> Result<(), BinomialError> {
        fill_binomial(&mut self.inner, trials, probability, buffer)
    }
}

impl RngCore for SimRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Fills `buffer` with Binomial(`trials`, `probability`) variates from `rng`.
///
/// The distribution is constructed once and sampled for every slot. Empty
/// buffers are a no-op after parameter validation.
///
/// # Errors
///
/// Returns [`BinomialError`] when `probability` lies outside [0, 1].
pub fn fill_binomial<R>(
    rng: &mut R,
    trials: u64,
    probability: f64,
    buffer: &mut [u64],
) -> Result<(), BinomialError>
where
    R: Rng + ?Sized,
{
    let distribution = Binomial::new(trials, probability)?;
    for slot in buffer.iter_mut() {
        *slot = distribution.sample(rng);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_recorded() {
        let rng = SimRng::from_seed(7);
        assert_eq!(rng.seed(), 7);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SimRng::from_seed(99);
        let mut b = SimRng::from_seed(99);
        let mut counts_a = vec![0_u64; 64];
        let mut counts_b = vec![0_u64; 64];
        a.fill_binomial(10, 0.3, &mut counts_a).unwrap();
        b.fill_binomial(10, 0.3, &mut counts_b).unwrap();
        assert_eq!(counts_a, counts_b);
    }

    #[test]
    fn test_entropy_seeds_differ() {
        let seeds: Vec<u64> = (0..4).map(|_| SimRng::from_entropy().seed()).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_binomial_degenerate_probabilities() {
        let mut rng = SimRng::from_seed(1);
        let mut counts = vec![u64::MAX; 32];

        rng.fill_binomial(10, 0.0, &mut counts).unwrap();
        assert!(counts.iter().all(|&k| k == 0));

        rng.fill_binomial(10, 1.0, &mut counts).unwrap();
        assert!(counts.iter().all(|&k| k == 10));
    }

    #[test]
    fn test_binomial_rejects_bad_probability() {
        let mut rng = SimRng::from_seed(1);
        let mut counts = vec![0_u64; 4];
        assert!(rng.fill_binomial(10, 1.5, &mut counts).is_err());
        assert!(rng.fill_binomial(10, -0.1, &mut counts).is_err());
    }

    #[test]
    fn test_binomial_mean() {
        let mut rng = SimRng::from_seed(2024);
        let mut counts = vec![0_u64; 20_000];
        rng.fill_binomial(10, 0.5, &mut counts).unwrap();
        let mean = counts.iter().sum::<u64>() as f64 / counts.len() as f64;
        // Standard error of the mean is sqrt(2.5 / 20_000) ~ 0.011
        assert!((mean - 5.0).abs() < 0.06, "mean = {mean}");
    }

    #[test]
    fn test_usable_as_generic_rng() {
        let mut rng = SimRng::from_seed(3);
        let mut counts = vec![0_u64; 8];
        fill_binomial(&mut rng, 4, 0.5, &mut counts).unwrap();
        assert!(counts.iter().all(|&k| k <= 4));
    }
}
