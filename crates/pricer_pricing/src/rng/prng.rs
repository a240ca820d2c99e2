//! Seeded pseudo-random generator for Monte Carlo sampling.
//!
//! This module provides [`PricerRng`], a thin wrapper over `rand::StdRng`
//! that remembers its seed and samples normals via the Ziggurat method.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use super::NormalSource;

/// Monte Carlo random number generator.
///
/// The same seed always produces the same sequence, enabling reproducible
/// simulations.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut a = PricerRng::from_seed(42);
/// let mut b = PricerRng::from_seed(42);
/// assert_eq!(a.gen_normal(), b.gen_normal());
/// assert_eq!(a.seed(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct PricerRng {
    inner: StdRng,
    /// Seed used for initialisation, kept for logging.
    seed: u64,
}

impl PricerRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Standard normal draw (Ziggurat via `rand_distr::StandardNormal`).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }
}

impl NormalSource for PricerRng {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        self.gen_normal()
    }
}
