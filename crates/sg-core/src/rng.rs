//! Deterministic RNG wrapper for build-time traffic sampling.
//!
//! # Determinism strategy
//!
//! The only randomness in the engine is the per-block traffic factor sampled
//! while the map is built.  The builder takes an explicit seed and draws all
//! samples from a single `SmallRng` stream in block-id order, so re-building
//! the same records with the same seed yields an identical network — runs
//! and tests are reproducible by construction.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG used by the map builder's traffic pass.
pub struct TrafficRng(SmallRng);

impl TrafficRng {
    pub fn new(seed: u64) -> Self {
        TrafficRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Sample a normally distributed value with the given mean and standard
    /// deviation.
    ///
    /// Uses the Marsaglia polar method: draw `(u, v)` uniformly on the
    /// square `[-1, 1]²` until the point falls inside the unit circle, then
    /// transform.  Each accepted round yields one sample.
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        loop {
            let u: f64 = self.0.gen_range(-1.0..=1.0);
            let v: f64 = self.0.gen_range(-1.0..=1.0);
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                return mean + std_dev * u * (-2.0 * s.ln() / s).sqrt();
            }
        }
    }
}
