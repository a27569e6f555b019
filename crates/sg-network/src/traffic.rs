//! Pluggable traffic model: the per-block congestion factor source.
//!
//! The default [`GaussianTraffic`] samples factors from a clamped normal
//! distribution, one draw per directed block in block-id order.  The two
//! directed copies of a physical segment therefore draw independent factors
//! and can carry different simulated traffic, the way the two directions of
//! a real street congest differently.  Callers wanting symmetric or fixed
//! costs plug in [`ConstantTraffic`] or their own model.

use sg_core::TrafficRng;

/// Source of traffic factors, invoked once per directed block during the
/// builder's traffic pass.
pub trait TrafficModel {
    /// Produce the next traffic factor.
    ///
    /// Results must be non-negative (the minimum-traffic query relies on
    /// non-negative edge weights); the stock models stay within
    /// `[GaussianTraffic::MIN, GaussianTraffic::MAX]`.
    fn factor(&mut self) -> f64;
}

/// Normal-distribution traffic: mean 1.0, standard deviation 0.2, clamped to
/// `[0.5, 1.5]`.
pub struct GaussianTraffic {
    rng: TrafficRng,
}

impl GaussianTraffic {
    pub const MEAN: f64 = 1.0;
    pub const STD_DEV: f64 = 0.2;
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 1.5;

    pub fn new(seed: u64) -> Self {
        Self { rng: TrafficRng::new(seed) }
    }
}

impl TrafficModel for GaussianTraffic {
    fn factor(&mut self) -> f64 {
        self.rng
            .gaussian(Self::MEAN, Self::STD_DEV)
            .clamp(Self::MIN, Self::MAX)
    }
}

/// Fixed traffic factor for every block.  Useful for deterministic fixtures
/// and symmetric-cost networks.
pub struct ConstantTraffic(pub f64);

impl TrafficModel for ConstantTraffic {
    fn factor(&mut self) -> f64 {
        self.0
    }
}
