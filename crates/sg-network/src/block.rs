//! Directed block: one direction of a physical street segment.

use std::sync::Arc;

use sg_core::{BlockId, Coord, IntersectionId};

/// One directed copy of a physical street segment.
///
/// Every physical segment yields two `Block`s with swapped endpoints so the
/// undirected graph can be walked from either side.  The copies share the
/// polyline and street name (`Arc`), report the same [`length`](Self::length),
/// and name each other via [`twin`](Self::twin).  The traffic factor is
/// sampled per copy, so the two directions of one segment may carry different
/// traffic (see [`traffic`](crate::traffic)).
#[derive(Clone, Debug)]
pub struct Block {
    pub(crate) street: Arc<str>,
    pub(crate) number: u32,
    pub(crate) road_size: f64,
    /// Polyline in input order for both copies; direction is carried by the
    /// endpoint ids, not by point order.
    pub(crate) points: Arc<[Coord]>,
    pub(crate) first: IntersectionId,
    pub(crate) last: IntersectionId,
    pub(crate) twin: BlockId,
    pub(crate) length: f64,
    pub(crate) traffic_factor: f64,
    pub(crate) traffic: f64,
}

impl Block {
    // ── Street attributes ─────────────────────────────────────────────────

    /// Name of the street this block belongs to.
    #[inline]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Position of this block within its street.
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Road width scalar from the input record.
    #[inline]
    pub fn road_size(&self) -> f64 {
        self.road_size
    }

    /// Polyline of the physical segment, shared by both directed copies.
    #[inline]
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    // ── Derived attributes (fixed by the builder's traffic pass) ──────────

    /// Sum of consecutive-point Euclidean distances; equal for both copies.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Congestion multiplier in `[0.5, 1.5]`, sampled at build time.
    #[inline]
    pub fn traffic_factor(&self) -> f64 {
        self.traffic_factor
    }

    /// Edge cost used by the minimum-traffic query:
    /// `length × traffic_factor`.
    #[inline]
    pub fn traffic(&self) -> f64 {
        self.traffic
    }

    // ── Endpoints ─────────────────────────────────────────────────────────

    /// Start endpoint of this directed copy.
    #[inline]
    pub fn first_endpoint(&self) -> IntersectionId {
        self.first
    }

    /// End endpoint of this directed copy.
    #[inline]
    pub fn last_endpoint(&self) -> IntersectionId {
        self.last
    }

    /// The opposite-direction copy of the same physical segment.
    #[inline]
    pub fn twin(&self) -> BlockId {
        self.twin
    }

    /// The endpoint of this block that is not `v`.
    ///
    /// `v` must be one of the two endpoints; anything else is a caller bug
    /// (checked only in debug builds).
    #[inline]
    pub fn other(&self, v: IntersectionId) -> IntersectionId {
        debug_assert!(
            v == self.first || v == self.last,
            "{v} is not an endpoint of this block"
        );
        if v == self.first { self.last } else { self.first }
    }

    /// Whether this block joins `a` and `b`, in either direction.
    #[inline]
    pub fn connects(&self, a: IntersectionId, b: IntersectionId) -> bool {
        (self.first == a && self.last == b) || (self.first == b && self.last == a)
    }
}
