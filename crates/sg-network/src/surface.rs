//! Map-surface hook: visualization callbacks fired while the map is built.

use sg_core::{Coord, IntersectionId};

use crate::block::Block;
use crate::network::StreetNetwork;

/// Callbacks invoked by
/// [`StreetNetworkBuilder::build_with`][crate::StreetNetworkBuilder::build_with]
/// as the graph takes shape.
///
/// The engine never renders anything itself; a UI layer implements this trait
/// to mirror the network onto its own surface.  All methods have default
/// no-op implementations so implementors only override what they draw.
///
/// # Example — vertex counter
///
/// ```rust,ignore
/// struct VertexCounter { seen: usize }
///
/// impl MapSurface for VertexCounter {
///     fn intersection_added(&mut self, _id: IntersectionId, _at: Coord) {
///         self.seen += 1;
///     }
/// }
/// ```
pub trait MapSurface {
    /// Called once per newly created intersection, in creation order.
    fn intersection_added(&mut self, _id: IntersectionId, _at: Coord) {}

    /// Called once per physical segment after its derived attributes
    /// (length, traffic) are final.
    ///
    /// `forward` is the copy in input point order; its
    /// [`twin`](Block::twin) is the reversed copy.
    fn segment_added(&mut self, _forward: &Block) {}

    /// Called once when the network is complete, just before `build_with`
    /// returns it.
    fn network_ready(&mut self, _net: &StreetNetwork) {}
}

/// A [`MapSurface`] that does nothing.  Use when building headless.
pub struct NoopSurface;

impl MapSurface for NoopSurface {}
