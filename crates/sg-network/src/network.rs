//! Immutable street network: vertex arena, block arena, adjacency lists, and
//! spatial index.
//!
//! # Data layout
//!
//! Intersections and directed blocks live in flat arenas indexed by
//! `IntersectionId` / `BlockId`.  Adjacency is one `Vec<BlockId>` per vertex,
//! in insertion order — each vertex owns its outgoing directed blocks, and
//! the two copies of physical segment `k` sit in the block arena at ids `2k`
//! and `2k + 1`.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps planar points to the nearest intersection.
//! Backs [`nearest_intersection`](StreetNetwork::nearest_intersection), the
//! hook a map surface uses to turn a pointer position into a vertex.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use sg_core::{BlockId, Coord, IntersectionId};

use crate::block::Block;
use crate::builder::StreetNetworkBuilder;
use crate::intersection::Intersection;

// ── Coordinate dedup index ────────────────────────────────────────────────────

// FxHash speeds up the integer-pair keyed lookups; SipHash is the default.
#[cfg(feature = "fx-hash")]
pub(crate) type CoordMap = rustc_hash::FxHashMap<Coord, IntersectionId>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type CoordMap = std::collections::HashMap<Coord, IntersectionId>;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D point with the associated
/// `IntersectionId`.
#[derive(Clone)]
pub(crate) struct IntersectionEntry {
    pub(crate) point: [f64; 2],
    pub(crate) id: IntersectionId,
}

impl RTreeObject for IntersectionEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for IntersectionEntry {
    /// Squared Euclidean distance in map units.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── StreetNetwork ─────────────────────────────────────────────────────────────

/// Immutable street graph: intersections, directed blocks, per-vertex
/// adjacency, and a spatial index.
///
/// Built once by [`StreetNetworkBuilder`] and read-only afterwards.  Queries
/// keep all traversal state local, so one network can serve any number of
/// concurrent read-only queries without locking.
pub struct StreetNetwork {
    /// Vertex arena in creation order.  Indexed by `IntersectionId`.
    pub(crate) intersections: Vec<Intersection>,
    /// Directed block arena; twin copies of segment `k` at `2k` / `2k + 1`.
    pub(crate) blocks: Vec<Block>,
    /// Outgoing directed blocks per vertex, in insertion order.
    pub(crate) adjacency: Vec<Vec<BlockId>>,
    /// Exact coordinate → vertex map used for dedup and lookup.
    pub(crate) coord_index: CoordMap,
    pub(crate) spatial_idx: RTree<IntersectionEntry>,
}

impl StreetNetwork {
    /// Construct an empty network with no intersections or blocks.
    ///
    /// Every query against an empty network returns an empty result.
    pub fn empty() -> Self {
        StreetNetworkBuilder::new().build(0)
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    /// Number of directed blocks (twice the physical segment count).
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of physical street segments.
    pub fn segment_count(&self) -> usize {
        self.blocks.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }

    // ── Vertex access ─────────────────────────────────────────────────────

    /// All intersections in creation order, indexable by `IntersectionId`.
    #[inline]
    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    /// The intersection with the given id, or `None` if out of range.
    #[inline]
    pub fn intersection(&self, id: IntersectionId) -> Option<&Intersection> {
        self.intersections.get(id.index())
    }

    /// Whether `id` names a vertex of this network.
    #[inline]
    pub fn contains(&self, id: IntersectionId) -> bool {
        id.index() < self.intersections.len()
    }

    /// Find the vertex at exactly `coord`, if one exists.
    ///
    /// Exact-match lookup against the dedup index; never snaps.
    pub fn find_intersection(&self, coord: Coord) -> Option<IntersectionId> {
        self.coord_index.get(&coord).copied()
    }

    // ── Edge access ───────────────────────────────────────────────────────

    /// The directed block with the given id.
    ///
    /// Panics if `id` is out of range.
    #[inline]
    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    /// Ids of the outgoing directed blocks of `id`, in insertion order.
    ///
    /// Panics if `id` is out of range.
    #[inline]
    pub fn adjacent(&self, id: IntersectionId) -> &[BlockId] {
        &self.adjacency[id.index()]
    }

    /// Iterator over `(id, block)` pairs for the outgoing directed blocks of
    /// `at`, in insertion order.
    #[inline]
    pub fn outgoing(&self, at: IntersectionId) -> impl Iterator<Item = (BlockId, &Block)> + '_ {
        self.adjacency[at.index()]
            .iter()
            .map(move |&b| (b, &self.blocks[b.index()]))
    }

    /// Number of outgoing directed blocks of `id`.
    #[inline]
    pub fn degree(&self, id: IntersectionId) -> usize {
        self.adjacency[id.index()].len()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The vertex nearest to `coord` in Euclidean distance.
    ///
    /// Returns `None` only if the network has no intersections.
    pub fn nearest_intersection(&self, coord: Coord) -> Option<IntersectionId> {
        self.spatial_idx
            .nearest_neighbor(&[f64::from(coord.x), f64::from(coord.y)])
            .map(|e| e.id)
    }
}
