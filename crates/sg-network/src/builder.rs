//! Two-phase map builder: accumulate street records, then freeze them into an
//! immutable [`StreetNetwork`].
//!
//! # Assembly
//!
//! [`StreetNetworkBuilder::build_with`] performs all graph assembly in one
//! pass over the accepted records:
//!
//! 1. Resolve each block's first and last polyline point to an intersection,
//!    creating vertices in coordinate-encounter order (exact-match dedup).
//! 2. Push the block's two directed copies into the edge arena at ids `2k` /
//!    `2k + 1` and append each to its owning vertex's adjacency list.
//! 3. Traffic pass: per physical segment compute the polyline length once,
//!    then sample a traffic factor for each directed copy and derive its
//!    traffic cost.
//! 4. Bulk-load the R-tree spatial index.
//!
//! Construction and queries never interleave: the builder is consumed by
//! `build_with`, and the returned network is immutable.

use std::sync::Arc;

use rstar::RTree;

use sg_core::{BlockId, Coord, IntersectionId};

use crate::block::Block;
use crate::error::{NetworkError, NetworkResult};
use crate::intersection::Intersection;
use crate::network::{CoordMap, IntersectionEntry, StreetNetwork};
use crate::records::StreetRecord;
use crate::surface::{MapSurface, NoopSurface};
use crate::traffic::{GaussianTraffic, TrafficModel};

/// Accumulates validated street records and assembles a [`StreetNetwork`].
///
/// # Example
///
/// ```
/// use sg_core::Coord;
/// use sg_network::{BlockRecord, StreetNetworkBuilder, StreetRecord};
///
/// let mut b = StreetNetworkBuilder::new();
/// b.add_street(StreetRecord::new(
///     "Main St",
///     vec![BlockRecord::new(1, 2.0, vec![Coord::new(0, 0), Coord::new(4, 0)])],
/// ))
/// .unwrap();
/// let net = b.build(42);
/// assert_eq!(net.intersection_count(), 2);
/// assert_eq!(net.block_count(), 2); // one directed copy per direction
/// ```
pub struct StreetNetworkBuilder {
    streets: Vec<StreetRecord>,
    segments: usize,
    vertex_hint: usize,
}

impl StreetNetworkBuilder {
    pub fn new() -> Self {
        Self { streets: Vec::new(), segments: 0, vertex_hint: 0 }
    }

    /// Pre-size the vertex arena for an expected intersection count (the
    /// informational count carried by the input format).
    pub fn with_capacity(intersections: usize) -> Self {
        Self { streets: Vec::new(), segments: 0, vertex_hint: intersections }
    }

    /// Accept one street record after validating its blocks.
    ///
    /// Rejects any block whose polyline has fewer than two points; the record
    /// producer is otherwise trusted to hand over well-formed input.
    pub fn add_street(&mut self, street: StreetRecord) -> NetworkResult<()> {
        for block in &street.blocks {
            if block.points.len() < 2 {
                return Err(NetworkError::BlockTooShort {
                    street: street.name.clone(),
                    number: block.number,
                    points: block.points.len(),
                });
            }
        }
        self.segments += street.blocks.len();
        self.streets.push(street);
        Ok(())
    }

    /// Number of accepted streets.
    pub fn street_count(&self) -> usize {
        self.streets.len()
    }

    /// Number of accepted physical blocks (each becomes two directed copies).
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// Consume the builder and assemble the network with the stock Gaussian
    /// traffic model seeded by `seed` and no surface callbacks.
    pub fn build(self, seed: u64) -> StreetNetwork {
        self.build_with(&mut GaussianTraffic::new(seed), &mut NoopSurface)
    }

    /// Consume the builder and assemble the network.
    ///
    /// `traffic` supplies one factor per directed block, drawn in block-id
    /// order; `surface` receives visualization callbacks as the graph takes
    /// shape.  See the module docs for the assembly steps.
    pub fn build_with(
        self,
        traffic: &mut dyn TrafficModel,
        surface: &mut dyn MapSurface,
    ) -> StreetNetwork {
        let mut intersections: Vec<Intersection> = Vec::with_capacity(self.vertex_hint);
        let mut adjacency: Vec<Vec<BlockId>> = Vec::with_capacity(self.vertex_hint);
        let mut coord_index = CoordMap::default();
        coord_index.reserve(self.vertex_hint);
        let mut blocks: Vec<Block> = Vec::with_capacity(self.segments * 2);

        for street in self.streets {
            let name: Arc<str> = Arc::from(street.name.as_str());
            for record in street.blocks {
                let points: Arc<[Coord]> = Arc::from(record.points);
                let from = resolve_endpoint(
                    points[0],
                    &mut intersections,
                    &mut adjacency,
                    &mut coord_index,
                    surface,
                );
                let to = resolve_endpoint(
                    points[points.len() - 1],
                    &mut intersections,
                    &mut adjacency,
                    &mut coord_index,
                    surface,
                );

                let fwd = BlockId(blocks.len() as u32);
                let rev = BlockId(fwd.0 + 1);
                blocks.push(Block {
                    street: Arc::clone(&name),
                    number: record.number,
                    road_size: record.road_size,
                    points: Arc::clone(&points),
                    first: from,
                    last: to,
                    twin: rev,
                    length: 0.0,
                    traffic_factor: 0.0,
                    traffic: 0.0,
                });
                blocks.push(Block {
                    street: Arc::clone(&name),
                    number: record.number,
                    road_size: record.road_size,
                    points,
                    first: to,
                    last: from,
                    twin: fwd,
                    length: 0.0,
                    traffic_factor: 0.0,
                    traffic: 0.0,
                });
                adjacency[from.index()].push(fwd);
                adjacency[to.index()].push(rev);
            }
        }

        debug_assert_eq!(blocks.len() % 2, 0);
        debug_assert_eq!(intersections.len(), adjacency.len());
        debug_assert_eq!(intersections.len(), coord_index.len());

        // Traffic pass: length once per physical segment, factor per copy.
        for pair in (0..blocks.len()).step_by(2) {
            let length = polyline_length(&blocks[pair].points);
            if length == 0.0 {
                log::warn!(
                    "street {:?} block {} has zero length (degenerate polyline)",
                    blocks[pair].street,
                    blocks[pair].number,
                );
            }
            for copy in pair..pair + 2 {
                let factor = traffic.factor();
                let block = &mut blocks[copy];
                block.length = length;
                block.traffic_factor = factor;
                block.traffic = length * factor;
            }
        }

        for pair in (0..blocks.len()).step_by(2) {
            surface.segment_added(&blocks[pair]);
        }

        // Bulk load is O(N log N); much faster than N single inserts.
        let entries: Vec<IntersectionEntry> = intersections
            .iter()
            .enumerate()
            .map(|(i, x)| IntersectionEntry {
                point: [f64::from(x.coord().x), f64::from(x.coord().y)],
                id: IntersectionId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        log::debug!(
            "assembled street network: {} intersections, {} directed blocks ({} segments)",
            intersections.len(),
            blocks.len(),
            blocks.len() / 2,
        );

        let net = StreetNetwork {
            intersections,
            blocks,
            adjacency,
            coord_index,
            spatial_idx,
        };
        surface.network_ready(&net);
        net
    }
}

impl Default for StreetNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a network from street records in one call.
///
/// Equivalent to feeding every record to a [`StreetNetworkBuilder`] and
/// calling [`build`](StreetNetworkBuilder::build) with `seed`.
pub fn build_network(
    records: impl IntoIterator<Item = StreetRecord>,
    seed: u64,
) -> NetworkResult<StreetNetwork> {
    let mut builder = StreetNetworkBuilder::new();
    for record in records {
        builder.add_street(record)?;
    }
    Ok(builder.build(seed))
}

/// Look up `coord` in the dedup index or create a new vertex for it.
fn resolve_endpoint(
    coord: Coord,
    intersections: &mut Vec<Intersection>,
    adjacency: &mut Vec<Vec<BlockId>>,
    index: &mut CoordMap,
    surface: &mut dyn MapSurface,
) -> IntersectionId {
    if let Some(&id) = index.get(&coord) {
        return id;
    }
    let id = IntersectionId(intersections.len() as u32);
    intersections.push(Intersection::new(coord));
    adjacency.push(Vec::new());
    index.insert(coord, id);
    surface.intersection_added(id, coord);
    id
}

/// Sum of consecutive-point Euclidean distances along `points`.
fn polyline_length(points: &[Coord]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
