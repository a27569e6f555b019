//! Raw map input records.
//!
//! The textual map format is owned by an upstream parser; the engine consumes
//! these already-materialized records.  Layout follows the input grammar —
//! per street a name and its blocks, per block a number, a road size, and the
//! ordered polyline points.  The per-street and per-block counts of the wire
//! format are simply the `Vec` lengths here.

use sg_core::Coord;

/// One street: its name plus its blocks in street order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreetRecord {
    pub name: String,
    pub blocks: Vec<BlockRecord>,
}

impl StreetRecord {
    pub fn new(name: impl Into<String>, blocks: Vec<BlockRecord>) -> Self {
        Self { name: name.into(), blocks }
    }
}

/// One block of a street: the polyline of a physical segment between two
/// intersections.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockRecord {
    /// Position of this block within its street.
    pub number: u32,
    /// Road width scalar, carried through to the built [`Block`](crate::Block).
    pub road_size: f64,
    /// Polyline in input order; the first and last points are the endpoints.
    pub points: Vec<Coord>,
}

impl BlockRecord {
    pub fn new(number: u32, road_size: f64, points: Vec<Coord>) -> Self {
        Self { number, road_size, points }
    }
}
