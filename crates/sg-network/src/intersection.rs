//! Graph vertex: an intersection at one exact coordinate.

use std::fmt;

use sg_core::Coord;

/// A graph vertex identified by its planar coordinate.
///
/// Created exactly once per distinct endpoint coordinate during map building;
/// never mutated or removed afterwards.  Identity is coordinate equality —
/// the builder guarantees no two intersections share a coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intersection {
    coord: Coord,
}

impl Intersection {
    pub(crate) fn new(coord: Coord) -> Self {
        Self { coord }
    }

    /// The exact grid coordinate of this intersection.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coord)
    }
}
