//! Planar map coordinate type.
//!
//! `Coord` stores integer x/y map units.  Input maps address points on an
//! integer grid, so equality and hashing are exact: two blocks that end on
//! the same grid point always resolve to the same intersection, with no
//! epsilon tuning.  Distances are Euclidean in `f64` — coordinates are
//! planar Cartesian units, not geographic, so no projection is involved.

/// An immutable integer planar coordinate in map units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in map units.
    ///
    /// Computed in `f64`; every `i32` is exactly representable, so the only
    /// rounding is the final square root.
    pub fn distance(self, other: Coord) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
