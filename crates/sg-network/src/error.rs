//! Network-construction error type.

use thiserror::Error;

/// Errors produced while assembling a [`StreetNetwork`](crate::StreetNetwork).
///
/// Query-side "not found" conditions (no path, absent intersection) are never
/// errors; they surface as empty result vectors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A block's polyline has fewer than two points, so it cannot join two
    /// endpoints.  Construction aborts rather than producing a network with
    /// dangling edges.
    #[error("street {street:?} block {number}: polyline has {points} point(s), need at least 2")]
    BlockTooShort {
        street: String,
        number: u32,
        points: usize,
    },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
