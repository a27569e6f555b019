//! Path statistics: aggregate length and traffic along a vertex walk.

use sg_core::IntersectionId;
use sg_network::StreetNetwork;

/// Aggregates returned by [`path_info`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathInfo {
    /// Sum of the traversed blocks' lengths.
    pub length: f64,
    /// `traffic / length`, or 0 when `length` is 0.
    pub avg_traffic_factor: f64,
    /// Sum of the traversed blocks' traffic values.
    pub traffic: f64,
}

impl PathInfo {
    pub const ZERO: PathInfo = PathInfo {
        length: 0.0,
        avg_traffic_factor: 0.0,
        traffic: 0.0,
    };
}

/// Aggregate length and traffic along `path`.
///
/// `path` is a vertex walk whose consecutive pairs are expected to be
/// adjacent; for each pair `(u, v)` the first block in `u`'s adjacency list
/// joining the two — in either direction — contributes its length and
/// traffic.  The walk is not validated: a pair with no joining block (or a
/// vertex unknown to the network) silently contributes nothing.  Paths with
/// fewer than two vertices yield [`PathInfo::ZERO`].
pub fn path_info(net: &StreetNetwork, path: &[IntersectionId]) -> PathInfo {
    if path.len() < 2 {
        return PathInfo::ZERO;
    }

    let mut length = 0.0;
    let mut traffic = 0.0;
    for pair in path.windows(2) {
        let (u, v) = (pair[0], pair[1]);
        if !net.contains(u) {
            continue;
        }
        if let Some((_, blk)) = net.outgoing(u).find(|(_, blk)| blk.connects(u, v)) {
            length += blk.length();
            traffic += blk.traffic();
        }
    }

    let avg_traffic_factor = if length == 0.0 { 0.0 } else { traffic / length };
    PathInfo { length, avg_traffic_factor, traffic }
}
