//! Shared campus street map definition.
//!
//! A 6-intersection synthetic map inspired by a small university campus:
//! two east-west streets joined by three cross streets, plus a bent
//! perimeter road that covers the quad-to-stadium stretch in one block.

use sg_core::{Coord, IntersectionId};
use sg_network::{
    BlockRecord, MapSurface, NetworkResult, StreetNetwork, StreetNetworkBuilder, StreetRecord,
    TrafficModel,
};

/// Build the 6-intersection campus street map.
///
/// Returns `(network, [quad, library, stadium, west_gate, student_union,
/// east_gate])`.
pub fn build_map(
    traffic: &mut dyn TrafficModel,
    surface: &mut dyn MapSurface,
) -> NetworkResult<(StreetNetwork, [IntersectionId; 6])> {
    let mut b = StreetNetworkBuilder::with_capacity(6);

    b.add_street(StreetRecord::new(
        "College St",
        vec![
            BlockRecord::new(100, 12.0, vec![Coord::new(0, 0), Coord::new(300, 0)]),
            BlockRecord::new(200, 12.0, vec![Coord::new(300, 0), Coord::new(600, 0)]),
        ],
    ))?;
    b.add_street(StreetRecord::new(
        "University Ave",
        vec![
            BlockRecord::new(100, 14.0, vec![Coord::new(0, 200), Coord::new(300, 200)]),
            BlockRecord::new(200, 14.0, vec![Coord::new(300, 200), Coord::new(600, 200)]),
        ],
    ))?;
    b.add_street(StreetRecord::new(
        "Oak St",
        vec![BlockRecord::new(1, 10.0, vec![Coord::new(0, 0), Coord::new(0, 200)])],
    ))?;
    b.add_street(StreetRecord::new(
        "Library Ln",
        vec![BlockRecord::new(1, 8.0, vec![Coord::new(300, 0), Coord::new(300, 200)])],
    ))?;
    b.add_street(StreetRecord::new(
        "Stadium Way",
        vec![BlockRecord::new(1, 10.0, vec![Coord::new(600, 0), Coord::new(600, 200)])],
    ))?;
    // Single bent block: 250 + 200 + 250 = 700 m, no vertex at the bends.
    b.add_street(StreetRecord::new(
        "Ring Rd",
        vec![BlockRecord::new(
            1,
            16.0,
            vec![
                Coord::new(0, 0),
                Coord::new(200, -150),
                Coord::new(400, -150),
                Coord::new(600, 0),
            ],
        )],
    ))?;

    let net = b.build_with(traffic, surface);

    let ids = [
        Coord::new(0, 0),
        Coord::new(300, 0),
        Coord::new(600, 0),
        Coord::new(0, 200),
        Coord::new(300, 200),
        Coord::new(600, 200),
    ]
    .map(|c| net.find_intersection(c).expect("landmark coordinate is a map vertex"));

    Ok((net, ids))
}
