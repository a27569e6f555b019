//! Unit tests for sg-routing.
//!
//! Fixtures are built with `ConstantTraffic(1.0)` so every edge cost equals
//! its geometric length and expected totals are exact.

#[cfg(test)]
mod helpers {
    use sg_core::{Coord, IntersectionId};
    use sg_network::{
        BlockRecord, ConstantTraffic, NoopSurface, StreetNetwork, StreetNetworkBuilder,
        StreetRecord,
    };

    fn build(streets: Vec<StreetRecord>) -> StreetNetwork {
        let mut b = StreetNetworkBuilder::new();
        for street in streets {
            b.add_street(street).unwrap();
        }
        b.build_with(&mut ConstantTraffic(1.0), &mut NoopSurface)
    }

    fn lookup<const N: usize>(net: &StreetNetwork, coords: [(i32, i32); N]) -> [IntersectionId; N] {
        coords.map(|(x, y)| net.find_intersection(Coord::new(x, y)).unwrap())
    }

    /// Four-intersection square, every block length 10:
    ///
    ///   A:(0,0) ── B:(10,0)
    ///      │           │
    ///   D:(0,10) ─ C:(10,10)
    ///
    /// Encounter order A=0, B=1, C=2, D=3; adjacency lists in insertion
    /// order are A:[A-B, A-D], B:[B-A, B-C], C:[C-B, C-D], D:[D-C, D-A].
    pub fn square() -> (StreetNetwork, [IntersectionId; 4]) {
        let net = build(vec![StreetRecord::new(
            "Loop Rd",
            vec![
                BlockRecord::new(1, 2.0, vec![Coord::new(0, 0), Coord::new(10, 0)]),
                BlockRecord::new(2, 2.0, vec![Coord::new(10, 0), Coord::new(10, 10)]),
                BlockRecord::new(3, 2.0, vec![Coord::new(10, 10), Coord::new(0, 10)]),
                BlockRecord::new(4, 2.0, vec![Coord::new(0, 10), Coord::new(0, 0)]),
            ],
        )]);
        let ids = lookup(&net, [(0, 0), (10, 0), (10, 10), (0, 10)]);
        (net, ids)
    }

    /// Straight three-vertex street: A:(0,0) ─3─ B:(3,0) ─4─ C:(7,0).
    pub fn line() -> (StreetNetwork, [IntersectionId; 3]) {
        let net = build(vec![StreetRecord::new(
            "Straight St",
            vec![
                BlockRecord::new(1, 2.0, vec![Coord::new(0, 0), Coord::new(3, 0)]),
                BlockRecord::new(2, 2.0, vec![Coord::new(3, 0), Coord::new(7, 0)]),
            ],
        )]);
        let ids = lookup(&net, [(0, 0), (3, 0), (7, 0)]);
        (net, ids)
    }

    /// Two components with no connecting block:
    ///
    ///   North St: (0,0)─(5,0)      South St: (0,20)─(5,20)
    pub fn disconnected() -> (StreetNetwork, [IntersectionId; 4]) {
        let net = build(vec![
            StreetRecord::new(
                "North St",
                vec![BlockRecord::new(1, 2.0, vec![Coord::new(0, 0), Coord::new(5, 0)])],
            ),
            StreetRecord::new(
                "South St",
                vec![BlockRecord::new(1, 2.0, vec![Coord::new(0, 20), Coord::new(5, 20)])],
            ),
        ]);
        let ids = lookup(&net, [(0, 0), (5, 0), (0, 20), (5, 20)]);
        (net, ids)
    }

    /// Two physical blocks joining the same pair of vertices:
    ///
    ///   Direct Rd  : A:(0,0)─Z:(10,0), length 10, added first
    ///   Scenic Loop: A─(5,12)─Z, length 26
    pub fn parallel() -> (StreetNetwork, [IntersectionId; 2]) {
        let net = build(vec![
            StreetRecord::new(
                "Direct Rd",
                vec![BlockRecord::new(1, 2.0, vec![Coord::new(0, 0), Coord::new(10, 0)])],
            ),
            StreetRecord::new(
                "Scenic Loop",
                vec![BlockRecord::new(
                    1,
                    2.0,
                    vec![Coord::new(0, 0), Coord::new(5, 12), Coord::new(10, 0)],
                )],
            ),
        ]);
        let ids = lookup(&net, [(0, 0), (10, 0)]);
        (net, ids)
    }

    /// Two routes from A:(0,0) to B:(8,6):
    ///
    ///   High St    : one bent block A─(8,0)─B, length 14
    ///   Cut Through: A ─5─ C:(4,3) ─5─ B, total length 10
    ///
    /// Fewest intersections is the single hop A,B; minimum traffic is the
    /// two-hop A,C,B.  Returned ids are `[a, b, c]`.
    pub fn detour() -> (StreetNetwork, [IntersectionId; 3]) {
        let net = build(vec![
            StreetRecord::new(
                "High St",
                vec![BlockRecord::new(
                    1,
                    3.0,
                    vec![Coord::new(0, 0), Coord::new(8, 0), Coord::new(8, 6)],
                )],
            ),
            StreetRecord::new(
                "Cut Through",
                vec![
                    BlockRecord::new(1, 1.0, vec![Coord::new(0, 0), Coord::new(4, 3)]),
                    BlockRecord::new(2, 1.0, vec![Coord::new(4, 3), Coord::new(8, 6)]),
                ],
            ),
        ]);
        let ids = lookup(&net, [(0, 0), (8, 6), (4, 3)]);
        (net, ids)
    }
}

// ── Reachability (DFS) ────────────────────────────────────────────────────────

#[cfg(test)]
mod reachable {
    use sg_core::IntersectionId;
    use sg_network::StreetNetwork;

    use crate::reachable;

    #[test]
    fn visits_in_preorder() {
        let (net, [a, b, c, d]) = super::helpers::square();
        // From A the first adjacency entry (A-B) is explored first, then the
        // walk continues B→C→D before the A-D edge is reconsidered.
        assert_eq!(reachable(&net, a), vec![a, b, c, d]);
        // From B the frontier unwinds the other way round the square.
        assert_eq!(reachable(&net, b), vec![b, a, d, c]);
    }

    #[test]
    fn idempotent_visitation_order() {
        let (net, [a, ..]) = super::helpers::square();
        let first = reachable(&net, a);
        let second = reachable(&net, a);
        assert_eq!(first, second);
    }

    #[test]
    fn never_crosses_components() {
        let (net, [n0, n1, s0, s1]) = super::helpers::disconnected();
        assert_eq!(reachable(&net, n0), vec![n0, n1]);
        let from_south = reachable(&net, s0);
        assert_eq!(from_south, vec![s0, s1]);
        assert!(!from_south.contains(&n0));
        assert!(!from_south.contains(&n1));
    }

    #[test]
    fn unknown_source_returns_empty() {
        let (net, _) = super::helpers::square();
        assert!(reachable(&net, IntersectionId(99)).is_empty());
        assert!(reachable(&net, IntersectionId::INVALID).is_empty());
        assert!(reachable(&StreetNetwork::empty(), IntersectionId(0)).is_empty());
    }
}

// ── Fewest intersections (BFS) ────────────────────────────────────────────────

#[cfg(test)]
mod fewest {
    use sg_core::IntersectionId;

    use crate::minimize_intersections;

    #[test]
    fn square_crosses_three_vertices() {
        let (net, [a, b, c, d]) = super::helpers::square();
        let path = minimize_intersections(&net, a, c);
        // Two equal-hop routes exist (via B or via D); either is valid.
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], a);
        assert_eq!(path[2], c);
        assert!(path[1] == b || path[1] == d);
    }

    #[test]
    fn single_hop_beats_shorter_two_hop() {
        let (net, [a, b, _]) = super::helpers::detour();
        // The direct block is geometrically longer but still one hop.
        assert_eq!(minimize_intersections(&net, a, b), vec![a, b]);
    }

    #[test]
    fn line_path_exact() {
        let (net, [a, b, c]) = super::helpers::line();
        assert_eq!(minimize_intersections(&net, a, c), vec![a, b, c]);
        assert_eq!(minimize_intersections(&net, c, a), vec![c, b, a]);
    }

    #[test]
    fn start_equals_end() {
        let (net, [a, ..]) = super::helpers::square();
        assert_eq!(minimize_intersections(&net, a, a), vec![a]);
    }

    #[test]
    fn unreachable_returns_empty() {
        let (net, [n0, _, s0, _]) = super::helpers::disconnected();
        assert!(minimize_intersections(&net, n0, s0).is_empty());
    }

    #[test]
    fn unknown_endpoints_return_empty() {
        let (net, [a, ..]) = super::helpers::square();
        assert!(minimize_intersections(&net, IntersectionId(99), a).is_empty());
        assert!(minimize_intersections(&net, a, IntersectionId::INVALID).is_empty());
    }
}

// ── Minimum traffic (Dijkstra) ────────────────────────────────────────────────

#[cfg(test)]
mod fastest {
    use sg_core::IntersectionId;

    use crate::{fastest_path, minimize_intersections, path_info};

    #[test]
    fn detour_beats_longer_direct_block() {
        let (net, [a, b, c]) = super::helpers::detour();
        // Total traffic 5 + 5 = 10 via C against 14 on the direct block.
        assert_eq!(fastest_path(&net, a, b), vec![a, c, b]);
    }

    #[test]
    fn never_costlier_than_fewest_hops_route() {
        let (net, [a, b, _]) = super::helpers::detour();
        let fast = path_info(&net, &fastest_path(&net, a, b));
        let hops = path_info(&net, &minimize_intersections(&net, a, b));
        assert!(fast.traffic <= hops.traffic);
    }

    #[test]
    fn equal_cost_square_takes_either_side() {
        let (net, [a, b, c, d]) = super::helpers::square();
        let path = fastest_path(&net, a, c);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], a);
        assert_eq!(path[2], c);
        assert!(path[1] == b || path[1] == d);
    }

    #[test]
    fn line_path_exact() {
        let (net, [a, b, c]) = super::helpers::line();
        assert_eq!(fastest_path(&net, a, c), vec![a, b, c]);
    }

    #[test]
    fn start_equals_end() {
        let (net, [a, ..]) = super::helpers::square();
        assert_eq!(fastest_path(&net, a, a), vec![a]);
    }

    #[test]
    fn unreachable_returns_empty() {
        let (net, [n0, _, s0, _]) = super::helpers::disconnected();
        assert!(fastest_path(&net, n0, s0).is_empty());
    }

    #[test]
    fn unknown_endpoints_return_empty() {
        let (net, [a, ..]) = super::helpers::square();
        assert!(fastest_path(&net, IntersectionId(99), a).is_empty());
        assert!(fastest_path(&net, a, IntersectionId::INVALID).is_empty());
    }
}

// ── Path statistics ───────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use sg_core::IntersectionId;

    use crate::{PathInfo, path_info};

    #[test]
    fn fewer_than_two_vertices_yield_zero() {
        let (net, [a, ..]) = super::helpers::line();
        assert_eq!(path_info(&net, &[]), PathInfo::ZERO);
        assert_eq!(path_info(&net, &[a]), PathInfo::ZERO);
    }

    #[test]
    fn line_totals() {
        let (net, [a, b, c]) = super::helpers::line();
        let info = path_info(&net, &[a, b, c]);
        assert_eq!(info.length, 7.0);
        assert_eq!(info.traffic, 7.0);
        assert_eq!(info.avg_traffic_factor, 1.0);
    }

    #[test]
    fn reverse_walk_same_totals() {
        let (net, [a, b, c]) = super::helpers::line();
        assert_eq!(path_info(&net, &[c, b, a]), path_info(&net, &[a, b, c]));
    }

    #[test]
    fn non_adjacent_pair_contributes_zero() {
        let (net, [a, _, c]) = super::helpers::line();
        // A and C are two hops apart; no single block joins them.
        assert_eq!(path_info(&net, &[a, c]), PathInfo::ZERO);

        let (net, [a, b, _, d]) = super::helpers::square();
        // Only the A-B hop lands on a block; the diagonal contributes zero.
        let info = path_info(&net, &[a, b, d]);
        assert_eq!(info.length, 10.0);
        assert_eq!(info.traffic, 10.0);
        assert_eq!(info.avg_traffic_factor, 1.0);
    }

    #[test]
    fn parallel_blocks_use_first_chain_match() {
        let (net, [a, z]) = super::helpers::parallel();
        // Two blocks join A and Z; the earlier entry in A's adjacency list
        // (the direct one) is the one that counts.
        let info = path_info(&net, &[a, z]);
        assert_eq!(info.length, 10.0);
        assert_eq!(info.traffic, 10.0);
    }

    #[test]
    fn unknown_vertices_contribute_zero() {
        let (net, [a, ..]) = super::helpers::line();
        assert_eq!(path_info(&net, &[a, IntersectionId(99)]), PathInfo::ZERO);
        assert_eq!(path_info(&net, &[IntersectionId(99), a]), PathInfo::ZERO);
    }
}

// ── Concurrent queries ────────────────────────────────────────────────────────

#[cfg(test)]
mod concurrency {
    use crate::{fastest_path, minimize_intersections, path_info, reachable};

    #[test]
    fn parallel_queries_agree() {
        let (net, [a, _, c, _]) = super::helpers::square();
        let net = &net;
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(move || {
                        let visited = reachable(net, a);
                        let hops = minimize_intersections(net, a, c);
                        let fast = fastest_path(net, a, c);
                        let info = path_info(net, &fast);
                        (visited, hops, fast, info)
                    })
                })
                .collect();
            let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert!(results.windows(2).all(|w| w[0] == w[1]));
        });
    }
}
