//! campus — smallest example for the streetgrid routing engine.
//!
//! Builds a 6-intersection synthetic campus street map, then runs every
//! query the routing layer offers: a reachability sweep, a
//! fewest-intersections route, a minimum-traffic route, and statistics
//! for a hand-picked perimeter tour.

mod map;

use anyhow::Result;

use sg_core::{Coord, IntersectionId};
use sg_network::{Block, GaussianTraffic, MapSurface};
use sg_routing::{fastest_path, minimize_intersections, path_info, reachable};

use map::build_map;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;

/// Display names for the landmark array returned by [`map::build_map`].
const LANDMARK_NAMES: [&str; 6] =
    ["Quad", "Library", "Stadium", "West Gate", "Student Union", "East Gate"];

// ── Construction survey ───────────────────────────────────────────────────────

/// Tallies builder callbacks while the map is assembled.
#[derive(Default)]
struct SurveyLog {
    intersections: usize,
    segments:      usize,
    paved_length:  f64,
}

impl MapSurface for SurveyLog {
    fn intersection_added(&mut self, _id: IntersectionId, _at: Coord) {
        self.intersections += 1;
    }

    fn segment_added(&mut self, forward: &Block) {
        self.segments += 1;
        self.paved_length += forward.length();
    }
}

// ── Route formatting ──────────────────────────────────────────────────────────

fn route_label(route: &[IntersectionId], landmarks: &[IntersectionId; 6]) -> String {
    route
        .iter()
        .map(|id| match landmarks.iter().position(|l| l == id) {
            Some(i) => LANDMARK_NAMES[i].to_string(),
            None => id.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== campus — streetgrid routing engine ===");
    println!("Seed: {SEED}");
    println!();

    // 1. Assemble the street map, with a survey listening in.
    let mut traffic = GaussianTraffic::new(SEED);
    let mut survey = SurveyLog::default();
    let (net, landmarks) = build_map(&mut traffic, &mut survey)?;
    let [quad, _library, stadium, west_gate, student_union, east_gate] = landmarks;
    println!(
        "Street map: {} intersections, {} segments ({} directed blocks)",
        net.intersection_count(),
        net.segment_count(),
        net.block_count(),
    );
    println!(
        "Survey: {} intersections staked, {} segments paved, {:.0} m of roadway",
        survey.intersections, survey.segments, survey.paved_length,
    );
    println!();

    // 2. Snap an off-grid coordinate to the nearest intersection.
    let probe = Coord::new(280, 30);
    let near = net.nearest_intersection(probe).unwrap();
    let at = net.intersection(near).unwrap();
    println!(
        "Nearest intersection to {probe}: {} at {at}",
        route_label(&[near], &landmarks),
    );
    println!();

    // 3. Reachability sweep from the quad.
    let visited = reachable(&net, quad);
    println!(
        "Reachable from Quad: {} of {} intersections",
        visited.len(),
        net.intersection_count(),
    );
    println!("  visit order: {}", route_label(&visited, &landmarks));
    println!();

    // 4. Fewest-intersections route across campus.
    let hops = minimize_intersections(&net, quad, stadium);

    // 5. Minimum-traffic route over the same pair.
    let fast = fastest_path(&net, quad, stadium);

    println!("Quad -> Stadium");
    println!("  fewest intersections : {}", route_label(&hops, &landmarks));
    println!("  minimum traffic      : {}", route_label(&fast, &landmarks));
    println!();

    // 6. Compare the two routes on length and traffic.
    println!(
        "{:<22} {:<7} {:<11} {:<12} {:<10}",
        "Route", "Stops", "Length (m)", "Avg factor", "Traffic"
    );
    println!("{}", "-".repeat(66));
    for (name, route) in [("fewest intersections", &hops), ("minimum traffic", &fast)] {
        let info = path_info(&net, route);
        println!(
            "{:<22} {:<7} {:<11.1} {:<12.3} {:<10.1}",
            name,
            route.len(),
            info.length,
            info.avg_traffic_factor,
            info.traffic,
        );
    }
    println!();

    // 7. Statistics for a hand-picked perimeter tour.
    let tour = vec![quad, west_gate, student_union, east_gate, stadium, quad];
    let info = path_info(&net, &tour);
    println!("Perimeter tour: {}", route_label(&tour, &landmarks));
    println!(
        "  {} stops, {:.0} m, avg traffic factor {:.3}, total traffic {:.1}",
        tour.len(),
        info.length,
        info.avg_traffic_factor,
        info.traffic,
    );

    Ok(())
}
