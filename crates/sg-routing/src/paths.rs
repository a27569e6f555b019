//! Path queries: fewest-intersections (BFS) and minimum-traffic (Dijkstra).
//!
//! Both return the path as an ordered vertex sequence from start to end, and
//! both signal "no path" with an empty vector — never an error.  Per-query
//! traversal state lives in local arrays indexed by vertex id; the network
//! itself is only read.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use sg_core::IntersectionId;
use sg_network::StreetNetwork;

/// Path from `start` to `end` crossing the fewest intersections.
///
/// Every block counts as one hop regardless of its length or traffic.
/// Returns `[start]` when `start == end`, and an empty vector when either
/// endpoint is unknown or no path exists.  When several fewest-hop paths
/// exist the result is one of them; callers must not rely on which.
pub fn minimize_intersections(
    net: &StreetNetwork,
    start: IntersectionId,
    end: IntersectionId,
) -> Vec<IntersectionId> {
    if !net.contains(start) || !net.contains(end) {
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }

    let n = net.intersection_count();
    let mut visited = vec![false; n];
    // prev[v] = predecessor on the discovered path; INVALID for unreached
    // vertices and for `start` itself.
    let mut prev = vec![IntersectionId::INVALID; n];
    let mut queue = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        for (_, blk) in net.outgoing(v) {
            let next = blk.other(v);
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            prev[next.index()] = v;
            // Under BFS frontier discipline the first discovery of `end` is
            // already a fewest-hop path.
            if next == end {
                return walk_back(&prev, start, end);
            }
            queue.push_back(next);
        }
    }

    Vec::new()
}

/// Path from `start` to `end` with the minimum total traffic.
///
/// Edge cost is the block's traffic value (`length × traffic_factor`), which
/// is non-negative by construction, so Dijkstra's settled-vertex property
/// holds and the loop can stop as soon as `end` is popped.  Returns
/// `[start]` when `start == end`, and an empty vector when either endpoint
/// is unknown or no path exists.  Equal-cost ties fall to the lower vertex
/// id; callers must not rely on that.
pub fn fastest_path(
    net: &StreetNetwork,
    start: IntersectionId,
    end: IntersectionId,
) -> Vec<IntersectionId> {
    if !net.contains(start) || !net.contains(end) {
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }

    let n = net.intersection_count();
    // dist[v] = best known cumulative traffic to reach v.
    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![IntersectionId::INVALID; n];
    let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();

    dist[start.index()] = 0.0;
    heap.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = heap.pop() {
        let v = entry.node;
        // The first pop of `end` carries its final distance.
        if v == end {
            return walk_back(&prev, start, end);
        }
        // Skip stale heap entries.
        if entry.cost.0 > dist[v.index()] {
            continue;
        }

        for (_, blk) in net.outgoing(v) {
            let next = blk.other(v);
            let candidate = dist[v.index()] + blk.traffic();
            if candidate < dist[next.index()] {
                dist[next.index()] = candidate;
                prev[next.index()] = v;
                heap.push(QueueEntry::new(next, candidate));
            }
        }
    }

    Vec::new()
}

/// Walk the predecessor array from `end` back to `start`, then reverse into
/// start → end order.  Callers must only invoke this once `end` has been
/// reached.
fn walk_back(
    prev: &[IntersectionId],
    start: IntersectionId,
    end: IntersectionId,
) -> Vec<IntersectionId> {
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        cur = prev[cur.index()];
        debug_assert_ne!(cur, IntersectionId::INVALID, "broken predecessor chain");
        path.push(cur);
    }
    path.reverse();
    path
}

// ── Min-heap entry ────────────────────────────────────────────────────────────

/// Total order over `f64` via `total_cmp`.  Costs are finite sums of
/// non-negative block traffic, so NaN never appears.
#[derive(Copy, Clone, Debug)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: IntersectionId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: IntersectionId, cost: f64) -> Self {
        Self { node, cost: FloatOrd(cost) }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, with
        // vertex id as a deterministic tie-break.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
