//! Reachability query: depth-first traversal in pre-order.

use sg_core::IntersectionId;
use sg_network::StreetNetwork;

/// Every intersection reachable from `source`, in depth-first pre-order
/// (the order each vertex is first visited).
///
/// Traversal follows each vertex's adjacency list in insertion order, taking
/// the far endpoint of each directed block.  Vertices are visited at most
/// once, so cyclic networks terminate.  An unknown `source` yields an empty
/// vector.
///
/// Uses an explicit stack rather than recursion so deep networks cannot
/// overflow the call stack; pushing each vertex's neighbors in reverse keeps
/// the visit order identical to the recursive formulation.
pub fn reachable(net: &StreetNetwork, source: IntersectionId) -> Vec<IntersectionId> {
    if !net.contains(source) {
        return Vec::new();
    }

    let mut visited = vec![false; net.intersection_count()];
    let mut order = Vec::new();
    let mut stack = vec![source];

    while let Some(v) = stack.pop() {
        if visited[v.index()] {
            continue;
        }
        visited[v.index()] = true;
        order.push(v);

        for &b in net.adjacent(v).iter().rev() {
            let next = net.block(b).other(v);
            if !visited[next.index()] {
                stack.push(next);
            }
        }
    }
    order
}
