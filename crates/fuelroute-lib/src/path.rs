use crate::network::{Cost, Network, NodeId};
use crate::shortest::ShortestPaths;

/// Reconstruct the node sequence from `start` to `goal` by following next
/// hops.
///
/// Returns an empty vector when `goal` is unreachable from `start`; callers
/// must check for that before use. `reconstruct_path(p, u, u)` is `[u]`.
pub fn reconstruct_path(paths: &ShortestPaths, start: NodeId, goal: NodeId) -> Vec<NodeId> {
    if paths.next_hop(start, goal).is_none() {
        return Vec::new();
    }

    let mut path = vec![start];
    let mut current = start;
    while current != goal {
        // A simple path never has more than node_count entries.
        if path.len() >= paths.node_count() {
            return Vec::new();
        }
        let Some(next) = paths.next_hop(current, goal) else {
            return Vec::new();
        };
        path.push(next);
        current = next;
    }
    path
}

/// Sum of direct edge costs along `path`, or `None` if two consecutive nodes
/// are not joined by an edge.
pub fn path_cost(network: &Network, path: &[NodeId]) -> Option<Cost> {
    path.windows(2).try_fold(0 as Cost, |total, pair| {
        network
            .edge_cost(pair[0], pair[1])
            .map(|cost| total.saturating_add(cost))
    })
}
