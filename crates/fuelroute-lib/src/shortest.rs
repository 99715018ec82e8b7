//! All-pairs shortest paths over the network.
//!
//! Distances and next hops are stored as dense `T×T` row-major tables and are
//! immutable once computed. The planner and the farthest-point selector only
//! ever read from them.

use tracing::debug;

use crate::network::{Cost, Network, NodeId};
use crate::path::reconstruct_path;

/// Storage sentinel for unreachable pairs. Never exposed through the API;
/// `Network::new` rejects edges costing more than [`crate::MAX_EDGE_COST`].
const UNREACHABLE: Cost = Cost::MAX;

/// Distance and next-hop tables for every ordered pair of nodes.
#[derive(Debug, Clone, Default)]
pub struct ShortestPaths {
    size: usize,
    dist: Vec<Cost>,
    next: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    /// Run Floyd–Warshall over the network.
    ///
    /// Intermediate nodes are swept in index order and a pair is only updated
    /// on strict improvement, so among equal-length paths the first one found
    /// is kept.
    pub fn compute(network: &Network) -> Self {
        let size = network.node_count();
        let mut paths = ShortestPaths {
            size,
            dist: vec![UNREACHABLE; size * size],
            next: vec![None; size * size],
        };

        for u in 0..size {
            let idx = paths.index(u, u);
            paths.dist[idx] = 0;
            paths.next[idx] = Some(u);
        }

        for u in 0..size {
            for edge in network.neighbours(u) {
                let idx = paths.index(u, edge.target);
                paths.dist[idx] = edge.cost;
                paths.next[idx] = Some(edge.target);
            }
        }

        for k in 0..size {
            for i in 0..size {
                let dik = paths.dist[paths.index(i, k)];
                if dik == UNREACHABLE {
                    continue;
                }
                let hop = paths.next[paths.index(i, k)];
                for j in 0..size {
                    let dkj = paths.dist[paths.index(k, j)];
                    if dkj == UNREACHABLE {
                        continue;
                    }
                    let via = dik.saturating_add(dkj);
                    let idx = paths.index(i, j);
                    if paths.dist[idx] > via {
                        paths.dist[idx] = via;
                        paths.next[idx] = hop;
                    }
                }
            }
        }

        debug!(nodes = size, "computed all-pairs shortest paths");
        paths
    }

    #[inline]
    fn index(&self, from: NodeId, to: NodeId) -> usize {
        from * self.size + to
    }

    fn contains(&self, node: NodeId) -> bool {
        node < self.size
    }

    /// Number of nodes covered by the tables.
    pub fn node_count(&self) -> usize {
        self.size
    }

    /// Shortest-path cost from `from` to `to`, or `None` when unreachable.
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        match self.dist[self.index(from, to)] {
            UNREACHABLE => None,
            cost => Some(cost),
        }
    }

    /// First step on the shortest path from `from` toward `to`.
    pub fn next_hop(&self, from: NodeId, to: NodeId) -> Option<NodeId> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        self.next[self.index(from, to)]
    }

    /// Explicit node sequence from `from` to `to` inclusive; empty when
    /// unreachable.
    pub fn path(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        reconstruct_path(self, from, to)
    }

    /// Returns `true` if `distance(i, j) == distance(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| self.distance(i, j) == self.distance(j, i))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Network {
        // 0 -1- 1
        // |     |
        // 4     1
        // |     |
        // 3 -1- 2
        Network::new(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 4)], &[]).unwrap()
    }

    #[test]
    fn diagonal_is_zero() {
        let paths = ShortestPaths::compute(&square());
        for u in 0..4 {
            assert_eq!(paths.distance(u, u), Some(0));
            assert_eq!(paths.next_hop(u, u), Some(u));
        }
    }

    #[test]
    fn indirect_route_beats_direct_edge() {
        let paths = ShortestPaths::compute(&square());
        assert_eq!(paths.distance(0, 3), Some(3));
        assert_eq!(paths.next_hop(0, 3), Some(1));
        assert_eq!(paths.path(0, 3), vec![0, 1, 2, 3]);
    }

    #[test]
    fn disconnected_pairs_are_unreachable() {
        let network = Network::new(3, &[(0, 1, 2)], &[]).unwrap();
        let paths = ShortestPaths::compute(&network);
        assert_eq!(paths.distance(0, 2), None);
        assert_eq!(paths.next_hop(2, 0), None);
        assert!(paths.path(0, 2).is_empty());
    }

    #[test]
    fn equal_length_tie_keeps_first_found() {
        // 0 -> 3 has two paths of cost 2: via 1 and via 2. Node 1 is swept
        // first as an intermediate, so it wins.
        let network =
            Network::new(4, &[(0, 1, 1), (1, 3, 1), (0, 2, 1), (2, 3, 1)], &[]).unwrap();
        let paths = ShortestPaths::compute(&network);
        assert_eq!(paths.distance(0, 3), Some(2));
        assert_eq!(paths.path(0, 3), vec![0, 1, 3]);
    }

    #[test]
    fn out_of_range_queries_are_unreachable() {
        let paths = ShortestPaths::compute(&square());
        assert_eq!(paths.distance(0, 9), None);
        assert_eq!(paths.next_hop(9, 0), None);
    }

    #[test]
    fn huge_costs_do_not_wrap() {
        let edges = [(0, 1, Cost::MAX - 1), (1, 2, Cost::MAX - 1)];
        let network = Network::new(3, &edges, &[]).unwrap();
        let paths = ShortestPaths::compute(&network);
        assert_eq!(paths.distance(0, 1), Some(Cost::MAX - 1));
        assert_eq!(paths.next_hop(0, 1), Some(1));
        assert!(paths.distance(0, 2).is_none());
        assert_eq!(paths.next_hop(0, 2), None);
        assert!(paths.path(0, 2).is_empty());
    }

    #[test]
    fn square_is_symmetric() {
        assert!(ShortestPaths::compute(&square()).is_symmetric());
    }
}
