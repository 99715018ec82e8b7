//! Endpoint and next-target selection.

use std::collections::HashSet;

use crate::network::{Cost, NodeId};
use crate::shortest::ShortestPaths;

/// Pick the candidate whose nearest fuel station is farthest away.
///
/// A candidate that cannot reach any station (or a network without stations)
/// counts as infinitely remote. Ties go to the earliest candidate. Returns
/// `None` only when `candidates` is empty.
pub fn farthest_from_fuel(
    paths: &ShortestPaths,
    fuel_stations: &[NodeId],
    candidates: &[NodeId],
) -> Option<NodeId> {
    let mut best: Option<(NodeId, Cost)> = None;
    for &candidate in candidates {
        // Cost::MAX is never a real distance, so it stands in for "no station".
        let remoteness = fuel_stations
            .iter()
            .filter_map(|&station| paths.distance(candidate, station))
            .min()
            .unwrap_or(Cost::MAX);

        match best {
            Some((_, current)) if remoteness <= current => {}
            _ => best = Some((candidate, remoteness)),
        }
    }
    best.map(|(node, _)| node)
}

/// Nearest reachable candidate from `from` that is not in `visited`.
///
/// Ties go to the earliest candidate; unreachable candidates are never picked.
pub fn nearest_unvisited(
    paths: &ShortestPaths,
    from: NodeId,
    candidates: &[NodeId],
    visited: &HashSet<NodeId>,
) -> Option<NodeId> {
    let mut best: Option<(NodeId, Cost)> = None;
    for &candidate in candidates {
        if visited.contains(&candidate) {
            continue;
        }
        let Some(distance) = paths.distance(from, candidate) else {
            continue;
        };
        match best {
            Some((_, current)) if distance >= current => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(node, _)| node)
}
