use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Identifier of a node in the transportation network, in `[0, node_count)`.
pub type NodeId = usize;

/// Edge traversal cost. Fuel is measured in the same unit.
pub type Cost = u64;

/// Largest cost accepted on a single edge. `Cost::MAX` is reserved for
/// unreachable pairs in [`crate::ShortestPaths`].
pub const MAX_EDGE_COST: Cost = Cost::MAX - 1;

/// Edge within the network adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    pub cost: Cost,
}

/// Undirected weighted network with designated fuel stations.
///
/// The adjacency list and the direct-cost lookup are built together so a
/// duplicate edge overwrites the stored cost in both (last one read wins).
#[derive(Debug, Clone, Default)]
pub struct Network {
    node_count: usize,
    adjacency: Vec<Vec<Edge>>,
    costs: HashMap<(NodeId, NodeId), Cost>,
    fuel_stations: Vec<NodeId>,
    station_set: HashSet<NodeId>,
}

impl Network {
    /// Build a network from `(u, v, cost)` triples and fuel-station ids.
    ///
    /// Endpoints and station ids must be below `node_count`. Self-loops are
    /// dropped since they never lie on a shortest path. Costs above
    /// [`MAX_EDGE_COST`] are rejected.
    pub fn new(
        node_count: usize,
        edges: &[(NodeId, NodeId, Cost)],
        fuel_stations: &[NodeId],
    ) -> Result<Self> {
        if node_count.checked_mul(node_count).is_none() {
            return Err(Error::NetworkTooLarge { node_count });
        }
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(node_count)
            .map_err(|_| Error::NetworkTooLarge { node_count })?;
        adjacency.resize_with(node_count, Vec::new);

        let mut network = Network {
            node_count,
            adjacency,
            costs: HashMap::with_capacity(edges.len() * 2),
            fuel_stations: Vec::with_capacity(fuel_stations.len()),
            station_set: HashSet::with_capacity(fuel_stations.len()),
        };

        for &station in fuel_stations {
            network.check_bounds("fuel station", station)?;
            network.fuel_stations.push(station);
            network.station_set.insert(station);
        }

        for &(u, v, cost) in edges {
            network.check_bounds("edge endpoint", u)?;
            network.check_bounds("edge endpoint", v)?;
            if cost > MAX_EDGE_COST {
                return Err(Error::EdgeCostTooLarge { from: u, to: v, cost });
            }
            if u == v {
                debug!(node = u, cost, "ignoring self-loop edge");
                continue;
            }
            network.insert_edge(u, v, cost);
        }

        debug!(
            nodes = network.node_count,
            edges = network.edge_count(),
            stations = network.fuel_stations.len(),
            "built network"
        );

        Ok(network)
    }

    fn check_bounds(&self, role: &'static str, node: NodeId) -> Result<()> {
        if node >= self.node_count {
            return Err(Error::NodeOutOfRange {
                role,
                node,
                node_count: self.node_count,
            });
        }
        Ok(())
    }

    fn insert_edge(&mut self, u: NodeId, v: NodeId, cost: Cost) {
        self.costs.insert((u, v), cost);
        self.costs.insert((v, u), cost);
        upsert(&mut self.adjacency[u], v, cost);
        upsert(&mut self.adjacency[v], u, cost);
    }

    /// Total number of nodes `T`.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of distinct undirected edges after duplicate collapsing.
    pub fn edge_count(&self) -> usize {
        self.costs.len() / 2
    }

    /// Return the neighbours for a given node.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Cost of the direct edge between `u` and `v`, if one was given.
    pub fn edge_cost(&self, u: NodeId, v: NodeId) -> Option<Cost> {
        self.costs.get(&(u, v)).copied()
    }

    /// Whether arriving at `node` refills the tank.
    pub fn is_fuel_station(&self, node: NodeId) -> bool {
        self.station_set.contains(&node)
    }

    /// Fuel stations in input order.
    pub fn fuel_stations(&self) -> &[NodeId] {
        &self.fuel_stations
    }

    /// Check that `node` is a valid identifier, tagging errors with `role`.
    pub fn ensure_node(&self, role: &'static str, node: NodeId) -> Result<()> {
        self.check_bounds(role, node)
    }
}

fn upsert(edges: &mut Vec<Edge>, target: NodeId, cost: Cost) {
    if let Some(existing) = edges.iter_mut().find(|edge| edge.target == target) {
        existing.cost = cost;
        return;
    }
    edges.push(Edge { target, cost });
}
