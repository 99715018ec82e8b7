//! Whitespace-separated problem input.
//!
//! The format is a flat token stream read in fixed order:
//!
//! ```text
//! N T M K F
//! <N hub ids>
//! <N house ids>
//! <K fuel station ids>
//! <M lines of: u v cost>
//! ```
//!
//! Line breaks carry no meaning. Tokens after the last edge are ignored.

use std::io::Read;
use std::str::SplitWhitespace;

use tracing::debug;

use crate::error::{Error, Result};
use crate::network::{Cost, Network, NodeId};
use crate::routing::{plan_delivery, DeliveryPlan, DeliveryRequest};
use crate::shortest::ShortestPaths;

/// Parsed delivery problem, not yet validated against the network bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub node_count: usize,
    pub fuel_capacity: Cost,
    pub hubs: Vec<NodeId>,
    pub houses: Vec<NodeId>,
    pub fuel_stations: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId, Cost)>,
}

impl Problem {
    /// Build the network model, validating edge and station ids.
    pub fn network(&self) -> Result<Network> {
        Network::new(self.node_count, &self.edges, &self.fuel_stations)
    }

    /// Delivery request carried by this problem.
    pub fn request(&self) -> DeliveryRequest {
        DeliveryRequest::new(self.hubs.clone(), self.houses.clone(), self.fuel_capacity)
    }

    /// Run the whole pipeline: network, shortest paths, route.
    pub fn plan(&self) -> Result<DeliveryPlan> {
        let network = self.network()?;
        let paths = ShortestPaths::compute(&network);
        plan_delivery(&network, &paths, &self.request())
    }
}

const MAX_PREALLOCATED_EDGES: usize = 1024;

/// Parse a problem from its textual form.
pub fn parse_problem(text: &str) -> Result<Problem> {
    let mut tokens = Tokens::new(text);

    let pair_count = tokens.next_usize("hub/house count N")?;
    let node_count = tokens.next_usize("node count T")?;
    let edge_count = tokens.next_usize("edge count M")?;
    let station_count = tokens.next_usize("fuel station count K")?;
    let fuel_capacity = tokens.next_cost("fuel capacity F")?;

    let hubs = tokens.next_nodes(pair_count, "hub id")?;
    let houses = tokens.next_nodes(pair_count, "house id")?;
    let fuel_stations = tokens.next_nodes(station_count, "fuel station id")?;

    // The declared count is untrusted; the token stream bounds the real size.
    let mut edges = Vec::with_capacity(edge_count.min(MAX_PREALLOCATED_EDGES));
    for _ in 0..edge_count {
        let u = tokens.next_usize("edge endpoint")?;
        let v = tokens.next_usize("edge endpoint")?;
        let cost = tokens.next_cost("edge cost")?;
        edges.push((u, v, cost));
    }

    let trailing = tokens.remaining();
    if trailing > 0 {
        debug!(trailing, "ignoring trailing input tokens");
    }

    Ok(Problem {
        node_count,
        fuel_capacity,
        hubs,
        houses,
        fuel_stations,
        edges,
    })
}

/// Read all of `reader` and parse it as a problem.
pub fn read_problem<R: Read>(mut reader: R) -> Result<Problem> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_problem(&text)
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_token(&mut self, expected: &str) -> Result<&'a str> {
        self.inner.next().ok_or_else(|| Error::UnexpectedEof {
            expected: expected.to_string(),
        })
    }

    fn next_usize(&mut self, expected: &str) -> Result<usize> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| invalid(token, expected))
    }

    fn next_cost(&mut self, expected: &str) -> Result<Cost> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| invalid(token, expected))
    }

    fn next_nodes(&mut self, count: usize, expected: &str) -> Result<Vec<NodeId>> {
        (0..count).map(|_| self.next_usize(expected)).collect()
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

fn invalid(token: &str, expected: &str) -> Error {
    Error::InvalidToken {
        token: token.to_string(),
        expected: expected.to_string(),
    }
}
