//! Delivery route planning.
//!
//! This module provides:
//! - [`DeliveryRequest`] - hubs, houses and fuel capacity for one run
//! - [`DeliveryPlan`] - the finished route with a per-step fuel trace
//! - [`RouteFailure`] - structured payload when the fuel constraint is violated
//! - [`plan_delivery`] - main entry point
//!
//! # State machine
//!
//! Planning is driven by [`RouteBuilder`], which moves through
//! [`PlannerState::TouringHubs`], [`PlannerState::TouringHouses`] and ends in
//! either [`PlannerState::Done`] or [`PlannerState::Failed`]. Hubs are toured
//! greedily (nearest unvisited first), houses in input order, and the route
//! starts and ends at the points farthest from any fuel station.
//!
//! # Example
//!
//! ```
//! use fuelroute_lib::{plan_delivery, DeliveryRequest, Network, ShortestPaths};
//!
//! let network = Network::new(2, &[(0, 1, 5)], &[]).unwrap();
//! let paths = ShortestPaths::compute(&network);
//! let request = DeliveryRequest::new(vec![0], vec![1], 10);
//! let plan = plan_delivery(&network, &paths, &request).unwrap();
//! assert_eq!(plan.route(), vec![0, 1]);
//! assert_eq!(plan.fuel_remaining, 5);
//! ```

mod planner;
mod select;

pub use planner::{PlannerState, RouteBuilder};
pub use select::{farthest_from_fuel, nearest_unvisited};

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::error::{Error, Result};
use crate::fuel::TraverseError;
use crate::network::{Cost, Network, NodeId};
use crate::shortest::ShortestPaths;

/// Hubs, houses and tank size for one planning run.
///
/// Houses are given parallel to hubs, but the pairing is not used when
/// ordering visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub hubs: Vec<NodeId>,
    pub houses: Vec<NodeId>,
    pub fuel_capacity: Cost,
}

impl DeliveryRequest {
    pub fn new(hubs: Vec<NodeId>, houses: Vec<NodeId>, fuel_capacity: Cost) -> Self {
        Self {
            hubs,
            houses,
            fuel_capacity,
        }
    }

    /// Reject empty target lists and ids outside the network.
    pub fn validate(&self, network: &Network) -> Result<()> {
        if self.hubs.is_empty() {
            return Err(Error::EmptyHubs);
        }
        if self.houses.is_empty() {
            return Err(Error::EmptyHouses);
        }
        for &hub in &self.hubs {
            network.ensure_node("hub", hub)?;
        }
        for &house in &self.houses {
            network.ensure_node("house", house)?;
        }
        Ok(())
    }
}

/// Why a node appears in the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepRole {
    /// The starting hub.
    Start,
    /// A hub reached as an explicit visitation target.
    Hub,
    /// A house reached as an explicit visitation target.
    House,
    /// Passed through on the way to a target.
    Transit,
}

impl StepRole {
    pub fn label(self) -> &'static str {
        match self {
            StepRole::Start => "start",
            StepRole::Hub => "hub",
            StepRole::House => "house",
            StepRole::Transit => "transit",
        }
    }
}

/// One node of the planned route with the fuel state on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteStep {
    pub index: usize,
    pub node: NodeId,
    /// Cost of the edge used to arrive here; zero for the first step.
    pub hop_cost: Cost,
    pub fuel_remaining: Cost,
    pub refueled: bool,
    pub role: StepRole,
}

/// Successfully planned delivery route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryPlan {
    pub start_hub: NodeId,
    pub end_house: NodeId,
    pub fuel_capacity: Cost,
    pub fuel_remaining: Cost,
    pub steps: Vec<RouteStep>,
    /// Hubs the hub tour could not reach from where it stopped.
    pub unreached_hubs: Vec<NodeId>,
}

impl DeliveryPlan {
    /// Every node traversed, transit nodes included.
    pub fn route(&self) -> Vec<NodeId> {
        self.steps.iter().map(|step| step.node).collect()
    }

    /// Number of nodes in the route.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Sum of all edge costs along the route.
    pub fn total_cost(&self) -> Cost {
        self.steps
            .iter()
            .fold(0, |total: Cost, step| total.saturating_add(step.hop_cost))
    }

    /// Number of fuel-station refills along the route.
    pub fn refuel_count(&self) -> usize {
        self.steps.iter().filter(|step| step.refueled).count()
    }
}

/// Planning phase in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePhase {
    Hubs,
    Houses,
    LastHouse,
}

impl fmt::Display for FailurePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            FailurePhase::Hubs => "Failed fuel constraint while visiting hubs.",
            FailurePhase::Houses => "Failed fuel constraint while visiting houses.",
            FailurePhase::LastHouse => "Failed fuel constraint on last house.",
        };
        f.write_str(message)
    }
}

/// What stopped the route from being extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FailureKind {
    /// The next edge costs more fuel than is left in the tank.
    InsufficientFuel {
        from: NodeId,
        to: NodeId,
        required: Cost,
        available: Cost,
    },
    /// Two consecutive path nodes are not joined by a direct edge.
    MissingEdge { from: NodeId, to: NodeId },
    /// No path exists between the current position and the target.
    Unreachable { from: NodeId, to: NodeId },
}

impl FailureKind {
    /// The `(from, to)` pair that could not be traversed.
    pub fn edge(&self) -> (NodeId, NodeId) {
        match *self {
            FailureKind::InsufficientFuel { from, to, .. }
            | FailureKind::MissingEdge { from, to }
            | FailureKind::Unreachable { from, to } => (from, to),
        }
    }
}

impl From<TraverseError> for FailureKind {
    fn from(err: TraverseError) -> Self {
        match err {
            TraverseError::MissingEdge { from, to } => FailureKind::MissingEdge { from, to },
            TraverseError::InsufficientFuel {
                from,
                to,
                required,
                available,
            } => FailureKind::InsufficientFuel {
                from,
                to,
                required,
                available,
            },
        }
    }
}

/// Structured payload describing a failed planning run.
///
/// Displays as the phase message only; the partial route and failing edge
/// are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{phase}")]
pub struct RouteFailure {
    pub phase: FailurePhase,
    pub kind: FailureKind,
    pub partial_route: Vec<NodeId>,
    pub fuel_remaining: Cost,
}

/// Plan a delivery route over a prepared network and its shortest paths.
pub fn plan_delivery(
    network: &Network,
    paths: &ShortestPaths,
    request: &DeliveryRequest,
) -> Result<DeliveryPlan> {
    let builder = RouteBuilder::new(network, paths, request)?;
    let plan = builder.run()?;
    info!(
        nodes = plan.len(),
        cost = plan.total_cost(),
        refuels = plan.refuel_count(),
        "planned delivery route"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(node: NodeId, hop_cost: Cost, refueled: bool) -> RouteStep {
        RouteStep {
            index: 0,
            node,
            hop_cost,
            fuel_remaining: 0,
            refueled,
            role: StepRole::Transit,
        }
    }

    #[test]
    fn plan_totals() {
        let plan = DeliveryPlan {
            start_hub: 0,
            end_house: 2,
            fuel_capacity: 10,
            fuel_remaining: 3,
            steps: vec![step(0, 0, false), step(1, 4, true), step(2, 7, false)],
            unreached_hubs: Vec::new(),
        };
        assert_eq!(plan.route(), vec![0, 1, 2]);
        assert_eq!(plan.hop_count(), 2);
        assert_eq!(plan.total_cost(), 11);
        assert_eq!(plan.refuel_count(), 1);
    }

    #[test]
    fn failure_displays_phase_message() {
        let failure = RouteFailure {
            phase: FailurePhase::LastHouse,
            kind: FailureKind::Unreachable { from: 1, to: 4 },
            partial_route: vec![0, 1],
            fuel_remaining: 2,
        };
        assert_eq!(failure.to_string(), "Failed fuel constraint on last house.");
        assert_eq!(failure.kind.edge(), (1, 4));
    }

    #[test]
    fn empty_lists_are_rejected() {
        let network = Network::new(2, &[(0, 1, 1)], &[]).unwrap();
        assert!(matches!(
            DeliveryRequest::new(vec![], vec![1], 5).validate(&network),
            Err(Error::EmptyHubs)
        ));
        assert!(matches!(
            DeliveryRequest::new(vec![0], vec![], 5).validate(&network),
            Err(Error::EmptyHouses)
        ));
    }

    #[test]
    fn out_of_range_house_is_rejected() {
        let network = Network::new(2, &[(0, 1, 1)], &[]).unwrap();
        let err = DeliveryRequest::new(vec![0], vec![7], 5)
            .validate(&network)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::NodeOutOfRange {
                role: "house",
                node: 7,
                ..
            }
        ));
    }
}
