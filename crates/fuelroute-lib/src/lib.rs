//! Fuelroute library entry points.
//!
//! This crate parses a delivery problem, builds the network model, computes
//! all-pairs shortest paths, and plans a single-vehicle route that tours every
//! hub and then every house without running out of fuel. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod fuel;
pub mod input;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod shortest;

pub use error::{Error, Result};
pub use fuel::{FuelTank, Hop, TraverseError};
pub use input::{parse_problem, read_problem, Problem};
pub use network::{Cost, Edge, Network, NodeId, MAX_EDGE_COST};
pub use output::{join_nodes, DeliverySummary, FailureSummary, RouteRenderMode};
pub use path::{path_cost, reconstruct_path};
pub use routing::{
    farthest_from_fuel, nearest_unvisited, plan_delivery, DeliveryPlan, DeliveryRequest,
    FailureKind, FailurePhase, PlannerState, RouteBuilder, RouteFailure, RouteStep, StepRole,
};
pub use shortest::ShortestPaths;
