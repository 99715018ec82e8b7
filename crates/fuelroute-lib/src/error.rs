use thiserror::Error;

use crate::network::{Cost, NodeId};
use crate::routing::RouteFailure;

/// Convenient result alias for the fuelroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Input ended before every declared value was read.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: String },

    /// Raised when a token could not be parsed as the expected integer.
    #[error("invalid token '{token}' while reading {expected}")]
    InvalidToken { token: String, expected: String },

    /// Raised when a node identifier falls outside `[0, node_count)`.
    #[error("{role} node {node} is out of range for a network of {node_count} nodes")]
    NodeOutOfRange {
        role: &'static str,
        node: NodeId,
        node_count: usize,
    },

    /// Raised when the declared node count is too large to index a square
    /// distance matrix.
    #[error("network of {node_count} nodes is too large")]
    NetworkTooLarge { node_count: usize },

    /// Raised when an edge cost collides with the unreachable sentinel.
    #[error("edge {from} - {to} has cost {cost}, which exceeds the maximum edge cost")]
    EdgeCostTooLarge { from: NodeId, to: NodeId, cost: Cost },

    /// Raised when a delivery request carries no hubs.
    #[error("delivery request has no hubs to visit")]
    EmptyHubs,

    /// Raised when a delivery request carries no houses.
    #[error("delivery request has no houses to visit")]
    EmptyHouses,

    /// The route ran out of fuel (or hit an unreachable target) mid-plan.
    #[error("{0}")]
    FuelConstraint(Box<RouteFailure>),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Raised when serialising a summary to JSON fails.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Structured failure payload when the error is a fuel-constraint failure.
    pub fn route_failure(&self) -> Option<&RouteFailure> {
        match self {
            Error::FuelConstraint(failure) => Some(&**failure),
            _ => None,
        }
    }
}

impl From<RouteFailure> for Error {
    fn from(failure: RouteFailure) -> Self {
        Error::FuelConstraint(Box::new(failure))
    }
}
