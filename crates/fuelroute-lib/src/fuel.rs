//! Fuel tank state and edge-by-edge traversal.
//!
//! This module owns the vehicle's fuel level while a route is being built and
//! applies each hop of a reconstructed path against it, refilling on arrival
//! at a fuel station.

use serde::Serialize;
use thiserror::Error;

use crate::network::{Cost, Network, NodeId};

/// Vehicle fuel tank with a fixed capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FuelTank {
    capacity: Cost,
    level: Cost,
}

/// A single edge successfully traversed by [`FuelTank::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: NodeId,
    pub to: NodeId,
    /// Fuel units consumed by this hop.
    pub cost: Cost,
    /// Fuel left after arriving (after any refill).
    pub fuel_remaining: Cost,
    /// `true` when `to` is a fuel station and the tank was refilled.
    pub refueled: bool,
}

/// Reasons a traversal stops before reaching the end of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraverseError {
    #[error("no direct edge between {from} and {to}")]
    MissingEdge { from: NodeId, to: NodeId },

    #[error("hop {from} -> {to} needs {required} fuel but only {available} remains")]
    InsufficientFuel {
        from: NodeId,
        to: NodeId,
        required: Cost,
        available: Cost,
    },
}

impl FuelTank {
    /// A full tank of the given capacity.
    pub fn full(capacity: Cost) -> Self {
        Self {
            capacity,
            level: capacity,
        }
    }

    pub fn capacity(&self) -> Cost {
        self.capacity
    }

    pub fn level(&self) -> Cost {
        self.level
    }

    /// Refill to capacity.
    pub fn refuel(&mut self) {
        self.level = self.capacity;
    }

    /// Burn `cost` units, failing without side effects if the tank holds less.
    pub fn consume(&mut self, cost: Cost) -> Option<Cost> {
        let remaining = self.level.checked_sub(cost)?;
        self.level = remaining;
        Some(remaining)
    }

    /// Walk `path` edge by edge, calling `on_hop` for each hop that succeeds.
    ///
    /// Hops applied before a failure stay applied: the tank keeps the level
    /// it had just before the failing edge and `on_hop` has already seen
    /// every earlier hop.
    pub fn traverse<F>(
        &mut self,
        network: &Network,
        path: &[NodeId],
        mut on_hop: F,
    ) -> Result<(), TraverseError>
    where
        F: FnMut(Hop),
    {
        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let cost = network
                .edge_cost(from, to)
                .ok_or(TraverseError::MissingEdge { from, to })?;

            let available = self.level;
            if self.consume(cost).is_none() {
                return Err(TraverseError::InsufficientFuel {
                    from,
                    to,
                    required: cost,
                    available,
                });
            }

            let refueled = network.is_fuel_station(to);
            if refueled {
                self.refuel();
            }

            on_hop(Hop {
                from,
                to,
                cost,
                fuel_remaining: self.level,
                refueled,
            });
        }
        Ok(())
    }
}
