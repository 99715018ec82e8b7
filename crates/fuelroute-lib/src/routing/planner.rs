//! Route-building state machine.
//!
//! [`RouteBuilder`] owns the growing route and the fuel tank. Each call to
//! [`RouteBuilder::step`] performs exactly one leg (one hub, one house, or the
//! final house) and moves to the next [`PlannerState`].

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::fuel::FuelTank;
use crate::network::{Cost, Network, NodeId};
use crate::shortest::ShortestPaths;

use super::select::{farthest_from_fuel, nearest_unvisited};
use super::{
    DeliveryPlan, DeliveryRequest, FailureKind, FailurePhase, RouteFailure, RouteStep, StepRole,
};

/// Phase of the route builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerState {
    /// Greedily visiting the nearest unvisited hub.
    TouringHubs,
    /// Visiting houses in input order, then the end house.
    TouringHouses,
    /// Every target reached.
    Done,
    /// A leg could not be completed; terminal.
    Failed(RouteFailure),
}

impl PlannerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlannerState::Done | PlannerState::Failed(_))
    }
}

/// Incremental route builder over an immutable network and its shortest paths.
#[derive(Debug, Clone)]
pub struct RouteBuilder<'a> {
    network: &'a Network,
    paths: &'a ShortestPaths,
    request: &'a DeliveryRequest,
    start_hub: NodeId,
    end_house: NodeId,
    state: PlannerState,
    tank: FuelTank,
    current: NodeId,
    steps: Vec<RouteStep>,
    visited_hubs: HashSet<NodeId>,
    house_cursor: usize,
    unreached_hubs: Vec<NodeId>,
}

impl<'a> RouteBuilder<'a> {
    /// Validate the request, pick both endpoints and park at the start hub
    /// with a full tank.
    pub fn new(
        network: &'a Network,
        paths: &'a ShortestPaths,
        request: &'a DeliveryRequest,
    ) -> Result<Self> {
        request.validate(network)?;

        let stations = network.fuel_stations();
        let start_hub =
            farthest_from_fuel(paths, stations, &request.hubs).ok_or(Error::EmptyHubs)?;
        let end_house =
            farthest_from_fuel(paths, stations, &request.houses).ok_or(Error::EmptyHouses)?;
        debug!(start_hub, end_house, "selected route endpoints");

        let tank = FuelTank::full(request.fuel_capacity);
        let start = RouteStep {
            index: 0,
            node: start_hub,
            hop_cost: 0,
            fuel_remaining: tank.level(),
            refueled: false,
            role: StepRole::Start,
        };

        Ok(Self {
            network,
            paths,
            request,
            start_hub,
            end_house,
            state: PlannerState::TouringHubs,
            tank,
            current: start_hub,
            steps: vec![start],
            visited_hubs: HashSet::from([start_hub]),
            house_cursor: 0,
            unreached_hubs: Vec::new(),
        })
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn start_hub(&self) -> NodeId {
        self.start_hub
    }

    pub fn end_house(&self) -> NodeId {
        self.end_house
    }

    /// Node the vehicle currently stands on.
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn fuel_level(&self) -> Cost {
        self.tank.level()
    }

    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    /// Route so far, transit nodes included.
    pub fn route(&self) -> Vec<NodeId> {
        self.steps.iter().map(|step| step.node).collect()
    }

    pub fn unreached_hubs(&self) -> &[NodeId] {
        &self.unreached_hubs
    }

    /// Perform one leg and return the resulting state. Terminal states are
    /// left unchanged.
    pub fn step(&mut self) -> &PlannerState {
        self.state = self.transition();
        &self.state
    }

    /// Step until a terminal state is reached.
    pub fn run(mut self) -> std::result::Result<DeliveryPlan, RouteFailure> {
        loop {
            match self.transition() {
                PlannerState::Done => {
                    self.state = PlannerState::Done;
                    return Ok(self.into_plan());
                }
                PlannerState::Failed(failure) => return Err(failure),
                next => self.state = next,
            }
        }
    }

    fn transition(&mut self) -> PlannerState {
        match self.state.clone() {
            PlannerState::TouringHubs => self.visit_next_hub(),
            PlannerState::TouringHouses => self.visit_next_house(),
            terminal => terminal,
        }
    }

    fn visit_next_hub(&mut self) -> PlannerState {
        let next = nearest_unvisited(
            self.paths,
            self.current,
            &self.request.hubs,
            &self.visited_hubs,
        );
        let Some(hub) = next else {
            self.unreached_hubs = self.collect_unreached_hubs();
            if !self.unreached_hubs.is_empty() {
                warn!(
                    at = self.current,
                    unreached = ?self.unreached_hubs,
                    "no remaining hub is reachable; moving on to houses"
                );
            }
            return PlannerState::TouringHouses;
        };

        if let Err(kind) = self.append_leg(hub, StepRole::Hub) {
            return self.fail(FailurePhase::Hubs, kind);
        }
        self.visited_hubs.insert(hub);
        PlannerState::TouringHubs
    }

    fn visit_next_house(&mut self) -> PlannerState {
        let request = self.request;
        while let Some(&house) = request.houses.get(self.house_cursor) {
            self.house_cursor += 1;
            if house == self.end_house {
                continue;
            }
            if let Err(kind) = self.append_leg(house, StepRole::House) {
                return self.fail(FailurePhase::Houses, kind);
            }
            return PlannerState::TouringHouses;
        }

        match self.append_leg(self.end_house, StepRole::House) {
            Ok(()) => PlannerState::Done,
            Err(kind) => self.fail(FailurePhase::LastHouse, kind),
        }
    }

    /// Append the shortest path from the current node to `target`, burning
    /// fuel per edge. Hops made before a failure stay in the route.
    fn append_leg(
        &mut self,
        target: NodeId,
        role: StepRole,
    ) -> std::result::Result<(), FailureKind> {
        let from = self.current;
        let path = self.paths.path(from, target);
        if path.is_empty() {
            return Err(FailureKind::Unreachable { from, to: target });
        }

        let steps = &mut self.steps;
        self.tank
            .traverse(self.network, &path, |hop| {
                let index = steps.len();
                steps.push(RouteStep {
                    index,
                    node: hop.to,
                    hop_cost: hop.cost,
                    fuel_remaining: hop.fuel_remaining,
                    refueled: hop.refueled,
                    role: StepRole::Transit,
                });
            })
            .map_err(FailureKind::from)?;

        if let Some(last) = self.steps.last_mut() {
            if last.node == target && last.role == StepRole::Transit {
                last.role = role;
            }
        }
        self.current = target;
        Ok(())
    }

    fn collect_unreached_hubs(&self) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        self.request
            .hubs
            .iter()
            .copied()
            .filter(|hub| !self.visited_hubs.contains(hub) && seen.insert(*hub))
            .collect()
    }

    fn fail(&self, phase: FailurePhase, kind: FailureKind) -> PlannerState {
        let (from, to) = kind.edge();
        warn!(?phase, from, to, fuel = self.tank.level(), "route leg failed");
        PlannerState::Failed(RouteFailure {
            phase,
            kind,
            partial_route: self.route(),
            fuel_remaining: self.tank.level(),
        })
    }

    fn into_plan(self) -> DeliveryPlan {
        DeliveryPlan {
            start_hub: self.start_hub,
            end_house: self.end_house,
            fuel_capacity: self.tank.capacity(),
            fuel_remaining: self.tank.level(),
            steps: self.steps,
            unreached_hubs: self.unreached_hubs,
        }
    }
}
