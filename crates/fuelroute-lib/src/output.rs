use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::network::{Cost, NodeId};
use crate::routing::{DeliveryPlan, FailureKind, FailurePhase, RouteFailure, RouteStep};

/// Presentation style for turning a [`DeliverySummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Route length on one line, space-separated nodes on the next.
    Plain,
    /// One line per step with role and fuel state, followed by totals.
    Detailed,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeliverySummary {
    pub start_hub: NodeId,
    pub end_house: NodeId,
    pub length: usize,
    pub hops: usize,
    pub total_cost: Cost,
    pub fuel_capacity: Cost,
    pub fuel_remaining: Cost,
    pub refuels: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreached_hubs: Vec<NodeId>,
    pub route: Vec<NodeId>,
    pub steps: Vec<RouteStep>,
}

impl DeliverySummary {
    pub fn from_plan(plan: &DeliveryPlan) -> Self {
        Self {
            start_hub: plan.start_hub,
            end_house: plan.end_house,
            length: plan.len(),
            hops: plan.hop_count(),
            total_cost: plan.total_cost(),
            fuel_capacity: plan.fuel_capacity,
            fuel_remaining: plan.fuel_remaining,
            refuels: plan.refuel_count(),
            unreached_hubs: plan.unreached_hubs.clone(),
            route: plan.route(),
            steps: plan.steps.clone(),
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::Plain => self.render_plain(),
            RouteRenderMode::Detailed => self.render_detailed(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.length);
        let _ = writeln!(buffer, "{}", join_nodes(&self.route));
        buffer
    }

    fn render_detailed(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from hub {} to house {} ({} nodes, {} hops, cost {}):",
            self.start_hub, self.end_house, self.length, self.hops, self.total_cost
        );
        for step in &self.steps {
            let refuel = if step.refueled { " (refuel)" } else { "" };
            let _ = writeln!(
                buffer,
                "{:>4}: {:<6} {:<8} +{:<5} fuel {}/{}{}",
                step.index,
                step.node,
                step.role.label(),
                step.hop_cost,
                step.fuel_remaining,
                self.fuel_capacity,
                refuel
            );
        }
        let _ = writeln!(
            buffer,
            "\nFuel remaining: {}/{} ({} refuels)",
            self.fuel_remaining, self.fuel_capacity, self.refuels
        );
        if !self.unreached_hubs.is_empty() {
            let _ = writeln!(
                buffer,
                "Unreached hubs: {}",
                join_nodes(&self.unreached_hubs)
            );
        }
        buffer
    }
}

/// Serialisable view of a [`RouteFailure`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FailureSummary {
    pub message: String,
    pub phase: FailurePhase,
    pub failure: FailureKind,
    pub fuel_remaining: Cost,
    pub partial_route: Vec<NodeId>,
}

impl FailureSummary {
    pub fn from_failure(failure: &RouteFailure) -> Self {
        Self {
            message: failure.to_string(),
            phase: failure.phase,
            failure: failure.kind,
            fuel_remaining: failure.fuel_remaining,
            partial_route: failure.partial_route.clone(),
        }
    }

    /// The single message line; the partial route is only shown in
    /// [`RouteRenderMode::Detailed`].
    pub fn render(&self, mode: RouteRenderMode) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.message);
        if mode == RouteRenderMode::Detailed {
            let (from, to) = self.failure.edge();
            let reason = match self.failure {
                FailureKind::InsufficientFuel {
                    required,
                    available,
                    ..
                } => format!("needs {required} fuel, {available} left"),
                FailureKind::MissingEdge { .. } => "no direct edge".to_string(),
                FailureKind::Unreachable { .. } => "unreachable".to_string(),
            };
            let _ = writeln!(buffer, "Failing leg: {from} -> {to} ({reason})");
            let _ = writeln!(
                buffer,
                "Partial route: {}",
                join_nodes(&self.partial_route)
            );
        }
        buffer
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Space-separated node ids, as printed on the route line.
pub fn join_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
