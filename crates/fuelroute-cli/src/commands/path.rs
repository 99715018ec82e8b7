//! Path command handler: shortest distance and node path between two nodes.

use std::fmt::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use fuelroute_lib::{join_nodes, Cost, NodeId, Problem, ShortestPaths};

use crate::output::{terminated, OutputFormat};

/// Shortest-path query result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathSummary {
    pub from: NodeId,
    pub to: NodeId,
    /// `None` when `to` cannot be reached.
    pub distance: Option<Cost>,
    pub path: Vec<NodeId>,
}

impl PathSummary {
    fn render(&self, format: OutputFormat) -> Result<String> {
        let mut buffer = String::new();
        match (format, self.distance) {
            (OutputFormat::Json, _) => {
                buffer = terminated(serde_json::to_string_pretty(self)?);
            }
            (_, None) => {
                let _ = writeln!(buffer, "unreachable");
            }
            (OutputFormat::Text, Some(distance)) => {
                let _ = writeln!(buffer, "{distance}");
                let _ = writeln!(buffer, "{}", join_nodes(&self.path));
            }
            (OutputFormat::Detailed, Some(distance)) => {
                let _ = writeln!(
                    buffer,
                    "Path from {} to {} (cost {}, {} hops):",
                    self.from,
                    self.to,
                    distance,
                    self.path.len().saturating_sub(1)
                );
                let _ = writeln!(buffer, "{}", join_nodes(&self.path));
            }
        }
        Ok(buffer)
    }
}

/// Compute the shortest path between `from` and `to` over the problem's network.
pub fn handle_path_command(
    problem: &Problem,
    from: NodeId,
    to: NodeId,
    format: OutputFormat,
) -> Result<String> {
    let network = problem.network().context("invalid delivery network")?;
    network.ensure_node("from", from)?;
    network.ensure_node("to", to)?;

    let paths = ShortestPaths::compute(&network);
    let summary = PathSummary {
        from,
        to,
        distance: paths.distance(from, to),
        path: paths.path(from, to),
    };
    summary.render(format)
}
