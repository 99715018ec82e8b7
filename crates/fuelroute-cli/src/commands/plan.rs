//! Plan command handler: run the full delivery pipeline.

use anyhow::{Context, Result};
use tracing::debug;

use fuelroute_lib::{
    plan_delivery, DeliverySummary, Error as LibError, FailureSummary, Problem, ShortestPaths,
};

use crate::output::{terminated, OutputFormat};

/// Plan the delivery route for `problem` and render it.
///
/// A fuel-constraint failure is a normal outcome and is rendered like a
/// route; only invalid input surfaces as an error.
pub fn handle_plan_command(problem: &Problem, format: OutputFormat) -> Result<String> {
    let network = problem.network().context("invalid delivery network")?;
    let paths = ShortestPaths::compute(&network);
    debug!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        "network prepared"
    );

    match plan_delivery(&network, &paths, &problem.request()) {
        Ok(plan) => {
            let summary = DeliverySummary::from_plan(&plan);
            match format.render_mode() {
                Some(mode) => Ok(summary.render(mode)),
                None => Ok(terminated(summary.to_json()?)),
            }
        }
        Err(LibError::FuelConstraint(failure)) => {
            let summary = FailureSummary::from_failure(&failure);
            match format.render_mode() {
                Some(mode) => Ok(summary.render(mode)),
                None => Ok(terminated(summary.to_json()?)),
            }
        }
        Err(err) => Err(err).context("failed to plan delivery route"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuelroute_lib::parse_problem;

    #[test]
    fn renders_plain_route() {
        let problem = parse_problem("1 2 1 0 10 0 1 0 1 5").unwrap();
        let out = handle_plan_command(&problem, OutputFormat::Text).unwrap();
        assert_eq!(out, "2\n0 1\n");
    }

    #[test]
    fn fuel_failure_is_rendered_not_returned() {
        let problem = parse_problem("1 2 1 0 3 0 1 0 1 5").unwrap();
        let out = handle_plan_command(&problem, OutputFormat::Text).unwrap();
        assert_eq!(out, "Failed fuel constraint on last house.\n");
    }

    #[test]
    fn failure_json_carries_partial_route() {
        let problem = parse_problem("1 2 1 0 3 0 1 0 1 5").unwrap();
        let out = handle_plan_command(&problem, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["phase"], "last_house");
        assert_eq!(json["partial_route"], serde_json::json!([0]));
    }

    #[test]
    fn invalid_ids_are_errors() {
        let problem = parse_problem("1 2 1 0 10 0 9 0 1 5").unwrap();
        let err = handle_plan_command(&problem, OutputFormat::Text).unwrap_err();
        assert!(format!("{err:#}").contains("house node 9 is out of range"));
    }
}
