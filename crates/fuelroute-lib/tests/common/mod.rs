#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use fuelroute_lib::{parse_problem, Cost, Network, NodeId, Problem, ShortestPaths};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_problem(name: &str) -> Problem {
    let path = fixtures_dir().join(name);
    let text = fs::read_to_string(&path).expect("fixture present");
    parse_problem(&text).expect("fixture parses")
}

pub fn prepared(
    node_count: usize,
    edges: &[(NodeId, NodeId, Cost)],
    stations: &[NodeId],
) -> (Network, ShortestPaths) {
    let network = Network::new(node_count, edges, stations).expect("valid network");
    let paths = ShortestPaths::compute(&network);
    (network, paths)
}
