use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("fuelroute-cli");
    cmd.env("RUST_LOG", "error").env_remove("FUELROUTE_INPUT");
    cmd
}

fn with_fixture(name: &str) -> Command {
    let mut cmd = cli();
    cmd.arg("--input").arg(fixture_path(name));
    cmd
}

#[test]
fn plans_two_node_route() {
    with_fixture("two_node.txt")
        .assert()
        .success()
        .stdout("2\n0 1\n");
}

#[test]
fn plan_subcommand_matches_default() {
    with_fixture("midpoint_station.txt")
        .arg("plan")
        .assert()
        .success()
        .stdout("7\n0 1 2 3 4 3 4\n");
}

#[test]
fn fuel_failure_prints_message_and_exits_zero() {
    with_fixture("two_node_low_fuel.txt")
        .assert()
        .success()
        .stdout("Failed fuel constraint on last house.\n");
}

#[test]
fn hub_failure_detailed_shows_partial_route() {
    with_fixture("midpoint_no_station.txt")
        .arg("--format")
        .arg("detailed")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Failed fuel constraint while visiting hubs.\n",
        ))
        .stdout(predicate::str::contains("Failing leg: 2 -> 3"))
        .stdout(predicate::str::contains("Partial route: 0 1 2"));
}

#[test]
fn detailed_route_lists_refuels() {
    with_fixture("star.txt")
        .arg("--format")
        .arg("detailed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route from hub 1 to house 0"))
        .stdout(predicate::str::contains("(refuel)"))
        .stdout(predicate::str::contains("Fuel remaining: 100/100 (3 refuels)"));
}

#[test]
fn json_output_is_parseable() {
    let output = with_fixture("disconnected_hub.txt")
        .arg("--format")
        .arg("json")
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["route"], serde_json::json!([0, 1]));
    assert_eq!(json["unreached_hubs"], serde_json::json!([3]));
}

#[test]
fn reads_problem_from_stdin() {
    let contents = fs::read_to_string(fixture_path("two_node.txt")).expect("read fixture");
    cli()
        .write_stdin(contents)
        .assert()
        .success()
        .stdout("2\n0 1\n");
}

#[test]
fn input_falls_back_to_environment() {
    cli()
        .env("FUELROUTE_INPUT", fixture_path("two_node.txt"))
        .assert()
        .success()
        .stdout("2\n0 1\n");
}

#[test]
fn truncated_input_fails() {
    with_fixture("truncated.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse problem"))
        .stderr(predicate::str::contains("fuel capacity F"));
}

#[test]
fn missing_input_file_fails() {
    let temp_dir = tempdir().expect("create temp dir");
    cli()
        .arg("--input")
        .arg(temp_dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open problem file"));
}

#[test]
fn out_of_range_house_fails() {
    let temp_dir = tempdir().expect("create temp dir");
    let problem = temp_dir.path().join("problem.txt");
    fs::write(&problem, "1 2 1 0 10\n0\n5\n0 1 1\n").expect("write problem");

    cli()
        .arg("--input")
        .arg(&problem)
        .assert()
        .failure()
        .stderr(predicate::str::contains("house node 5 is out of range"));
}

#[test]
fn path_subcommand_prints_distance_and_nodes() {
    with_fixture("midpoint_station.txt")
        .arg("path")
        .arg("--from")
        .arg("0")
        .arg("--to")
        .arg("4")
        .assert()
        .success()
        .stdout("12\n0 1 2 3 4\n");
}

#[test]
fn path_subcommand_reports_unreachable() {
    with_fixture("disconnected_hub.txt")
        .args(["path", "--from", "0", "--to", "3"])
        .assert()
        .success()
        .stdout("unreachable\n");
}
