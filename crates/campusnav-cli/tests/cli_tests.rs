//! Integration tests for the `campusnav` binary.
//!
//! These tests use `assert_cmd` to verify:
//! - route output in text and JSON formats
//! - failure payloads and exit codes
//! - custom location tables and graph thresholds

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("campusnav");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("CAMPUSNAV_LOCATIONS");
    cmd
}

fn parse_stdout(output: &[u8]) -> serde_json::Value {
    let text = String::from_utf8(output.to_vec()).expect("utf-8 stdout");
    serde_json::from_str(text.trim()).expect("stdout is a single JSON document")
}

/// Two quads on the reference campus plus a far-away field station.
struct LocationTable {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl LocationTable {
    fn with_outpost() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("locations.json");
        fs::write(
            &path,
            r#"[
                {"name": "North Quad", "alias": "nq", "latitude": 29.375000, "longitude": 79.531111},
                {"name": "South Quad", "alias": "sq", "latitude": 29.374444, "longitude": 79.531111},
                {"name": "Field Station", "alias": "fs", "latitude": 29.360000, "longitude": 79.460000}
            ]"#,
        )
        .expect("write location table");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }
}

#[test]
fn route_prints_text_summary() {
    cli()
        .args(["route", "1", "main gate", "hostel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: Dijkstra"))
        .stdout(predicate::str::contains("From: main gate"))
        .stdout(predicate::str::contains("To: hostel"))
        .stdout(predicate::str::contains("Shortest Distance:"))
        .stdout(predicate::str::contains("Path: main gate → "))
        .stdout(predicate::str::contains(
            "https://www.openstreetmap.org/directions?engine=fossgis_osrm_foot&route=29.375000,79.531111;",
        ));
}

#[test]
fn algorithm_accepts_names_and_selectors() {
    for (selector, label) in [("a-star", "A*"), ("3", "Floyd-Warshall"), ("Dijkstra", "Dijkstra")] {
        cli()
            .args(["route", selector, "library", "bus"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Algorithm: {label}")));
    }
}

#[test]
fn invalid_algorithm_fails_with_message() {
    cli()
        .args(["route", "4", "library", "bus"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid algorithm selector '4'"));
}

#[test]
fn invalid_algorithm_in_json_mode_prints_failure_payload() {
    let output = cli()
        .args(["--format", "json", "route", "4", "bus", "oat"])
        .output()
        .expect("run campusnav");
    assert_eq!(output.status.code(), Some(1));

    let value = parse_stdout(&output.stdout);
    assert_eq!(value["success"], false);
    let error = value["error"].as_str().expect("error string");
    assert!(error.contains("invalid algorithm selector '4'"), "{error}");
}

#[test]
fn negative_threshold_reaches_validation() {
    cli()
        .args(["--threshold", "-5", "route", "1", "bus", "oat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "threshold must be a positive finite number",
        ));
}

#[test]
fn negative_walking_speed_in_json_mode_prints_failure_payload() {
    let output = cli()
        .args(["--format", "json", "--walking-speed", "-1.4", "route", "1", "bus", "oat"])
        .output()
        .expect("run campusnav");
    assert_eq!(output.status.code(), Some(1));

    let value = parse_stdout(&output.stdout);
    assert_eq!(value["success"], false);
    let error = value["error"].as_str().expect("error string");
    assert!(error.contains("walking speed must be a positive finite number"), "{error}");
}

#[test]
fn geodesic_formula_flag_changes_whole_meter_weights() {
    for (extra, distance) in [(None, 106), (Some("--standard-geodesic"), 107)] {
        let mut cmd = cli();
        cmd.args(["--format", "json"]);
        if let Some(flag) = extra {
            cmd.arg(flag);
        }
        let output = cmd
            .args(["route", "1", "oat", "academic block c"])
            .output()
            .expect("run campusnav");
        assert!(output.status.success());
        assert_eq!(parse_stdout(&output.stdout)["distance"], distance);
    }
}

#[test]
fn json_route_payload_is_parseable() {
    let output = cli()
        .args(["--format", "json", "route", "2", "DS", "canteen"])
        .output()
        .expect("run campusnav");
    assert!(output.status.success());

    let value = parse_stdout(&output.stdout);
    assert_eq!(value["success"], true);
    assert_eq!(value["algorithm"], "A*");
    assert!(value["distance"].as_u64().expect("integer distance") > 0);
    let path = value["path"].as_str().expect("path string");
    assert!(path.starts_with("DS → "), "{path}");
    assert!(path.ends_with("canteen"), "{path}");
}

#[test]
fn same_source_and_destination_is_zero_distance() {
    let output = cli()
        .args(["route", "3", "Library", "library", "--format", "json"])
        .output()
        .expect("run campusnav");
    assert!(output.status.success());

    let value = parse_stdout(&output.stdout);
    assert_eq!(value["distance"], 0);
    assert_eq!(value["steps"], 0);
    assert_eq!(value["path"], "library");
}

#[test]
fn unknown_location_fails_with_suggestions() {
    cli()
        .args(["route", "1", "main gat", "hostel"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown location 'main gat'."))
        .stderr(predicate::str::contains("main gate"));
}

#[test]
fn json_failure_payload_goes_to_stdout() {
    let output = cli()
        .args(["--format", "json", "route", "1", "nowhere", "hostel"])
        .output()
        .expect("run campusnav");
    assert_eq!(output.status.code(), Some(1));

    let value = parse_stdout(&output.stdout);
    assert_eq!(value["success"], false);
    assert!(value["error"]
        .as_str()
        .expect("error message")
        .contains("Unknown location 'nowhere'"));
}

#[test]
fn isolated_location_reports_no_route() {
    let table = LocationTable::with_outpost();
    cli()
        .arg("--locations")
        .arg(&table.path)
        .args(["--threshold", "1000", "route", "1", "nq", "fs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "No route found between nq and fs. Try raising --threshold (currently 1000 m).",
        ));
}

#[test]
fn locations_env_var_selects_table() {
    let table = LocationTable::with_outpost();
    cli()
        .env("CAMPUSNAV_LOCATIONS", &table.path)
        .args(["route", "dijkstra", "north quad", "SQ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: North Quad → South Quad"));
}

#[test]
fn compare_lists_every_algorithm() {
    cli()
        .args(["compare", "bus", "saisandhya hall"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing all algorithms: bus → saisandhya hall"))
        .stdout(predicate::str::contains("Dijkstra: "))
        .stdout(predicate::str::contains("A*: "))
        .stdout(predicate::str::contains("Floyd-Warshall: "));
}

#[test]
fn compare_json_marks_unreachable_routes() {
    let table = LocationTable::with_outpost();
    let output = cli()
        .arg("--locations")
        .arg(&table.path)
        .args(["--threshold", "1000", "--format", "json", "compare", "sq", "fs"])
        .output()
        .expect("run campusnav");
    assert!(output.status.success());

    let value = parse_stdout(&output.stdout);
    let entries = value.as_array().expect("array of outcomes");
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|entry| entry["success"] == false));
}

#[test]
fn locations_lists_reference_campus() {
    cli()
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("15 campus locations"))
        .stdout(predicate::str::contains("academic block d"));
}

#[test]
fn malformed_location_file_is_reported() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{not json").expect("write file");

    cli()
        .arg("--locations")
        .arg(&path)
        .arg("locations")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load the campus location table"))
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn non_positive_walking_speed_is_rejected() {
    cli()
        .args(["--walking-speed", "0", "route", "1", "bus", "library"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("walking speed must be a positive finite number"));
}

#[test]
fn missing_arguments_are_reported_by_clap() {
    cli()
        .args(["route", "1", "bus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
