use crate::cli::support::{wayfinder, CITY_EDGES};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Exit codes: 1 failure, 2 usage, 3 graph data
// ============================================================================

#[test]
fn test_no_command_prints_banner() {
    wayfinder()
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "wayfinder ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_unknown_start_exits_3() {
    wayfinder()
        .args(["distances", "--start", "Z"])
        .args(CITY_EDGES)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: unknown node: Z"));
}

#[test]
fn test_unknown_destination_exits_3() {
    wayfinder()
        .args(["route", "-s", "A", "-d", "Z"])
        .args(CITY_EDGES)
        .assert()
        .code(3);
}

#[test]
fn test_negative_weight_exits_3() {
    wayfinder()
        .args(["distances", "-s", "A", "--edge", "A-B=-1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative weight -1"));
}

#[test]
fn test_self_loop_exits_3() {
    wayfinder()
        .args(["distances", "-s", "A", "--edge", "A-A=1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("self-loop"));
}

#[test]
fn test_overflowing_route_cost_exits_3() {
    wayfinder()
        .args(["route", "-s", "A", "-d", "C"])
        .args(["--edge", "A-B=1e308", "--edge", "B-C=1e308"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path cost overflows past B - C"));
}

#[test]
fn test_counted_nodes_reject_other_labels() {
    wayfinder()
        .args(["distances", "-s", "A", "--nodes", "3", "--edge", "A-Z=1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node Z"));
}

#[test]
fn test_missing_graph_source_is_usage_error() {
    wayfinder()
        .args(["distances", "-s", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph given"));
}

#[test]
fn test_seed_without_random_is_usage_error() {
    wayfinder()
        .args(["distances", "-s", "A", "--seed", "3"])
        .args(CITY_EDGES)
        .assert()
        .code(2);
}

#[test]
fn test_malformed_edge_flag() {
    wayfinder()
        .args(["distances", "-s", "A", "--edge", "A-B"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("FROM-TO=WEIGHT"));
}

#[test]
fn test_hyphenated_inline_id_is_rejected() {
    wayfinder()
        .args(["distances", "-s", "north", "--edge", "north-east-depot=3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("node ids with '-' need --graph"));
}

#[test]
fn test_unknown_strategy() {
    wayfinder()
        .args(["distances", "-s", "A", "--strategy", "astar"])
        .args(CITY_EDGES)
        .assert()
        .code(2);
}

#[test]
fn test_unsupported_graph_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("city.csv");
    std::fs::write(&path, "A,B,1\n").unwrap();

    wayfinder()
        .args(["distances", "-s", "A", "--graph"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("graph file extension"));
}

#[test]
fn test_missing_graph_file_exits_1() {
    let dir = tempdir().unwrap();

    wayfinder()
        .args(["distances", "-s", "A", "--graph"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph file"));
}

#[test]
fn test_malformed_graph_file_exits_1() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"nodes\": [\"A\"").unwrap();

    wayfinder()
        .args(["distances", "-s", "A", "--graph"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    wayfinder()
        .args(["-q", "distances", "-s", "Z"])
        .args(CITY_EDGES)
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// JSON error envelope
// ============================================================================

#[test]
fn test_json_error_envelope() {
    let output = wayfinder()
        .args(["--format", "json", "route", "-s", "Z", "-d", "A"])
        .args(CITY_EDGES)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "unknown_node");
    assert_eq!(json["error"]["message"], "unknown node: Z");
}

#[test]
fn test_json_envelope_for_parse_errors() {
    let output = wayfinder()
        .args(["--format", "json", "distances", "-s", "A", "--edge", "nonsense"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_json_parse_error_with_equals_form() {
    let output = wayfinder()
        .args(["distances", "-s", "A", "--strategy", "astar", "--format=json"])
        .args(CITY_EDGES)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("astar"), "{}", message);
    assert!(!message.starts_with("error:"), "{}", message);
}

#[test]
fn test_help_ignores_json_format() {
    wayfinder()
        .args(["--format", "json", "route", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fastest route between two nodes"));
}

#[test]
fn test_unknown_output_format() {
    wayfinder()
        .args(["--format", "xml", "distances", "-s", "A"])
        .args(CITY_EDGES)
        .assert()
        .code(2);
}
