use crate::cli::support::{fixture, stdout_json, wayfinder, CITY_EDGES};
use predicates::prelude::*;

// ============================================================================
// Distances from a start node
// ============================================================================

#[test]
fn test_distances_city_example() {
    wayfinder()
        .args(["distances", "--start", "A"])
        .args(CITY_EDGES)
        .assert()
        .success()
        .stdout(predicate::str::contains("Distances from A:"))
        .stdout(predicate::str::contains("A 0\n"))
        .stdout(predicate::str::contains("B 1 (via A)"))
        .stdout(predicate::str::contains("C 3 (via B)"))
        .stdout(predicate::str::contains("D 4 (via C)"));
}

#[test]
fn test_distances_from_file_marks_unreachable() {
    wayfinder()
        .args(["distances", "-s", "A", "--graph"])
        .arg(fixture("city.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("D 4 (via C)"))
        .stdout(predicate::str::contains("E inf (unreachable)"));
}

#[test]
fn test_distances_quiet_drops_header() {
    wayfinder()
        .args(["distances", "-s", "C", "-q"])
        .args(CITY_EDGES)
        .assert()
        .success()
        .stdout(predicate::str::contains("Distances from").not())
        .stdout(predicate::str::contains("C 0"));
}

#[test]
fn test_distances_json() {
    let output = wayfinder()
        .args(["--format", "json", "distances", "-s", "A", "--graph"])
        .arg(fixture("city.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["start"], "A");
    assert_eq!(json["strategy"], "scan");
    assert_eq!(json["reachable"], 4);

    let distances = json["distances"].as_array().unwrap();
    assert_eq!(distances.len(), 5);
    assert_eq!(distances[3]["node"], "D");
    assert_eq!(distances[3]["distance"], 4.0);
    assert_eq!(distances[3]["predecessor"], "C");
    assert!(distances[4]["distance"].is_null());
    assert!(distances[0]["predecessor"].is_null());
}

#[test]
fn test_distances_records() {
    wayfinder()
        .args(["--format", "records", "distances", "-s", "A", "--graph"])
        .arg(fixture("city.toml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H wayfinder=1 records=1 mode=distances start=A strategy=scan nodes=5 reachable=4",
        ))
        .stdout(predicate::str::contains("D A 0 -"))
        .stdout(predicate::str::contains("D D 4 C"))
        .stdout(predicate::str::contains("D E inf -"));
}

#[test]
fn test_distances_strategies_agree() {
    let run = |strategy: &str| {
        let output = wayfinder()
            .args(["--format", "records", "distances", "-s", "B"])
            .args(["--random", "--nodes", "30", "--seed", "7", "--density", "0.2"])
            .args(["--strategy", strategy])
            .output()
            .unwrap();
        assert!(output.status.success());
        // Header names the strategy; compare the records below it
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .skip(1)
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    assert_eq!(run("scan"), run("heap"));
}

#[test]
fn test_distances_yaml_graph() {
    wayfinder()
        .args(["distances", "-s", "D", "--graph"])
        .arg(fixture("city.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("A 4 (via B)"));
}
