use crate::cli::support::{stdout_json, wayfinder};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Random graph generation
// ============================================================================

#[test]
fn test_generate_is_reproducible() {
    let run = || {
        wayfinder()
            .args(["generate", "--seed", "5", "--nodes", "8"])
            .output()
            .unwrap()
            .stdout
    };

    let first = run();
    assert_eq!(first, run());

    let text = String::from_utf8(first).unwrap();
    assert!(text.starts_with("# seed = 5\n"));
    assert!(text.contains("[[edges]]"));
}

#[test]
fn test_generate_output_file_feeds_graph_flag() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("random.json");

    wayfinder()
        .args(["generate", "--seed", "12", "--nodes", "10", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 10 nodes"))
        .stdout(predicate::str::contains("(seed 12)"));

    // Connected by default, so every node is reachable
    let output = wayfinder()
        .args(["--format", "json", "distances", "-s", "A", "--graph"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["reachable"], 10);
}

#[test]
fn test_generate_yaml_and_toml_files() {
    let dir = tempdir().unwrap();

    for name in ["g.yaml", "g.toml"] {
        let path = dir.path().join(name);
        wayfinder()
            .args(["-q", "generate", "--seed", "3", "-o"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        wayfinder()
            .args(["neighbors", "A", "--graph"])
            .arg(&path)
            .assert()
            .success();
    }
}

#[test]
fn test_generate_json_stdout_reloads() {
    let dir = tempdir().unwrap();
    let output = wayfinder()
        .args(["--format", "json", "generate", "--seed", "21"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["seed"], 21);
    assert_eq!(json["nodes"].as_array().unwrap().len(), 6);

    let path = dir.path().join("g.json");
    std::fs::write(&path, &output.stdout).unwrap();
    wayfinder()
        .args(["route", "-s", "A", "-d", "F", "--graph"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:"));
}

#[test]
fn test_generate_records_disconnected_empty() {
    wayfinder()
        .args(["--format", "records", "generate", "--seed", "1"])
        .args(["--nodes", "5", "--density", "0", "--disconnected"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H wayfinder=1 records=1 mode=generate seed=1 nodes=5 edges=0\n",
        ))
        .stdout(predicate::str::contains("N E"))
        .stdout(predicate::str::contains("\nE ").not());
}

#[test]
fn test_generate_weight_range() {
    let output = wayfinder()
        .args(["--format", "json", "generate", "--seed", "8", "--nodes", "12"])
        .args(["--density", "0.5", "--min-weight", "3", "--max-weight", "4"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    for edge in json["edges"].as_array().unwrap() {
        let weight = edge["weight"].as_f64().unwrap();
        assert!((3.0..=4.0).contains(&weight));
    }
}

#[test]
fn test_generate_rejects_bad_options() {
    wayfinder()
        .args(["generate", "--density", "1.5"])
        .assert()
        .code(2);

    wayfinder()
        .args(["generate", "--min-weight", "9", "--max-weight", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("weight range"));
}

#[test]
fn test_random_graph_for_queries() {
    wayfinder()
        .args(["distances", "-s", "A", "--random", "--seed", "4", "--nodes", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distances from A:"))
        .stdout(predicate::str::contains("A 0\n"));
}
