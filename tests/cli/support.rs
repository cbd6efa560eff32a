use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::PathBuf;

/// Get a Command for wayfinder with config lookups isolated from the host
pub fn wayfinder() -> Command {
    let mut cmd = cargo_bin_cmd!("wayfinder");
    cmd.env("WAYFINDER_CONFIG_DIR", env!("CARGO_TARGET_TMPDIR"))
        .env_remove("WAYFINDER_CONFIG")
        .env_remove("WAYFINDER_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Path to a graph file under tests/fixtures
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The four-location example as inline `--edge` flags
pub const CITY_EDGES: [&str; 10] = [
    "--edge", "A-B=1", "--edge", "A-C=4", "--edge", "B-C=2", "--edge", "B-D=5", "--edge",
    "C-D=1",
];

/// Parse a command's stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
