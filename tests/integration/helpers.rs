//! Shared helpers for integration tests

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Directory holding test fixture scripts.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Read a fixture file to a string.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).expect("Failed to read fixture")
}

/// Run finch-demo with an isolated config file and capture output.
///
/// Returns the temp dir too, so the config location stays alive while the
/// caller inspects it.
pub fn run_finch_demo(args: &[&str]) -> (String, String, i32, TempDir) {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_finch-demo"))
        .args(args)
        .env("FINCH_DEMO_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute finch-demo");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code, config_dir)
}
