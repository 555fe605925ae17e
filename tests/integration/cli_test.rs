//! Integration tests for the play, render, script, config and completions commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, run_finch_demo};

fn fixture_arg(name: &str) -> String {
    fixtures_dir().join(name).to_string_lossy().to_string()
}

fn finch_demo(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finch-demo").unwrap();
    cmd.env("FINCH_DEMO_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code, _dir) = run_finch_demo(&["--help"]);

    assert_eq!(exit_code, 0);
    for cmd in ["play", "render", "copy", "script", "config", "completions"] {
        assert!(stdout.contains(cmd), "help should mention {}", cmd);
    }
}

#[test]
fn version_includes_package_version() {
    let (stdout, _stderr, exit_code, _dir) = run_finch_demo(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Render
// ============================================================================

#[test]
fn render_scenario_as_text() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir)
        .args(["render", "--script", &fixture_arg("scenario.json")])
        .assert()
        .success()
        .stdout("\nhi\n");
}

#[test]
fn render_scenario_as_markup() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir)
        .args(["render", "--format", "markup", "--script", &fixture_arg("scenario.json")])
        .assert()
        .success()
        .stdout("\n<span class=\"line cmd\">hi</span>\n");
}

#[test]
fn render_as_json_lists_nodes() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir)
        .args(["render", "--format", "json", "--script", &fixture_arg("scenario.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""node": "break""#))
        .stdout(predicate::str::contains(r#""styleClass": "cmd""#));
}

#[test]
fn render_builtin_demo() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$ finch\n\n"))
        .stdout(predicate::str::contains("finch v0.5.2"))
        .stdout(predicate::str::ends_with("\n> \n"));
}

#[test]
fn render_rejects_unknown_event_kind() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir)
        .args(["render", "--script", &fixture_arg("unknown_kind.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load script"));
}

#[test]
fn render_missing_script_file_fails() {
    let (_stdout, stderr, exit_code, _dir) =
        run_finch_demo(&["render", "--script", "/no/such/script.json"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("script.json"));
}

// ============================================================================
// Play
// ============================================================================

#[test]
fn play_without_terminal_prints_transcript() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir)
        .args(["play", "--script", &fixture_arg("scenario.json")])
        .assert()
        .success()
        .stdout("\nhi\n");
}

#[test]
fn play_transcript_of_builtin_demo() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir)
        .args(["play", "--transcript", "--speed", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "> How do I handle errors in async Rust?\n\n  Use `?`",
        ));
}

#[test]
fn play_uses_script_from_config() {
    let dir = TempDir::new().unwrap();
    let config = format!(
        "[playback]\nscript = {:?}\n",
        fixture_arg("scenario.json")
    );
    std::fs::write(dir.path().join("config.toml"), config).unwrap();

    finch_demo(&dir)
        .args(["play", "--transcript"])
        .assert()
        .success()
        .stdout("\nhi\n");
}

// ============================================================================
// Script
// ============================================================================

#[test]
fn script_prints_builtin_demo_json() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir)
        .arg("script")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "typed-line""#))
        .stdout(predicate::str::contains(r#""charInterval": 32"#));
}

#[test]
fn script_validates_file() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir)
        .args(["script", "--script", &fixture_arg("typed.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "streamed-lines""#));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_honors_env() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("config.toml");
    finch_demo(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().to_string()));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir).args(["config", "init"]).assert().success();

    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("start_delay_ms = 900"));
    assert!(written.contains("confirm_ms = 2200"));

    finch_demo(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_show_prints_toml() {
    let dir = TempDir::new().unwrap();
    finch_demo(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install_command"))
        .stdout(predicate::str::contains("[playback]"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[playback\n").unwrap();

    finch_demo(&dir)
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_for_bash() {
    let (stdout, stderr, exit_code, _dir) = run_finch_demo(&["completions", "bash"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("finch-demo"));
    assert!(stdout.contains("render"));
}
