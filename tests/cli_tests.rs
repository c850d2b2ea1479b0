//! CLI integration tests.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

const ARTIFACTS: [&str; 5] = [
    "migration_projects.csv",
    "performance_metrics.csv",
    "cost_analysis.csv",
    "recommendations.csv",
    "migration_analysis.json",
];

fn cloudshift(cwd: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("cloudshift");
    cmd.current_dir(cwd)
        .env_remove("CLOUDSHIFT_SEED")
        .env_remove("CLOUDSHIFT_PROJECTS")
        .env_remove("CLOUDSHIFT_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn read_dir_artifacts(dir: &Path) -> Vec<String> {
    ARTIFACTS
        .iter()
        .map(|name| {
            fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("{name}: {e}"))
        })
        .collect()
}

#[test]
fn test_help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    cloudshift(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cloudshift"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    cloudshift(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cloudshift"));
}

#[test]
fn test_bare_invocation_writes_default_data_dir() {
    let dir = tempfile::tempdir().unwrap();

    cloudshift(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Migration projects"))
        .stdout(predicate::str::contains("Average project cost"))
        .stdout(predicate::str::contains("$"));

    let data = dir.path().join("data");
    for name in ARTIFACTS {
        assert!(data.join(name).is_file(), "{name} missing");
    }
    let projects = fs::read_to_string(data.join("migration_projects.csv")).unwrap();
    assert_eq!(projects.lines().count(), 26);
    assert!(projects.starts_with("project_id,project_name,source_cloud,target_cloud,"));
}

#[test]
fn test_pinned_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let args = [
        "generate",
        "--seed",
        "42",
        "--projects",
        "15",
        "--reference-time",
        "2026-04-01T08:00:00",
        "--output-dir",
        "out",
    ];

    cloudshift(dir.path()).args(args).assert().success();
    let first = read_dir_artifacts(&dir.path().join("out"));
    cloudshift(dir.path()).args(args).assert().success();
    let second = read_dir_artifacts(&dir.path().join("out"));

    assert_eq!(first, second);
}

#[test]
fn test_default_config_file_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("cloudshift.toml"),
        "[generator]\nprojects = 3\nreference_time = \"2026-01-15\"\n\n[output]\ndirectory = \"exports\"\n",
    )
    .unwrap();

    cloudshift(dir.path()).arg("generate").assert().success();

    let projects = fs::read_to_string(dir.path().join("exports/migration_projects.csv")).unwrap();
    assert_eq!(projects.lines().count(), 4);
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();

    cloudshift(dir.path())
        .args(["generate", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));

    assert!(!dir.path().join("data").exists());
}

#[test]
fn test_zero_projects_fails() {
    let dir = tempfile::tempdir().unwrap();

    cloudshift(dir.path())
        .args(["generate", "--projects", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("projects"));
}

#[test]
fn test_projects_flag_beats_environment_and_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("cloudshift.toml"),
        "[generator]\nprojects = 0\nreference_time = \"2026-01-15\"\n",
    )
    .unwrap();

    cloudshift(dir.path())
        .env("CLOUDSHIFT_PROJECTS", "0")
        .args(["generate", "--projects", "4"])
        .assert()
        .success();

    let projects = fs::read_to_string(dir.path().join("data/migration_projects.csv")).unwrap();
    assert_eq!(projects.lines().count(), 5);
}

#[test]
fn test_config_validate_ignores_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("good.toml");
    fs::write(&path, "[generator]\nprojects = 8\nreference_time = \"2026-01-15\"\n").unwrap();

    cloudshift(dir.path())
        .env("CLOUDSHIFT_PROJECTS", "0")
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
}

#[test]
fn test_config_validate_rejects_unknown_log_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

    cloudshift(dir.path())
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("format"));
}

#[test]
fn test_config_show_without_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    cloudshift(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults"))
        .stdout(predicate::str::contains("42"))
        .stdout(predicate::str::contains("data"));
}

#[test]
fn test_catalog_json_is_parseable() {
    let dir = tempfile::tempdir().unwrap();

    let output = cloudshift(dir.path())
        .args(["--json", "catalog"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["type"], "catalog");
    assert_eq!(value["payload"]["providers"][0]["provider"], "AWS");
}

#[test]
fn test_generate_json_emits_summary_line() {
    let dir = tempfile::tempdir().unwrap();

    let output = cloudshift(dir.path())
        .args([
            "--json",
            "generate",
            "-n",
            "5",
            "--reference-time",
            "2026-02-02",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary = stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|value| value["type"] == "summary")
        .expect("summary line");
    assert_eq!(summary["payload"]["projects"], 5);
    assert_eq!(summary["payload"]["cost_rows"], 5);
}

#[test]
fn test_quiet_generate_prints_nothing_to_stdout() {
    let dir = tempfile::tempdir().unwrap();

    cloudshift(dir.path())
        .args(["-q", "generate", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
