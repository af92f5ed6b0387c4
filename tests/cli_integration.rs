//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the galera-healthcheck binary for testing
fn healthcheck_cmd() -> Command {
    let mut cmd = Command::cargo_bin("galera-healthcheck").unwrap();
    cmd.env_remove("MYSQL_USER").env_remove("MYSQL_PASSWORD");
    cmd
}

#[test]
fn test_version_output() {
    healthcheck_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("galera-healthcheck"));
}

#[test]
fn test_help_shows_all_commands() {
    healthcheck_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    healthcheck_cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--user"))
        .stdout(predicate::str::contains("--password"))
        .stdout(predicate::str::contains("--avail-when-donor"))
        .stdout(predicate::str::contains("--avail-when-read-only"))
        .stdout(predicate::str::contains("--pidfile"));
}

#[test]
fn test_serve_without_user_fails() {
    let temp_dir = TempDir::new().unwrap();

    healthcheck_cmd()
        .current_dir(temp_dir.path())
        .args(["serve", "--no-pidfile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mysql.user"));
}

#[test]
fn test_check_unreachable_database_is_unhealthy() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("galera-healthcheck.toml"),
        "[mysql]\nconnect_timeout_seconds = 1\n",
    )
    .unwrap();

    healthcheck_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "-u", "monitor", "--mysql-port", "1", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"healthy\": false"))
        .stdout(predicate::str::contains("Could not get wsrep_local_state value"));
}

#[test]
fn test_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("galera-healthcheck.toml");

    healthcheck_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[health]"));
}

#[test]
fn test_config_init_no_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("galera-healthcheck.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    healthcheck_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, "existing content");
}

#[test]
fn test_completions_bash() {
    healthcheck_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("galera-healthcheck"));
}
