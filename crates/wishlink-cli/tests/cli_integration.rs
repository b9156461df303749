//! Integration tests for wishlink-cli
//!
//! These tests verify the CLI end-to-end without a backend: help output,
//! config plumbing, the logged-out gate and the client-side validation gate
//! all settle before any network call would go out.

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Get a Command for the wishlink binary, isolated from any real session or
/// config on the machine running the tests.
fn wishlink(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wishlink").unwrap();
    cmd.env(
        "WISHLINK_SESSION_PATH",
        dir.path().join("session.json"),
    );
    cmd.env("WISHLINK_CONFIG_PATH", dir.path().join("config.json"));
    // Unroutable base URL so an accidental network call fails fast
    cmd.env("WISHLINK_API_URL", "http://127.0.0.1:1/api");
    cmd
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
#[serial]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wishlink"))
        .stdout(predicate::str::contains("Commands").or(predicate::str::contains("COMMAND")));
}

#[test]
#[serial]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wishlink"));
}

#[test]
#[serial]
fn test_subcommand_help() {
    let dir = TempDir::new().unwrap();
    for sub in ["auth", "gift", "shared", "reserved", "config"] {
        wishlink(&dir)
            .args([sub, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains(sub));
    }
}

// =============================================================================
// Session Gate Tests
// =============================================================================

#[test]
#[serial]
fn test_gift_list_requires_login() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .args(["gift", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
}

#[test]
#[serial]
fn test_reserved_list_requires_login() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .args(["reserved", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
}

#[test]
#[serial]
fn test_auth_status_logged_out() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
#[serial]
fn test_logout_without_session_succeeds() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));
}

// =============================================================================
// Validation Gate Tests (fail before any network call)
// =============================================================================

#[test]
#[serial]
fn test_register_rejects_weak_password_offline() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .args(["auth", "register", "alice", "--password", "abc12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("uppercase"));
}

#[test]
#[serial]
fn test_register_rejects_mismatched_confirmation_offline() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .args([
            "auth", "register", "alice", "--password", "Passw0rd", "--confirm", "Passw1rd",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("do not match"));
}

#[test]
#[serial]
fn test_shared_view_rejects_bad_link_offline() {
    let dir = TempDir::new().unwrap();
    // Write a session file so the link parser is reached, not the login gate
    std::fs::write(
        dir.path().join("session.json"),
        r#"{"token":"t","userId":"u-1","username":"alice"}"#,
    )
    .unwrap();
    wishlink(&dir)
        .args(["shared", "view", "otherapp://wishlist/w-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a wishlink link"));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
#[serial]
fn test_config_show_reports_env_api_url() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_base_url"))
        .stdout(predicate::str::contains("http://127.0.0.1:1/api"));
}

#[test]
#[serial]
fn test_config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .args(["config", "get", "no_such_key"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config key not found"));
}

#[test]
#[serial]
fn test_config_set_and_show_json() {
    let dir = TempDir::new().unwrap();
    wishlink(&dir)
        .args(["config", "set", "api_base_url", "https://example.test/api"])
        .assert()
        .success();
    // The env var still wins for the effective URL; the file must exist now
    assert!(dir.path().join("config.json").exists());
}
