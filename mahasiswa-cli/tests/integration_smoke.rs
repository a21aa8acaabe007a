//! Smoke tests for the mahasiswa binary

use assert_cmd::Command;
use predicates::prelude::*;

fn mahasiswa() -> Command {
    let mut cmd = Command::cargo_bin("mahasiswa").unwrap();
    // Keep the caller's database settings out of the tests
    for var in ["DATABASE_URL", "DB_HOST", "DB_PORT", "DB_USER", "DB_PASS", "DB_DATABASE"] {
        cmd.env_remove(var);
    }
    cmd
}

// === Help ===

#[test]
fn test_serve_help() {
    mahasiswa()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Port to listen on"))
        .stdout(predicate::str::contains("DB_HOST"));
}

#[test]
fn test_help_hides_password() {
    mahasiswa()
        .env("DB_PASS", "hunter2")
        .arg("ping")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not());
}

// === Ping ===

#[test]
fn test_ping_sqlite_memory() {
    mahasiswa()
        .arg("ping")
        .arg("--database-url")
        .arg("sqlite::memory:")
        .assert()
        .success()
        .stdout(predicate::str::contains("database reachable"));
}

#[test]
fn test_ping_sqlite_file() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}?mode=rwc", dir.path().join("mahasiswa.db").display());

    mahasiswa()
        .arg("ping")
        .arg("--database-url")
        .arg(&url)
        .assert()
        .success();
}

#[test]
fn test_ping_unreachable_fails() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("missing/mahasiswa.db").display());

    mahasiswa()
        .arg("ping")
        .arg("--database-url")
        .arg(&url)
        .arg("--acquire-timeout")
        .arg("2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to connect to database"));
}

// === Serve ===

#[test]
fn test_serve_refuses_to_start_without_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("missing/mahasiswa.db").display());

    mahasiswa()
        .arg("serve")
        .arg("--port")
        .arg("0")
        .arg("--database-url")
        .arg(&url)
        .arg("--acquire-timeout")
        .arg("2")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to connect to database"));
}
