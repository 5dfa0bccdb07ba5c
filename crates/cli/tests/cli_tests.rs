use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fleet_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taxi-fleet").unwrap();
    cmd.env("TAXI_FLEET_DB_PATH", temp_dir.path().join("fleet.db"));
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("taxi-fleet").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Taxi fleet resource manager"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("taxi-fleet").unwrap();
    cmd.arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("port"))
        .stdout(predicate::str::contains("memory"));
}

#[test]
fn test_cli_rejects_unknown_backend() {
    let mut cmd = Command::cargo_bin("taxi-fleet").unwrap();
    cmd.args(["serve", "--backend", "redis"]).assert().failure();
}

#[test]
fn test_cli_create_list_reset() {
    let temp_dir = TempDir::new().unwrap();

    fleet_cmd(&temp_dir)
        .args(["create", "123ABC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 1"))
        .stdout(predicate::str::contains("\"driver\": \"Unknown\""));

    fleet_cmd(&temp_dir)
        .args(["create", "999XYZ", "--status", "busy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 2"));

    fleet_cmd(&temp_dir)
        .args(["list", "--status", "busy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("999XYZ"))
        .stdout(predicate::str::contains("123ABC").not());

    fleet_cmd(&temp_dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\":true"));

    fleet_cmd(&temp_dir).arg("list").assert().success().stdout(predicate::str::starts_with("[]"));

    fleet_cmd(&temp_dir)
        .args(["create", "555QQQ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 3"));
}

#[test]
fn test_cli_create_rejects_empty_number() {
    let temp_dir = TempDir::new().unwrap();
    fleet_cmd(&temp_dir).args(["create", ""]).assert().failure();
}

#[test]
fn test_cli_db_path_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();
    let flag_db = flag_dir.path().join("other.db");

    fleet_cmd(&env_dir)
        .args(["create", "A1", "--db-path"])
        .arg(&flag_db)
        .assert()
        .success();

    fleet_cmd(&env_dir).arg("list").assert().success().stdout(predicate::str::starts_with("[]"));
    assert!(flag_db.exists());
}
