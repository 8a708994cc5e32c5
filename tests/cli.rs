//! End-to-end tests for the till binary
//!
//! Each test runs against its own data directory via TILL_AUDIT_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn till(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("till").unwrap();
    cmd.env("TILL_AUDIT_DATA_DIR", dir.path());
    cmd
}

fn add_audit(dir: &TempDir, terminal: &str, cash: &str, tef: &str) {
    till(dir)
        .args([
            "add",
            "--terminal",
            terminal,
            "--operator",
            "ANA",
            "--supervisor",
            "SIMONE",
            "--auditor",
            "GABRIEL",
            "--cash",
            cash,
            "--tef",
            tef,
        ])
        .assert()
        .success();
}

#[test]
fn add_reports_shortage_and_list_shows_it() {
    let dir = TempDir::new().unwrap();

    till(&dir)
        .args([
            "add",
            "--terminal",
            "5",
            "--operator",
            "ANA",
            "--supervisor",
            "SIMONE",
            "--auditor",
            "GABRIEL",
            "--cash",
            "100.00",
            "--tef",
            "120.00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered audit #1."))
        .stdout(predicate::str::contains("CASH SHORTAGE AT TERMINAL 5"))
        .stdout(predicate::str::contains("-R$ 20,00"));

    till(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("SHORTAGE"))
        .stdout(predicate::str::contains("1 audit(s) shown. IDs 1 to 1."));
}

#[test]
fn balanced_audit_is_reported_as_such() {
    let dir = TempDir::new().unwrap();

    till(&dir)
        .args([
            "add",
            "--terminal",
            "3",
            "--operator",
            "ANA",
            "--supervisor",
            "SIMONE",
            "--auditor",
            "GABRIEL",
            "--cash",
            "50.00",
            "--tef",
            "50.00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("REGISTER BALANCED AT TERMINAL 3"));
}

#[test]
fn unknown_terminal_is_rejected() {
    let dir = TempDir::new().unwrap();

    till(&dir)
        .args([
            "add",
            "--terminal",
            "99",
            "--operator",
            "ANA",
            "--supervisor",
            "SIMONE",
            "--auditor",
            "GABRIEL",
            "--cash",
            "10.00",
            "--tef",
            "0.00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the configured roster"));

    till(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audits recorded"));
}

#[test]
fn delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    add_audit(&dir, "1", "10.00", "0.00");

    till(&dir)
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit #1 deleted."));

    till(&dir)
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found; nothing to delete"));
}

#[test]
fn purge_requires_the_admin_secret() {
    let dir = TempDir::new().unwrap();
    add_audit(&dir, "1", "10.00", "0.00");
    add_audit(&dir, "2", "20.00", "0.00");

    till(&dir)
        .args(["purge", "--secret", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Admin secret mismatch"));

    till(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 audit(s) shown"));

    till(&dir)
        .args(["purge", "--secret", "123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 audit(s) deleted"));

    till(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audits recorded"));
}

#[test]
fn export_writes_a_csv_file() {
    let dir = TempDir::new().unwrap();
    add_audit(&dir, "7", "1234.56", "1000.00");

    let out = dir.path().join("audits.csv");
    till(&dir)
        .args(["export", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 audit(s)"));

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("ID,Date/Time,Terminal"));
    assert!(contents.contains("\"R$ 1.234,56\""));
    assert!(contents.contains("GABRIEL"));
}

#[test]
fn journal_records_operations() {
    let dir = TempDir::new().unwrap();
    add_audit(&dir, "4", "10.00", "0.00");
    till(&dir)
        .args(["delete", "1", "--force"])
        .assert()
        .success();

    till(&dir)
        .arg("journal")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("DELETE"));
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    till(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));

    till(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    till(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminals:"))
        .stdout(predicate::str::contains("(unrestricted)"));
}
