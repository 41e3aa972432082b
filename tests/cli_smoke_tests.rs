use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cashflow_core_cli").unwrap();
    cmd.env("CASHFLOW_CORE_HOME", home.path());
    cmd
}

#[test]
fn help_prints_usage() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: cashflow_core_cli"));
}

#[test]
fn unknown_command_fails_with_hint() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command"));
}

#[test]
fn init_add_and_project_flow() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .args(["init", "studio", "--currency", "EUR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created profile `studio` (EUR)"));

    cli(&home)
        .args([
            "add-income",
            "studio",
            "Retainer",
            "2000",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added `Retainer`"));

    cli(&home)
        .args(["add-asset", "studio", "Checking", "5000", "EUR"])
        .assert()
        .success();

    cli(&home)
        .args(["project", "studio", "--months", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("next 6 months"))
        .stdout(predicate::str::contains("BALANCE"));

    cli(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studio"));
}

#[test]
fn debts_flow_reports_unbounded_payoff() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .args(["init", "household"])
        .assert()
        .success();

    cli(&home)
        .args(["add-debt", "household", "Frozen loan", "4000", "0"])
        .assert()
        .success();

    cli(&home)
        .args(["debts", "household"])
        .assert()
        .success()
        .stdout(predicate::str::contains("∞"))
        .stderr(predicate::str::contains("No bounded payoff"));
}

#[test]
fn invalid_date_is_rejected() {
    let home = TempDir::new().unwrap();

    cli(&home).args(["init", "studio"]).assert().success();

    cli(&home)
        .args(["add-income", "studio", "Retainer", "2000", "01-01-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be YYYY-MM-DD"));
}

#[test]
fn project_on_missing_profile_fails() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["project", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile not found"));
}
