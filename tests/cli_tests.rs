use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    Command::cargo_bin("chanhop")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive channel switcher for team chat workspaces",
        ));
}

#[test]
fn test_cli_version_flag() {
    Command::cargo_bin("chanhop")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chanhop"));
}

#[test]
fn test_cli_with_nonexistent_file() {
    // Path validation happens before the terminal is touched
    Command::cargo_bin("chanhop")
        .unwrap()
        .arg("nonexistent-workspace.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workspace file not found"));
}
