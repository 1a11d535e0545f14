//! End-to-end tests for the cpam-analytics binary

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("cpam-analytics").unwrap()
}

#[test]
fn test_default_invocation_prints_full_report() {
    bin()
        .assert()
        .success()
        .stdout(predicate::str::contains("ANALYSIS REPORT - CPAM STRASBOURG"))
        .stdout(predicate::str::contains(
            "DESCRIPTIVE ANALYSIS - HEALTH SPENDING IN FRANCE",
        ))
        .stdout(predicate::str::contains(
            "DESCRIPTIVE ANALYSIS - MEDICAL ACTS BY SPECIALTY",
        ))
        .stdout(predicate::str::contains("EXECUTIVE SYNTHESIS"))
        .stdout(predicate::str::contains("Report generated successfully."));
}

#[test]
fn test_full_report_totals_and_flags() {
    bin()
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 41 500 M€"))
        .stdout(predicate::str::contains(
            "Main spending category: Hospitalisations",
        ))
        .stdout(predicate::str::contains("Dominant specialty: Généraliste"))
        .stdout(predicate::str::contains("Monitor soins dentaires"));
}

#[test]
fn test_output_is_idempotent() {
    let first = bin().assert().success();
    let second = bin().assert().success();
    assert_eq!(
        String::from_utf8_lossy(&first.get_output().stdout),
        String::from_utf8_lossy(&second.get_output().stdout)
    );
}

#[test]
fn test_spending_subcommand() {
    bin()
        .arg("spending")
        .assert()
        .success()
        .stdout(predicate::str::contains("CORRELATION ANALYSIS"))
        .stdout(predicate::str::contains("CPAM RECOMMENDATIONS"))
        .stdout(predicate::str::contains("EXECUTIVE SYNTHESIS").not());
}

#[test]
fn test_acts_subcommand() {
    bin()
        .arg("acts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total acts: 13 200 000"))
        .stdout(predicate::str::contains("ECONOMIC ANALYSIS"));
}

#[test]
fn test_projects_subcommand() {
    bin()
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT IDEAS"))
        .stdout(predicate::str::contains("Détection de fraudes potentielles"))
        .stdout(predicate::str::contains("Basique"));
}

#[test]
fn test_report_csv_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    bin()
        .args(["report", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Full report exported to"));

    let csv = std::fs::read_to_string(&path).unwrap();
    assert!(csv.contains("Category,"));
    assert!(csv.contains("Specialty,"));
    assert!(csv.contains("TOTAL,41500.0"));
}

#[test]
fn test_report_json_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    bin()
        .args(["report", "--format", "json", "--output"])
        .arg(&path)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["schema_version"], "1.0.0");
    assert_eq!(value["total_budget"], 41_500.0);
}

#[test]
fn test_spending_csv_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spending.csv");

    bin()
        .args(["spending", "--output"])
        .arg(&path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&path).unwrap();
    assert_eq!(csv.lines().count(), 7);
}
