//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated data directory via the
//! REGISTRO_CLI_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn registro(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("registro").unwrap();
    cmd.env("REGISTRO_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_list_starts_empty() {
    let data_dir = TempDir::new().unwrap();

    registro(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No registrations found."))
        .stdout(predicate::str::contains("Showing 0 of 0"));
}

#[test]
fn test_add_then_list() {
    let data_dir = TempDir::new().unwrap();

    registro(&data_dir)
        .args([
            "add",
            "Contribuyente S.A.",
            "1000.50",
            "--category",
            "Servicios",
            "--month",
            "Enero",
            "--year",
            "2024",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added registration"));

    registro(&data_dir)
        .args(["list", "--month", "Enero", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contribuyente S.A."))
        .stdout(predicate::str::contains("Total for selection: $1000.50"))
        .stdout(predicate::str::contains("Showing 1 of 1"));
}

#[test]
fn test_list_with_garbage_year_totals_nothing() {
    let data_dir = TempDir::new().unwrap();

    registro(&data_dir)
        .args(["add", "Acme", "100", "--category", "Tasas", "--year", "2023"])
        .assert()
        .success();

    // An unparseable year selection totals no records but still lists them all.
    registro(&data_dir)
        .args(["list", "--year", "20x3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total for selection: $0.00"))
        .stdout(predicate::str::contains("Showing 1 of 1"));
}

#[test]
fn test_add_rejects_non_numeric_amount() {
    let data_dir = TempDir::new().unwrap();

    // Amounts that cannot be represented must fail as validation errors,
    // never abort the process.
    for amount in ["abc", "10.€5", "922337203685477581"] {
        registro(&data_dir)
            .args(["add", "Acme", amount, "--category", "Tasas"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Validation error"));
    }
}

#[test]
fn test_add_rejects_non_positive_amount() {
    let data_dir = TempDir::new().unwrap();

    registro(&data_dir)
        .args(["add", "Acme", "0", "--category", "Tasas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    registro(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 of 0"));
}

#[test]
fn test_export_empty_produces_no_file() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    registro(&data_dir)
        .args(["export", "csv", "--output"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No records to export."));

    assert!(!out_dir.path().join("registros-inspeccion.csv").exists());
}

#[test]
fn test_export_csv_writes_file() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    registro(&data_dir)
        .args([
            "add",
            "Acme Corp",
            "10.5",
            "--category",
            "Inspeccion",
            "--month",
            "Marzo",
            "--year",
            "2024",
        ])
        .assert()
        .success();

    registro(&data_dir)
        .args(["export", "csv", "--search", "acme", "--output"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 registration(s)"));

    let csv = std::fs::read_to_string(out_dir.path().join("registros-inspeccion.csv")).unwrap();
    assert!(csv.starts_with('\u{FEFF}'));
    assert!(csv.contains("ID,Name,Month,Year,Amount,Category"));
    assert!(csv.contains("Acme Corp,Marzo,2024,10.5,Inspeccion"));
}

#[test]
fn test_export_pdf_writes_file() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    registro(&data_dir)
        .args(["add", "Acme Corp", "10.5", "--category", "Inspeccion"])
        .assert()
        .success();

    registro(&data_dir)
        .args(["export", "pdf", "--output"])
        .arg(out_dir.path())
        .assert()
        .success();

    let pdf = std::fs::read(out_dir.path().join("registros-inspeccion.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn test_delete_with_yes_flag() {
    let data_dir = TempDir::new().unwrap();

    registro(&data_dir)
        .args(["add", "Acme", "50", "--category", "Tasas"])
        .assert()
        .success();

    // Read the id back from the persisted file
    let payload =
        std::fs::read_to_string(data_dir.path().join("data").join("registrations.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&payload).unwrap();
    let id = records[0]["id"].as_str().unwrap().to_string();

    registro(&data_dir)
        .args(["delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    registro(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 of 0"));
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let data_dir = TempDir::new().unwrap();

    registro(&data_dir)
        .args(["delete", "does-not-exist", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No registration deleted."));
}

#[test]
fn test_years_lists_distinct_descending() {
    let data_dir = TempDir::new().unwrap();

    for (year, name) in [("2022", "A"), ("2024", "B"), ("2022", "C")] {
        registro(&data_dir)
            .args(["add", name, "10", "--category", "Tasas", "--year", year])
            .assert()
            .success();
    }

    registro(&data_dir)
        .arg("years")
        .assert()
        .success()
        .stdout(predicate::str::diff("2024\n2022\n"));
}
