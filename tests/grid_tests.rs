use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{path_str, setup_ledger, takt, write_ledger};

#[test]
fn test_grid_counts_days_up_to_newest_record() {
    let (_dir, ledger) = setup_ledger();
    write_ledger(
        &ledger,
        &["2025-01-06T17:00:00Z,out,", "2025-01-06T08:00:00Z,in,"],
    );

    takt()
        .args(["--file", path_str(&ledger), "grid", "2025", "--legend"])
        .assert()
        .success()
        .stdout(
            contains("2025-01-01")
                .and(contains("2025-01-06"))
                .and(contains("Total tracked days: 6"))
                .and(contains("Active work days: 1"))
                .and(contains("Legend:")),
        );
}

#[test]
fn test_grid_rejects_malformed_year() {
    let (_dir, ledger) = setup_ledger();

    takt()
        .args(["--file", path_str(&ledger), "grid", "25"])
        .assert()
        .failure()
        .stderr(contains("Invalid year"));
}

#[test]
fn test_grid_on_empty_ledger_fails() {
    let (_dir, ledger) = setup_ledger();

    takt()
        .args(["--file", path_str(&ledger), "grid", "2025"])
        .assert()
        .failure()
        .stderr(contains("No records"));
}
