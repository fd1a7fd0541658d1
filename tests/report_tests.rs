use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{path_str, setup_ledger, stdout_of, takt, write_ledger, write_two_days};

#[test]
fn test_cat_lists_newest_first() {
    let (_dir, ledger) = setup_ledger();
    write_two_days(&ledger);

    let out = stdout_of(takt().args(["--file", path_str(&ledger), "cat"]));

    let newest = out.find("End of day").expect("newest row");
    let older = out.find("Meeting prep").expect("older row");
    assert!(newest < older);
    assert!(out.contains("2025-01-08T09:00:00+01:00"));
}

#[test]
fn test_cat_head_limits_rows() {
    let (_dir, ledger) = setup_ledger();
    write_two_days(&ledger);

    takt()
        .args(["--file", path_str(&ledger), "cat", "1"])
        .assert()
        .success()
        .stdout(contains("End of day").and(contains("Meeting prep").not()));
}

#[test]
fn test_cat_on_missing_ledger_creates_it() {
    let (_dir, ledger) = setup_ledger();

    takt()
        .args(["--file", path_str(&ledger), "cat"])
        .assert()
        .success()
        .stderr(contains("No records"));

    assert_eq!(fs::read_to_string(&ledger).unwrap(), "timestamp,kind,notes\n");
}

#[test]
fn test_day_summary_with_balance() {
    let (_dir, ledger) = setup_ledger();
    write_two_days(&ledger);

    let out = stdout_of(takt().args(["--file", path_str(&ledger), "day"]));

    assert!(out.contains("Balance"));
    assert!(out.contains("2025-01-09"));
    assert!(out.contains("8h30m"));
    assert!(out.contains("+0h30m"));
    assert!(out.contains("2025-01-08"));
    assert!(out.contains("00h00m"));
    assert!(out.find("2025-01-09").unwrap() < out.find("2025-01-08").unwrap());
}

#[test]
fn test_day_summary_uses_clock_style_target() {
    let (_dir, ledger) = setup_ledger();
    write_two_days(&ledger);

    takt()
        .env("TAKT_TARGET_HOURS", "7:30")
        .args(["--file", path_str(&ledger), "d"])
        .assert()
        .success()
        .stdout(contains("+1h00m").and(contains("+0h30m")));
}

#[test]
fn test_invalid_target_falls_back_to_default() {
    let (_dir, ledger) = setup_ledger();
    write_two_days(&ledger);

    takt()
        .env("TAKT_TARGET_HOURS", "7:75")
        .args(["--file", path_str(&ledger), "day"])
        .assert()
        .success()
        .stdout(contains("+0h30m"));
}

#[test]
fn test_day_head_limits_groups() {
    let (_dir, ledger) = setup_ledger();
    write_two_days(&ledger);

    takt()
        .args(["--file", path_str(&ledger), "day", "1"])
        .assert()
        .success()
        .stdout(contains("2025-01-09").and(contains("2025-01-08").not()));
}

#[test]
fn test_week_month_year_group_both_days() {
    let (_dir, ledger) = setup_ledger();
    write_two_days(&ledger);

    for (cmd, label) in [("week", "2025-W02"), ("month", "2025-01"), ("year", "2025")] {
        takt()
            .args(["--file", path_str(&ledger), cmd])
            .assert()
            .success()
            .stdout(contains(label).and(contains("16h30m")).and(contains("8h15m")));
    }
}

#[test]
fn test_summary_on_empty_ledger_fails() {
    let (_dir, ledger) = setup_ledger();

    takt()
        .args(["--file", path_str(&ledger), "week"])
        .assert()
        .failure()
        .stderr(contains("No records to process"));
}

#[test]
fn test_invalid_rows_are_dropped_and_ledger_rewritten() {
    let (_dir, ledger) = setup_ledger();
    write_ledger(
        &ledger,
        &[
            "2025-01-09T17:30:00+01:00,out,End of day",
            "2025-01-09T12:00:00+01:00,lunch,",
            "not-a-date,in,",
            "2025-01-09T09:00:00+01:00,in,Meeting prep",
        ],
    );

    takt()
        .args(["--file", path_str(&ledger), "cat"])
        .assert()
        .success()
        .stdout(contains("End of day").and(contains("lunch").not()));

    let content = fs::read_to_string(&ledger).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(!content.contains("not-a-date"));

    // the backup keeps what was on disk before the cleanup
    let backup = fs::read_to_string(ledger.with_file_name("takt.csv.bak")).unwrap();
    assert!(backup.contains("lunch"));
}

#[test]
fn test_unreadable_ledger_recovers_from_backup() {
    let (_dir, ledger) = setup_ledger();
    write_two_days(&ledger);

    takt()
        .args(["--file", path_str(&ledger), "cat"])
        .assert()
        .success();

    fs::write(&ledger, b"timestamp,kind,notes\n\xff\xfe,in,\n").unwrap();

    takt()
        .args(["--file", path_str(&ledger), "cat"])
        .assert()
        .success()
        .stdout(contains("End of day"));
}
