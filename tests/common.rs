#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "timestamp,kind,notes";

/// takt binary with a clean environment: no ledger, target or editor
/// inherited from the developer's shell.
pub fn takt() -> Command {
    let mut cmd = cargo_bin_cmd!("takt");
    for key in [
        "TAKT_FILE",
        "TAKT_TARGET_HOURS",
        "TAKT_EDITOR",
        "TAKT_LOG",
        "RUST_LOG",
        "EDITOR",
        "VISUAL",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

/// Fresh temp dir plus the ledger path inside it (the file is not created).
pub fn setup_ledger() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("takt.csv");
    (dir, path)
}

/// Write a ledger with the header and the given rows, newest first.
pub fn write_ledger(path: &Path, rows: &[&str]) {
    let mut content = format!("{HEADER}\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(path, content).expect("write ledger");
}

/// Two full days in January 2025: 8h30m on the 9th, 8h00m on the 8th.
pub fn write_two_days(path: &Path) {
    write_ledger(
        path,
        &[
            "2025-01-09T17:30:00+01:00,out,End of day",
            "2025-01-09T09:00:00+01:00,in,Meeting prep",
            "2025-01-08T17:00:00+01:00,out,",
            "2025-01-08T09:00:00+01:00,in,",
        ],
    );
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 stdout")
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}
