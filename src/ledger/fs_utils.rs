// src/ledger/fs_utils.rs

use crate::errors::AppResult;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// `<path><suffix>`, e.g. `takt.csv` → `takt.csv.bak`.
pub(crate) fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

/// Replace `path` with `data` in one rename.
///
/// The temporary file lives next to the target so the rename never crosses
/// filesystems; readers see either the old file or the new one.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let temp_path = with_suffix(path, &format!(".{}.{}.tmp", std::process::id(), nanos));

    let result = (|| -> AppResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Everything after the first line (the header row).
pub(crate) fn body_after_header(content: &[u8]) -> &[u8] {
    match content.iter().position(|b| *b == b'\n') {
        Some(idx) => &content[idx + 1..],
        None => &[],
    }
}
