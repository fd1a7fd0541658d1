//! Durable CSV ledger of check events, newest first.
//!
//! Layout on disk:
//!
//! ```text
//! timestamp,kind,notes
//! 2025-01-09T17:45:00+01:00,out,End of day
//! 2025-01-09T14:30:00+01:00,in,Meeting prep
//! ```
//!
//! Every write replaces the whole file through a sibling temporary file, and
//! every successful read refreshes `<ledger>.bak` before any row is dropped.

mod backup;
pub(crate) mod fs_utils;

use crate::errors::{AppError, AppResult};
use crate::models::event::{HEADER, Record};
use crate::utils::time::now;
use chrono::{DateTime, FixedOffset};
use csv::{ReaderBuilder, StringRecord, Writer};
use fs_utils::{body_after_header, with_suffix, write_atomic};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

pub const BACKUP_SUFFIX: &str = ".bak";

pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        with_suffix(&self.path, BACKUP_SUFFIX)
    }

    /// Create the ledger with only the header row if it does not exist yet.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        debug!(path = %self.path.display(), "creating empty ledger");
        write_atomic(&self.path, &encode(&[])?)
    }

    /// Read up to `limit` records, newest first.
    ///
    /// `limit > 0` truncates, `limit < 0` returns everything, `limit == 0`
    /// returns nothing.
    pub fn read_records(&self, limit: i64) -> AppResult<Vec<Record>> {
        self.read_records_at(limit, &now())
    }

    /// Same as [`Ledger::read_records`], validating timestamps against `now`.
    ///
    /// Invalid rows are dropped, reported, and the ledger is rewritten with
    /// the surviving rows. If the file cannot be read as a table at all, the
    /// backup is read instead.
    pub fn read_records_at(&self, limit: i64, now: &DateTime<FixedOffset>) -> AppResult<Vec<Record>> {
        self.ensure_exists()?;

        let rows = match fs::read(&self.path)
            .map_err(AppError::from)
            .and_then(|content| parse_table(&content).map(|rows| (content, rows)))
        {
            Ok((content, rows)) => {
                self.refresh_backup(&content)?;
                rows
            }
            Err(e) => return self.recover_after(e, limit, now),
        };

        if limit == 0 {
            return Ok(Vec::new());
        }

        let (valid, invalid_lines) = split_rows(rows, now);
        if !invalid_lines.is_empty() {
            warn!(
                count = invalid_lines.len(),
                lines = ?invalid_lines,
                path = %self.path.display(),
                "found invalid records, removing them from the ledger"
            );
            if let Err(e) = self.compact(&valid) {
                error!(error = %e, "could not clean up invalid records");
            }
        }

        Ok(apply_limit(valid, limit))
    }

    /// Prepend one record as the newest event.
    ///
    /// The new file is the header, the new row, then the previous body
    /// byte for byte; it replaces the ledger in a single rename.
    ///
    /// Fails without writing if the current file cannot be decoded: rows
    /// prepended to it would never be read back.
    pub fn append_record(&self, record: &Record) -> AppResult<()> {
        self.ensure_exists()?;

        let previous = fs::read(&self.path)?;
        if let Err(e) = parse_table(&previous) {
            error!(error = %e, path = %self.path.display(), "refusing to append to undecodable ledger");
            return Err(AppError::CorruptLedger {
                path: self.path.clone(),
                reason: e.to_string(),
            });
        }
        let mut content = encode(std::slice::from_ref(record))?;
        content.extend_from_slice(body_after_header(&previous));

        write_atomic(&self.path, &content)
    }

    /// Rewrite the ledger so it holds exactly `records`, in order.
    pub fn compact(&self, records: &[Record]) -> AppResult<()> {
        write_atomic(&self.path, &encode(records)?)
    }

    fn recover_after(
        &self,
        cause: AppError,
        limit: i64,
        now: &DateTime<FixedOffset>,
    ) -> AppResult<Vec<Record>> {
        warn!(error = %cause, path = %self.path.display(), "ledger unreadable, trying backup");
        self.recover_at(limit, now).map_err(|e| AppError::Recovery {
            path: self.backup_path(),
            reason: format!("{cause}; backup: {e}"),
        })
    }
}

/// Header row plus one CSV row per record.
fn encode(records: &[Record]) -> AppResult<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(HEADER)?;
    for record in records {
        wtr.write_record(record.to_row())?;
    }
    wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))
}

/// Decode the whole file as CSV. Rows may have any number of columns; that is
/// checked per row. Any decoding failure (e.g. invalid UTF-8) fails the table.
fn parse_table(content: &[u8]) -> AppResult<Vec<StringRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let mut rows = Vec::new();
    for row in rdr.records() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Valid records, and the file line numbers of the rows that failed validation.
fn split_rows(rows: Vec<StringRecord>, now: &DateTime<FixedOffset>) -> (Vec<Record>, Vec<u64>) {
    let mut valid = Vec::with_capacity(rows.len());
    let mut invalid_lines = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        match Record::from_row(row, now) {
            Ok(record) => valid.push(record),
            Err(e) => {
                let line = row.position().map_or(idx as u64 + 2, |p| p.line());
                debug!(line, error = %e, "invalid ledger row");
                invalid_lines.push(line);
            }
        }
    }

    (valid, invalid_lines)
}

fn apply_limit(mut records: Vec<Record>, limit: i64) -> Vec<Record> {
    if limit > 0 {
        records.truncate(limit as usize);
    }
    records
}
