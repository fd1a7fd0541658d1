//! Unified application error type.
//! All modules (ledger, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not recover ledger from backup {path}: {reason}")]
    Recovery { path: PathBuf, reason: String },

    #[error("Ledger {path} cannot be decoded ({reason}); repair it or restore the backup")]
    CorruptLedger { path: PathBuf, reason: String },

    // ---------------------------
    // Row validation
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid kind: {0} (must be 'in' or 'out')")]
    InvalidEventType(String),

    #[error("Timestamp in future: {0}")]
    FutureTimestamp(String),

    #[error("Invalid column count: expected 3, found {0}")]
    InvalidColumns(usize),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("No records to process")]
    NoRecords,

    #[error("Unsupported period: {0}")]
    UnsupportedPeriod(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    // ---------------------------
    // External collaborators
    // ---------------------------
    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Git error: {0}")]
    Vcs(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
