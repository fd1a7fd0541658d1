use super::fs_utils::write_atomic;
use super::{Ledger, apply_limit, parse_table, split_rows};
use crate::errors::AppResult;
use crate::models::event::Record;
use crate::utils::time::now;
use chrono::{DateTime, FixedOffset};
use std::fs;
use tracing::{debug, warn};

impl Ledger {
    /// Copy the ledger byte for byte to `<ledger>.bak`, replacing any older backup.
    pub fn backup(&self) -> AppResult<()> {
        let content = fs::read(&self.path)?;
        self.refresh_backup(&content)
    }

    /// Store `content`, as just read from the ledger, as the new backup.
    pub(super) fn refresh_backup(&self, content: &[u8]) -> AppResult<()> {
        write_atomic(&self.backup_path(), content)?;
        debug!(backup = %self.backup_path().display(), "backup refreshed");
        Ok(())
    }

    /// Read records from the backup instead of the ledger.
    pub fn recover(&self, limit: i64) -> AppResult<Vec<Record>> {
        self.recover_at(limit, &now())
    }

    /// Invalid rows in the backup are skipped but the backup itself is never rewritten.
    pub fn recover_at(&self, limit: i64, now: &DateTime<FixedOffset>) -> AppResult<Vec<Record>> {
        let content = fs::read(self.backup_path())?;
        let rows = parse_table(&content)?;

        if limit == 0 {
            return Ok(Vec::new());
        }

        let (valid, invalid_lines) = split_rows(rows, now);
        if !invalid_lines.is_empty() {
            warn!(
                count = invalid_lines.len(),
                lines = ?invalid_lines,
                "skipping invalid records in backup"
            );
        }
        Ok(apply_limit(valid, limit))
    }
}
