use super::event_type::EventType;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_timestamp, is_unset, parse_timestamp};
use chrono::{DateTime, FixedOffset};
use csv::StringRecord;

/// Column names of the ledger header row.
pub const HEADER: [&str; 3] = ["timestamp", "kind", "notes"];

/// One check-in or check-out, as stored in a ledger row.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub timestamp: DateTime<FixedOffset>, // ⇔ column "timestamp" (RFC3339)
    pub kind: EventType,                  // ⇔ column "kind" ('in' | 'out')
    pub notes: String,                    // ⇔ column "notes" (free text)
}

impl Record {
    pub fn new(timestamp: DateTime<FixedOffset>, kind: EventType, notes: impl Into<String>) -> Self {
        Self {
            timestamp,
            kind,
            notes: notes.into(),
        }
    }

    /// Parse and validate one ledger row.
    pub fn from_row(row: &StringRecord, now: &DateTime<FixedOffset>) -> AppResult<Self> {
        if row.len() != HEADER.len() {
            return Err(AppError::InvalidColumns(row.len()));
        }

        let timestamp = parse_timestamp(&row[0])?;
        let kind = row[1].parse::<EventType>()?;
        let record = Record::new(timestamp, kind, &row[2]);
        record.validate(now)?;

        Ok(record)
    }

    /// A record is valid when its timestamp is set and not later than `now`.
    pub fn validate(&self, now: &DateTime<FixedOffset>) -> AppResult<()> {
        if is_unset(&self.timestamp) {
            return Err(AppError::InvalidTimestamp(self.timestamp_str()));
        }
        if self.timestamp > *now {
            return Err(AppError::FutureTimestamp(self.timestamp_str()));
        }
        Ok(())
    }

    pub fn to_row(&self) -> [String; 3] {
        [
            self.timestamp_str(),
            self.kind.as_str().to_string(),
            self.notes.clone(),
        ]
    }

    pub fn timestamp_str(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}
