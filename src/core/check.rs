use crate::errors::AppResult;
use crate::ledger::Ledger;
use crate::models::event::Record;
use crate::models::event_type::EventType;
use chrono::{DateTime, FixedOffset, Timelike};
use tracing::info;

pub struct CheckLogic;

impl CheckLogic {
    /// Toggle the check state: `in` after an `out` (or on an empty ledger),
    /// `out` after an `in`. The event is stamped `now` to the second.
    pub fn apply(ledger: &Ledger, notes: &str, now: &DateTime<FixedOffset>) -> AppResult<Record> {
        let last = ledger.read_records_at(1, now)?;
        let kind = EventType::toggle_after(last.first().map(|r| r.kind));

        let timestamp = now.with_nanosecond(0).unwrap_or(*now);
        let record = Record::new(timestamp, kind, notes);
        ledger.append_record(&record)?;

        info!(kind = %record.kind, at = %record.timestamp_str(), "check recorded");
        Ok(record)
    }
}
