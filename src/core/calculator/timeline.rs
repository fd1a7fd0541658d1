use crate::errors::{AppError, AppResult};
use crate::models::event::Record;
use crate::models::event_type::EventType;
use crate::utils::time::hours;
use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

/// Note attached to the check-out synthesized for an open session.
pub const INFERRED_NOTE: &str = "Inferred by takt.";

/// A check-in paired with the check-out that closes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    /// Notes of the check-in event.
    pub notes: String,
    /// The closing check-out was synthesized at "now", not read from the ledger.
    pub inferred: bool,
}

impl Session {
    pub fn hours(&self) -> f64 {
        hours(self.end - self.start)
    }

    /// The ledger rows were out of order: the check-out precedes its check-in.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

#[derive(Debug, Default, Clone)]
pub struct Timeline {
    /// Records as processed, newest first, including any inferred check-out.
    pub records: Vec<Record>,
    pub sessions: Vec<Session>,
    pub inferred_out: bool,
}

/// If the newest record is a check-in, prepend a check-out stamped `now`.
///
/// Returns the effective records and whether one was inferred.
pub fn infer_last_out(records: &[Record], now: &DateTime<FixedOffset>) -> (Vec<Record>, bool) {
    let open = records.first().is_some_and(|r| r.kind.is_in());

    let mut effective = Vec::with_capacity(records.len() + usize::from(open));
    if open {
        debug!(at = %now, "open session, inferring check-out");
        effective.push(Record::new(*now, EventType::Out, INFERRED_NOTE));
    }
    effective.extend_from_slice(records);

    (effective, open)
}

/// Pair check-outs with the nearest older check-in.
///
/// Records are scanned newest first. A check-in without a pending check-out
/// is dropped; a check-out without an older check-in is ignored. Out-of-order
/// rows produce negative sessions that are kept and reported.
pub fn build_timeline(records: &[Record], now: &DateTime<FixedOffset>) -> AppResult<Timeline> {
    if records.is_empty() {
        return Err(AppError::NoRecords);
    }

    let (records, inferred_out) = infer_last_out(records, now);

    let mut sessions = Vec::new();
    // (timestamp, inferred) of the newest unmatched check-out
    let mut pending_out: Option<(DateTime<FixedOffset>, bool)> = None;

    for (idx, record) in records.iter().enumerate() {
        match record.kind {
            EventType::Out => {
                pending_out = Some((record.timestamp, inferred_out && idx == 0));
            }
            EventType::In => {
                let Some((end, inferred)) = pending_out.take() else {
                    continue;
                };

                let session = Session {
                    start: record.timestamp,
                    end,
                    notes: record.notes.clone(),
                    inferred,
                };
                if session.is_inverted() {
                    warn!(
                        check_in = %session.start,
                        check_out = %session.end,
                        "check-out precedes its check-in, session counts negative"
                    );
                }
                sessions.push(session);
            }
        }
    }

    Ok(Timeline {
        records,
        sessions,
        inferred_out,
    })
}
