//! Time utilities: the ledger timestamp format, the current instant, hour conversions.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, SecondsFormat, TimeDelta};

/// Calendar date format used for day groups and grid rows.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current instant, carrying the local UTC offset.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Parse an RFC3339 ledger timestamp, keeping the offset it was written with.
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s.trim()).map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Format a timestamp the way it is stored: RFC3339, `Z` for UTC, fractional
/// seconds only when present.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `0001-01-01T00:00:00Z` is the "never set" instant of other ledger writers.
pub fn is_unset(ts: &DateTime<FixedOffset>) -> bool {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .is_some_and(|zero| ts.naive_utc() <= zero)
}

pub fn date_str(ts: &DateTime<FixedOffset>) -> String {
    ts.format(DATE_FORMAT).to_string()
}

/// Fractional hours of a (possibly negative) duration.
pub fn hours(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 3_600_000.0
}
