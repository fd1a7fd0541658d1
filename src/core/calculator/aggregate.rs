//! Sessions grouped by calendar period.

use super::timeline::{Session, build_timeline};
use crate::errors::AppResult;
use crate::models::aggregated::AggregatedRecord;
use crate::models::event::Record;
use crate::models::period::Period;
use crate::utils::time::date_str;
use chrono::{DateTime, FixedOffset};
use std::collections::{BTreeMap, HashSet};

/// Running totals for one group key.
#[derive(Debug)]
struct GroupBuilder {
    group: String,
    total_hours: f64,
    dates: Vec<String>,
    notes: Vec<String>,
}

impl GroupBuilder {
    fn new(group: String) -> Self {
        Self {
            group,
            total_hours: 0.0,
            dates: Vec::new(),
            notes: Vec::new(),
        }
    }

    fn merge(&mut self, session: &Session) {
        self.total_hours += session.hours();
        self.dates.push(date_str(&session.start));
        self.notes.push(session.notes.clone());
    }

    fn finish(mut self) -> AggregatedRecord {
        let mut seen = HashSet::new();
        self.dates.retain(|d| seen.insert(d.clone()));

        // Every builder is created together with its first session.
        let average_hours = self.total_hours / self.dates.len() as f64;

        AggregatedRecord {
            group: self.group,
            total_hours: self.total_hours,
            dates: self.dates,
            notes: self.notes,
            average_hours,
        }
    }
}

/// Reconstruct sessions from `records` (newest first) and total them per
/// `period`, keyed by each session's check-in. Groups come back newest first.
pub fn aggregate(
    records: &[Record],
    period: Period,
    now: &DateTime<FixedOffset>,
) -> AppResult<Vec<AggregatedRecord>> {
    let timeline = build_timeline(records, now)?;

    let mut groups: BTreeMap<String, GroupBuilder> = BTreeMap::new();
    for session in &timeline.sessions {
        let key = period.label(&session.start);
        groups
            .entry(key.clone())
            .or_insert_with(|| GroupBuilder::new(key))
            .merge(session);
    }

    Ok(groups.into_values().rev().map(GroupBuilder::finish).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::event_type::EventType;
    use crate::utils::time::parse_timestamp;
    use chrono::TimeDelta;

    fn rec(ts: &str, kind: EventType) -> Record {
        Record::new(parse_timestamp(ts).unwrap(), kind, "")
    }

    /// One session per (check-in, check-out) pair, listed oldest first.
    fn ledger(pairs: &[(&str, &str)]) -> Vec<Record> {
        let mut out = Vec::new();
        for (start, end) in pairs.iter().rev() {
            out.push(rec(end, EventType::Out));
            out.push(rec(start, EventType::In));
        }
        out
    }

    fn now() -> DateTime<FixedOffset> {
        parse_timestamp("2026-06-01T00:00:00Z").unwrap()
    }

    #[test]
    fn single_session_by_day() {
        let t = now();
        let records = vec![
            Record::new(t - TimeDelta::hours(2), EventType::Out, ""),
            Record::new(t - TimeDelta::hours(4), EventType::In, ""),
        ];

        let agg = aggregate(&records, Period::Day, &t).unwrap();

        assert_eq!(agg.len(), 1);
        assert_eq!(agg[0].total_hours, 2.0);
        assert_eq!(agg[0].average_hours, 2.0);
        assert_eq!(agg[0].active_days(), 1);
    }

    #[test]
    fn empty_records_fail() {
        assert!(matches!(
            aggregate(&[], Period::Day, &now()),
            Err(AppError::NoRecords)
        ));
    }

    #[test]
    fn days_are_deduplicated_within_a_week() {
        let records = ledger(&[
            ("2025-01-06T08:00:00Z", "2025-01-06T12:00:00Z"),
            ("2025-01-06T13:00:00Z", "2025-01-06T17:00:00Z"),
            ("2025-01-07T09:00:00Z", "2025-01-07T16:00:00Z"),
        ]);

        let agg = aggregate(&records, Period::Week, &now()).unwrap();

        assert_eq!(agg.len(), 1);
        assert_eq!(agg[0].group, "2025-W02");
        assert_eq!(agg[0].total_hours, 15.0);
        // sessions are merged newest first
        assert_eq!(agg[0].dates, vec!["2025-01-07", "2025-01-06"]);
        assert_eq!(agg[0].average_hours, 7.5);
    }

    #[test]
    fn daily_totals_newest_first() {
        let records = ledger(&[
            ("2025-01-06T08:00:00Z", "2025-01-06T18:00:00Z"),
            ("2025-01-07T09:00:00Z", "2025-01-07T15:00:00Z"),
            ("2025-01-08T09:00:00Z", "2025-01-08T17:00:00Z"),
        ]);

        let agg = aggregate(&records, Period::Day, &now()).unwrap();

        let groups: Vec<&str> = agg.iter().map(|a| a.group.as_str()).collect();
        assert_eq!(groups, vec!["2025-01-08", "2025-01-07", "2025-01-06"]);
        let totals: Vec<f64> = agg.iter().map(|a| a.total_hours).collect();
        assert_eq!(totals, vec![8.0, 6.0, 10.0]);
    }

    #[test]
    fn weeks_order_by_iso_year_across_new_year() {
        let records = ledger(&[
            ("2024-12-27T09:00:00Z", "2024-12-27T17:00:00Z"), // 2024-W52
            ("2024-12-30T09:00:00Z", "2024-12-30T17:00:00Z"), // 2025-W01
            ("2025-01-02T09:00:00Z", "2025-01-02T13:00:00Z"), // 2025-W01
            ("2025-01-06T09:00:00Z", "2025-01-06T17:00:00Z"), // 2025-W02
        ]);

        let agg = aggregate(&records, Period::Week, &now()).unwrap();

        let groups: Vec<&str> = agg.iter().map(|a| a.group.as_str()).collect();
        assert_eq!(groups, vec!["2025-W02", "2025-W01", "2024-W52"]);
        assert_eq!(agg[1].total_hours, 12.0);
        assert_eq!(agg[1].dates, vec!["2025-01-02", "2024-12-30"]);
    }

    #[test]
    fn month_and_year_groups() {
        let records = ledger(&[
            ("2024-11-04T09:00:00Z", "2024-11-04T17:00:00Z"),
            ("2024-12-02T09:00:00Z", "2024-12-02T17:00:00Z"),
            ("2025-01-02T09:00:00Z", "2025-01-02T17:00:00Z"),
        ]);

        let months = aggregate(&records, Period::Month, &now()).unwrap();
        assert_eq!(months.len(), 3);
        assert_eq!(months[0].group, "2025-01");

        let years = aggregate(&records, Period::Year, &now()).unwrap();
        assert_eq!(years.len(), 2);
        assert_eq!(years[0].group, "2025");
        assert_eq!(years[1].group, "2024");
        assert_eq!(years[1].total_hours, 16.0);
        assert_eq!(years[1].active_days(), 2);
    }

    #[test]
    fn open_session_counts_until_now() {
        let t = now();
        let records = vec![Record::new(t - TimeDelta::minutes(90), EventType::In, "")];

        let agg = aggregate(&records, Period::Day, &t).unwrap();

        assert_eq!(agg[0].total_hours, 1.5);
    }

    #[test]
    fn only_check_outs_give_no_groups() {
        let records = vec![rec("2025-01-06T17:00:00Z", EventType::Out)];
        assert!(aggregate(&records, Period::Day, &now()).unwrap().is_empty());
    }
}
