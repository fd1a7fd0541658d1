use crate::core::calculator::{aggregate, balance};
use crate::errors::AppResult;
use crate::ledger::Ledger;
use crate::models::aggregated::AggregatedRecord;
use crate::models::event::Record;
use crate::models::period::Period;
use crate::utils::formatting::hours_to_text;
use crate::utils::time::now;
use chrono::{DateTime, FixedOffset};

/// One line of a day/week/month/year report.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub group: String,
    pub total: String,
    pub days: usize,
    pub average: String,
    pub balance: String,
    /// Worked minus expected hours, signed.
    pub difference: f64,
}

impl SummaryRow {
    fn from_aggregate(agg: &AggregatedRecord, target_hours: f64) -> Self {
        let difference = balance::difference(agg, target_hours);
        Self {
            group: agg.group.clone(),
            total: hours_to_text(agg.total_hours),
            days: agg.active_days(),
            average: hours_to_text(agg.average_hours),
            balance: balance::overtime_label(difference, target_hours),
            difference,
        }
    }
}

pub struct Core;

impl Core {
    pub fn list(ledger: &Ledger, limit: i64) -> AppResult<Vec<Record>> {
        ledger.read_records(limit)
    }

    pub fn summarize(
        ledger: &Ledger,
        period: Period,
        limit: i64,
        target_hours: f64,
    ) -> AppResult<Vec<SummaryRow>> {
        let records = ledger.read_records(-1)?;
        Self::summarize_records(&records, period, limit, target_hours, &now())
    }

    /// Report rows for the newest `limit` groups; `limit < 1` means all.
    pub fn summarize_records(
        records: &[Record],
        period: Period,
        limit: i64,
        target_hours: f64,
        now: &DateTime<FixedOffset>,
    ) -> AppResult<Vec<SummaryRow>> {
        let groups = aggregate::aggregate(records, period, now)?;

        let head = if limit < 1 {
            groups.len()
        } else {
            groups.len().min(limit as usize)
        };

        Ok(groups
            .iter()
            .take(head)
            .map(|agg| SummaryRow::from_aggregate(agg, target_hours))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::event_type::EventType;
    use crate::utils::time::parse_timestamp;

    fn rec(ts: &str, kind: EventType) -> Record {
        Record::new(parse_timestamp(ts).unwrap(), kind, "")
    }

    fn sample() -> Vec<Record> {
        vec![
            rec("2025-01-08T17:00:00Z", EventType::Out),
            rec("2025-01-08T09:00:00Z", EventType::In),
            rec("2025-01-07T15:00:00Z", EventType::Out),
            rec("2025-01-07T09:00:00Z", EventType::In),
            rec("2025-01-06T18:00:00Z", EventType::Out),
            rec("2025-01-06T08:00:00Z", EventType::In),
        ]
    }

    fn fixed_now() -> DateTime<FixedOffset> {
        parse_timestamp("2025-02-01T00:00:00Z").unwrap()
    }

    #[test]
    fn daily_rows_with_balance() {
        let rows = Core::summarize_records(&sample(), Period::Day, 10, 8.0, &fixed_now()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].group, "2025-01-08");
        assert_eq!(rows[0].balance, "00h00m");
        assert_eq!(rows[1].total, "6h00m");
        assert_eq!(rows[1].balance, "-2h00m");
        assert_eq!(rows[2].balance, "+2h00m");
        assert_eq!(rows[2].difference, 2.0);
    }

    #[test]
    fn weekly_balance_uses_active_days() {
        let rows = Core::summarize_records(&sample(), Period::Week, 10, 8.0, &fixed_now()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, "24h00m");
        assert_eq!(rows[0].days, 3);
        assert_eq!(rows[0].average, "8h00m");
        assert_eq!(rows[0].balance, "00h00m");

        let shorter = Core::summarize_records(&sample(), Period::Week, 10, 7.5, &fixed_now()).unwrap();
        assert_eq!(shorter[0].balance, "+1h30m");
    }

    #[test]
    fn limit_selects_newest_groups() {
        let rows = Core::summarize_records(&sample(), Period::Day, 2, 8.0, &fixed_now()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].group, "2025-01-07");

        let all = Core::summarize_records(&sample(), Period::Day, -1, 8.0, &fixed_now()).unwrap();
        assert_eq!(all.len(), 3);
        let zero = Core::summarize_records(&sample(), Period::Day, 0, 8.0, &fixed_now()).unwrap();
        assert_eq!(zero.len(), 3);
    }

    #[test]
    fn empty_ledger_is_an_error() {
        let err = Core::summarize_records(&[], Period::Month, 10, 8.0, &fixed_now()).unwrap_err();
        assert!(matches!(err, AppError::NoRecords));
    }
}
