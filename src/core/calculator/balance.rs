//! Overtime/undertime of a group against the daily target.

use crate::config::DEFAULT_TARGET_HOURS;
use crate::models::aggregated::AggregatedRecord;

/// Label used when worked hours match the target exactly.
pub const NEUTRAL_LABEL: &str = "00h00m";

/// Expected = target × days with at least one session in the group.
pub fn expected_hours(target_hours: f64, active_days: usize) -> f64 {
    target_hours * active_days as f64
}

pub fn difference(agg: &AggregatedRecord, target_hours: f64) -> f64 {
    agg.total_hours - expected_hours(target_hours, agg.active_days())
}

/// Signed balance using the target as the length of a "day".
///
/// `0.5` → `+0h30m`, `9.0` → `+1d1h`, `-17.5` → `-2d1h30m` (target 8h).
pub fn overtime_label(difference: f64, target_hours: f64) -> String {
    if difference == 0.0 {
        return NEUTRAL_LABEL.to_string();
    }

    let sign = if difference > 0.0 { "+" } else { "-" };
    let abs_diff = difference.abs();

    let target = if target_hours > 0.0 {
        target_hours
    } else {
        DEFAULT_TARGET_HOURS
    };

    if abs_diff < target {
        let (hours, minutes) = split_hours(abs_diff);
        return format!("{sign}{hours}h{minutes:02}m");
    }

    let days = (abs_diff / target).floor() as i64;
    let remaining = abs_diff - days as f64 * target;
    let (hours, minutes) = split_hours(remaining);

    match (hours, minutes) {
        (0, 0) => format!("{sign}{days}d"),
        (h, 0) => format!("{sign}{days}d{h}h"),
        (h, m) => format!("{sign}{days}d{h}h{m:02}m"),
    }
}

/// Whole hours and rounded minutes; 60 minutes carry into the hour.
fn split_hours(value: f64) -> (i64, i64) {
    let mut hours = value.trunc() as i64;
    let mut minutes = ((value - hours as f64) * 60.0).round() as i64;
    if minutes >= 60 {
        hours += minutes / 60;
        minutes %= 60;
    }
    (hours, minutes)
}
