use crate::errors::AppError;
use chrono::{DateTime, Datelike, FixedOffset};
use std::fmt;
use std::str::FromStr;

/// Calendar bucket used to group sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Group key for a timestamp. All keys are zero-padded and fixed-width,
    /// so lexicographic order is chronological order.
    ///
    /// Weeks are labelled with their ISO year, which differs from the calendar
    /// year for the first and last days of some years.
    pub fn label(&self, ts: &DateTime<FixedOffset>) -> String {
        match self {
            Period::Day => ts.format("%Y-%m-%d").to_string(),
            Period::Week => {
                let week = ts.iso_week();
                format!("{:04}-W{:02}", week.year(), week.week())
            }
            Period::Month => ts.format("%Y-%m").to_string(),
            Period::Year => ts.format("%Y").to_string(),
        }
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(AppError::UnsupportedPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
