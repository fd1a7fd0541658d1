use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A four-digit calendar year, e.g. `"2025"`.
pub fn parse_year(s: &str) -> AppResult<i32> {
    let s = s.trim();
    if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidYear(s.to_string()));
    }
    s.parse::<i32>()
        .map_err(|_| AppError::InvalidYear(s.to_string()))
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();

    let Some(mut d) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return v;
    };
    while d.year() == year {
        v.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    v
}
