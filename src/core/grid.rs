//! Yearly activity grid: one row per ISO week, one cell per weekday.

use crate::core::calculator::aggregate::aggregate;
use crate::errors::{AppError, AppResult};
use crate::ledger::Ledger;
use crate::models::aggregated::AggregatedRecord;
use crate::models::period::Period;
use crate::utils::date::all_days_of_year;
use crate::utils::time::{DATE_FORMAT, now};
use ansi_term::Colour;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Hours thresholds between tiers.
pub const LOW_HOURS: f64 = 1.0;
pub const MEDIUM_HOURS: f64 = 4.0;
pub const HIGH_HOURS: f64 = 8.0;
pub const VERY_HIGH_HOURS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Minimal,
    Light,
    Normal,
    Heavy,
    VeryHeavy,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Minimal,
        Tier::Light,
        Tier::Normal,
        Tier::Heavy,
        Tier::VeryHeavy,
    ];

    pub fn from_hours(hours: f64) -> Self {
        if hours < LOW_HOURS {
            Tier::Minimal
        } else if hours < MEDIUM_HOURS {
            Tier::Light
        } else if hours < HIGH_HOURS {
            Tier::Normal
        } else if hours < VERY_HIGH_HOURS {
            Tier::Heavy
        } else {
            Tier::VeryHeavy
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Tier::Minimal => "·",
            Tier::Light => "▪",
            Tier::Normal => "▮",
            Tier::Heavy => "◆",
            Tier::VeryHeavy => "█",
        }
    }

    pub fn colour(&self) -> Colour {
        match self {
            Tier::Minimal => Colour::Fixed(245),
            Tier::Light => Colour::Yellow,
            Tier::Normal => Colour::Green,
            Tier::Heavy => Colour::Fixed(208),
            Tier::VeryHeavy => Colour::Red,
        }
    }

    pub fn legend(&self) -> &'static str {
        match self {
            Tier::Minimal => "0h00m - 1h00m   (Minimal work)",
            Tier::Light => "1h00m - 4h00m   (Light work)",
            Tier::Normal => "4h00m - 8h00m   (Normal work)",
            Tier::Heavy => "8h00m - 12h00m  (Heavy work)",
            Tier::VeryHeavy => "12h00m or more  (Very heavy work)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridWeek {
    pub week: u32,
    /// First day of this week that falls inside the year.
    pub first_day: NaiveDate,
    /// Monday..Sunday; `None` for days outside the year or after the last record.
    pub days: [Option<Tier>; 7],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub weeks: Vec<GridWeek>,
}

impl Grid {
    pub fn tracked_days(&self) -> usize {
        self.cells().count()
    }

    /// Days above the minimal tier.
    pub fn active_days(&self) -> usize {
        self.cells().filter(|t| **t != Tier::Minimal).count()
    }

    pub fn activity_rate(&self) -> Option<f64> {
        let total = self.tracked_days();
        (total > 0).then(|| self.active_days() as f64 / total as f64 * 100.0)
    }

    fn cells(&self) -> impl Iterator<Item = &Tier> {
        self.weeks.iter().flat_map(|w| w.days.iter().flatten())
    }
}

/// Lay out `year` up to `last_day` using per-day totals.
///
/// Days whose ISO week belongs to another year (early January, late
/// December) are left out; days without sessions count as minimal.
pub fn build_grid(year: i32, last_day: NaiveDate, daily: &[AggregatedRecord]) -> Grid {
    let hours_by_day: HashMap<&str, f64> = daily
        .iter()
        .map(|a| (a.group.as_str(), a.total_hours))
        .collect();

    let mut weeks: Vec<GridWeek> = Vec::new();

    for day in all_days_of_year(year) {
        if day > last_day {
            break;
        }
        let iso = day.iso_week();
        if iso.year() != year {
            continue;
        }

        let key = day.format(DATE_FORMAT).to_string();
        let tier = Tier::from_hours(hours_by_day.get(key.as_str()).copied().unwrap_or(0.0));

        if weeks.last().is_none_or(|w| w.week != iso.week()) {
            weeks.push(GridWeek {
                week: iso.week(),
                first_day: day,
                days: [None; 7],
            });
        }
        if let Some(row) = weeks.last_mut() {
            row.days[day.weekday().num_days_from_monday() as usize] = Some(tier);
        }
    }

    Grid { weeks }
}

pub struct GridLogic;

impl GridLogic {
    pub fn load(ledger: &Ledger, year: i32) -> AppResult<Grid> {
        let newest = ledger.read_records(1)?;
        let last_day = newest
            .first()
            .map(|r| r.timestamp.date_naive())
            .ok_or(AppError::NoRecords)?;

        let records = ledger.read_records(-1)?;
        let daily = aggregate(&records, Period::Day, &now())?;

        Ok(build_grid(year, last_day, &daily))
    }
}
