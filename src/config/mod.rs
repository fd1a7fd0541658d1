use crate::utils::path::expand_tilde;
use regex::Regex;
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::debug;

pub const FILE_ENV: &str = "TAKT_FILE";
pub const TARGET_HOURS_ENV: &str = "TAKT_TARGET_HOURS";
pub const EDITOR_ENV: &str = "TAKT_EDITOR";

pub const DEFAULT_FILE: &str = "~/takt.csv";
pub const DEFAULT_TARGET_HOURS: f64 = 8.0;

static CLOCK_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d+)$").expect("clock target pattern"));

/// Resolved settings, built once at startup and passed to every command.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub file: PathBuf,
    pub target_hours: f64,
    pub editor: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Missing or invalid values
    /// fall back to their defaults; loading never fails.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let file = non_empty(FILE_ENV)
            .map(|p| expand_tilde(&p))
            .unwrap_or_else(|| expand_tilde(DEFAULT_FILE));

        let target_hours = parse_target_hours(non_empty(TARGET_HOURS_ENV).as_deref());

        let editor = non_empty(EDITOR_ENV)
            .or_else(|| non_empty("EDITOR"))
            .or_else(|| non_empty("VISUAL"));

        Self {
            file,
            target_hours,
            editor,
        }
    }
}

/// Daily target in decimal hours, from `"7.5"` or `"7:30"`.
///
/// Anything unparsable, a minute part outside `0..60`, or a non-positive
/// value yields [`DEFAULT_TARGET_HOURS`].
pub fn parse_target_hours(value: Option<&str>) -> f64 {
    let Some(raw) = value.map(str::trim) else {
        return DEFAULT_TARGET_HOURS;
    };

    let parsed = if raw.contains(':') {
        CLOCK_TARGET.captures(raw).and_then(|caps| {
            let hours: u32 = caps[1].parse().ok()?;
            let minutes: u32 = caps[2].parse().ok()?;
            (minutes < 60).then(|| hours as f64 + minutes as f64 / 60.0)
        })
    } else {
        raw.parse::<f64>().ok()
    };

    match parsed {
        Some(hours) if hours.is_finite() && hours > 0.0 => hours,
        _ => {
            debug!(value = raw, "invalid target hours, using default");
            DEFAULT_TARGET_HOURS
        }
    }
}
