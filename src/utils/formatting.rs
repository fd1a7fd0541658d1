//! Formatting utilities used for CLI outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ansi escape pattern"));

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// Columns a string occupies on screen, ignoring colour codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Unsigned duration for totals and averages.
///
/// `≤ 0` → `00h00m`, up to 24h → `8h30m`, beyond → `2d03h15m`.
pub fn hours_to_text(total_hours: f64) -> String {
    if total_hours <= 0.0 {
        return "00h00m".to_string();
    }

    let total_minutes = (total_hours * 60.0).round() as i64;

    if total_hours <= 24.0 {
        format!("{}h{:02}m", total_minutes / 60, total_minutes % 60)
    } else {
        let days = total_minutes / (24 * 60);
        let hours = (total_minutes % (24 * 60)) / 60;
        let minutes = total_minutes % 60;
        format!("{}d{:02}h{:02}m", days, hours, minutes)
    }
}
