use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::{Grid, GridLogic, Tier};
use crate::errors::AppResult;
use crate::ledger::Ledger;
use crate::utils::date::{parse_year, today};
use ansi_term::{Colour, Style};
use chrono::Datelike;

const PAD: &str = "    ";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid { year, legend } = cmd {
        let year = match year {
            Some(y) => parse_year(y)?,
            None => today().year(),
        };

        let ledger = Ledger::new(&cfg.file);
        let grid = GridLogic::load(&ledger, year)?;
        print!("{}", render(&grid, *legend));
    }
    Ok(())
}

fn render(grid: &Grid, legend: bool) -> String {
    let blue = Colour::Blue;
    let mut out = String::new();

    out.push_str(&format!(
        "{PAD}{}\n",
        blue.bold().paint(format!("{:<10} W  M  T  W  T  F  S  S", "Date"))
    ));
    out.push_str(&format!("{PAD}{}\n", blue.paint("═".repeat(34))));

    let mut current_month = None;
    for week in &grid.weeks {
        let month = (week.first_day.year(), week.first_day.month());
        if current_month.is_some_and(|m| m != month) {
            out.push_str(&format!("{PAD}{}\n", blue.paint("─".repeat(34))));
        }
        current_month = Some(month);

        let cells: Vec<String> = week
            .days
            .iter()
            .map(|d| match d {
                Some(tier) => tier.colour().paint(tier.symbol()).to_string(),
                None => " ".to_string(),
            })
            .collect();

        out.push_str(&format!(
            "{PAD}{} {:02} {}\n",
            Style::new().bold().paint(week.first_day.format("%Y-%m-%d").to_string()),
            week.week,
            cells.join("  ")
        ));
    }

    if let Some(rate) = grid.activity_rate() {
        out.push_str(&format!("\n{PAD}{}\n", Style::new().bold().paint("Summary:")));
        out.push_str(&format!("{PAD}├─ Total tracked days: {}\n", grid.tracked_days()));
        out.push_str(&format!("{PAD}├─ Active work days: {}\n", grid.active_days()));
        out.push_str(&format!("{PAD}└─ Activity rate: {:.1}%\n", rate));
    }

    if legend {
        out.push_str(&format!("\n{PAD}{}\n", Style::new().bold().paint("Legend:")));
        for (i, tier) in Tier::ALL.iter().enumerate() {
            let branch = if i + 1 == Tier::ALL.len() { "└─" } else { "├─" };
            out.push_str(&format!(
                "{PAD}{branch} {} {}\n",
                tier.colour().paint(tier.symbol()),
                tier.legend()
            ));
        }
    }

    out
}
