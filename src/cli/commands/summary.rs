use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, SummaryRow};
use crate::errors::AppResult;
use crate::ledger::Ledger;
use crate::models::period::Period;
use crate::utils::colors::colorize_balance;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

/// Handle `day`, `week`, `month` and `year`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (period, head) = match cmd {
        Commands::Day { head } => (Period::Day, *head),
        Commands::Week { head } => (Period::Week, *head),
        Commands::Month { head } => (Period::Month, *head),
        Commands::Year { head } => (Period::Year, *head),
        _ => return Ok(()),
    };

    let ledger = Ledger::new(&cfg.file);
    let rows = Core::summarize(&ledger, period, head, cfg.target_hours)?;
    print!("{}", render(period, &rows));

    Ok(())
}

fn render(period: Period, rows: &[SummaryRow]) -> String {
    // wider total column for week, month, year
    let (date_w, total_w) = match period {
        Period::Day => (10, 6),
        _ => (8, 10),
    };

    let mut table = Table::new(vec![
        Column::left(&bold("Date"), date_w),
        Column::right(&bold("Total"), total_w),
        Column::right(&bold("Days"), 4),
        Column::right(&bold("Avg"), 6),
        Column::right(&bold("Balance"), 8),
    ]);

    for row in rows {
        table.add_row(vec![
            row.group.clone(),
            row.total.clone(),
            row.days.to_string(),
            row.average.clone(),
            colorize_balance(&row.balance, row.difference),
        ]);
    }

    table.render()
}
