use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ledger::Ledger;
use crate::models::event::{HEADER, Record};
use crate::ui::messages::warning;
use crate::utils::colors::colorize_in_out;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cat { head } = cmd {
        let ledger = Ledger::new(&cfg.file);
        let records = Core::list(&ledger, *head)?;
        if records.is_empty() {
            warning(format!("No records in {}", ledger.path().display()));
        }
        print!("{}", render(&records));
    }
    Ok(())
}

fn render(records: &[Record]) -> String {
    let mut table = Table::new(vec![
        Column::left(HEADER[0], 25),
        Column::left(HEADER[1], 4),
        Column::left(HEADER[2], 0),
    ]);

    for r in records {
        table.add_row(vec![
            r.timestamp_str(),
            colorize_in_out(r.kind.as_str(), r.kind.is_in()),
            r.notes.clone(),
        ]);
    }

    table.render()
}
