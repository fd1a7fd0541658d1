use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::check::CheckLogic;
use crate::errors::AppResult;
use crate::ledger::Ledger;
use crate::ui::messages::success;
use crate::utils::time::now;

/// Check in or out, whichever follows the newest event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { note } = cmd {
        let ledger = Ledger::new(&cfg.file);
        let record = CheckLogic::apply(&ledger, note.as_deref().unwrap_or(""), &now())?;
        success(format!("Check {} at {}", record.kind, record.timestamp_str()));
    }

    Ok(())
}
