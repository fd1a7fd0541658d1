use crate::config::Config;
use crate::core::editor::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    EditLogic::open(cfg)?;
    info(format!("Ledger saved: {}", cfg.file.display()));
    Ok(())
}
