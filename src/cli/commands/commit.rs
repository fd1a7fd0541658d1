use crate::config::Config;
use crate::core::vcs::{VcsLogic, locate};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// `git add`, `git commit` and `git push` the ledger, stopping at the first failure.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (root, relative) = locate(&cfg.file)?;

    VcsLogic::add(&root, &relative)?;
    success("Records added");

    VcsLogic::commit(&root)?;
    success("Records committed");

    VcsLogic::push(&root)?;
    success("Records pushed");

    Ok(())
}
