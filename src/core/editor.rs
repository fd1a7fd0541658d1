use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::process::Command;
use tracing::debug;

pub struct EditLogic;

impl EditLogic {
    /// Open the ledger in the configured editor and wait for it to exit.
    pub fn open(cfg: &Config) -> AppResult<()> {
        let editor = cfg.editor.as_deref().ok_or_else(|| {
            AppError::Config("no editor configured (set TAKT_EDITOR or EDITOR)".into())
        })?;

        debug!(editor, file = %cfg.file.display(), "launching editor");
        let status = Command::new(editor)
            .arg(&cfg.file)
            .status()
            .map_err(|e| AppError::Editor(format!("{editor}: {e}")))?;

        if !status.success() {
            return Err(AppError::Editor(format!("{editor} exited with {status}")));
        }
        Ok(())
    }
}
