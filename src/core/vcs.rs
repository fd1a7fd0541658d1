use crate::errors::{AppError, AppResult};
use crate::utils::path::find_git_root;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

pub const COMMIT_MESSAGE: &str = "Automatic commit from takt";

/// The ledger's repository root and the ledger path relative to it.
pub fn locate(file: &Path) -> AppResult<(PathBuf, PathBuf)> {
    let absolute = std::path::absolute(file)?;
    let dir = absolute
        .parent()
        .ok_or_else(|| AppError::Vcs(format!("{} has no parent directory", file.display())))?;

    let root = find_git_root(dir).ok_or_else(|| AppError::Vcs("not in a git repository".into()))?;
    let relative = absolute
        .strip_prefix(&root)
        .map(Path::to_path_buf)
        .map_err(|e| AppError::Vcs(e.to_string()))?;

    Ok((root, relative))
}

pub struct VcsLogic;

impl VcsLogic {
    pub fn add(root: &Path, relative: &Path) -> AppResult<()> {
        let rel = relative.to_string_lossy();
        run_git(root, &["add", rel.as_ref()])
    }

    pub fn commit(root: &Path) -> AppResult<()> {
        run_git(root, &["commit", "-m", COMMIT_MESSAGE])
    }

    pub fn push(root: &Path) -> AppResult<()> {
        run_git(root, &["push"])
    }
}

/// Run `git -C <root> <args>`. Exit status 1 ("nothing to commit") is not an error.
fn run_git(root: &Path, args: &[&str]) -> AppResult<()> {
    debug!(root = %root.display(), ?args, "git");
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(args)
        .output()
        .map_err(|e| AppError::Vcs(format!("could not run git: {e}")))?;

    match output.status.code() {
        Some(0) | Some(1) => Ok(()),
        _ => Err(AppError::Vcs(format!(
            "git {} failed: {}",
            args.first().copied().unwrap_or_default(),
            String::from_utf8_lossy(&output.stderr).trim()
        ))),
    }
}
