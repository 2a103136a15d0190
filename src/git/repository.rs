use crate::error::CliError;
use git2::{Repository, StatusOptions, StatusShow};
use std::path::{Path, PathBuf};

/// Resolved location of the working tree every step operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    root: PathBuf,
}

impl RepoContext {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn open(&self) -> Result<Repository, CliError> {
        Repository::open(&self.root).map_err(CliError::from)
    }
}

/// Find the repository containing `start` and resolve its top-level directory.
pub fn discover_repository(start: &Path) -> Result<RepoContext, CliError> {
    log::debug!("Starting repository discovery from: {start:?}");

    let repo = Repository::discover(start).map_err(|e| {
        log::debug!("Failed to discover repository from {start:?}: {e}");
        CliError::NotARepository(start.display().to_string())
    })?;

    let root = repo
        .workdir()
        .and_then(|p| p.canonicalize().ok())
        .ok_or_else(|| {
            CliError::NotARepository(format!("{} (bare repository)", repo.path().display()))
        })?;

    log::debug!("Repository root resolved to: {root:?}");
    Ok(RepoContext { root })
}

pub fn has_staged_changes(repo: &Repository) -> Result<bool, CliError> {
    let mut opts = StatusOptions::new();
    opts.include_ignored(false)
        .include_untracked(false)
        .include_unmodified(false)
        .exclude_submodules(true)
        .show(StatusShow::Index);

    let statuses = repo.statuses(Some(&mut opts))?;

    let staged = statuses.iter().any(|entry| {
        let status = entry.status();
        status.is_index_new()
            || status.is_index_modified()
            || status.is_index_deleted()
            || status.is_index_renamed()
            || status.is_index_typechange()
    });

    Ok(staged)
}

pub fn current_branch(repo: &Repository) -> Result<String, CliError> {
    repo.head()?
        .shorthand()
        .map(String::from)
        .ok_or_else(|| CliError::Generic("Failed to get current branch".to_string()))
}

/// Abbreviated id and subject of `HEAD`, as `git log -1 --oneline` prints it.
pub fn last_commit_summary(repo: &Repository) -> Result<String, CliError> {
    let commit = repo.head()?.peel_to_commit()?;
    let short_id = commit.as_object().short_id()?;
    let short_id = short_id.as_str().unwrap_or_default().to_string();
    let summary = commit.summary().unwrap_or_default();
    Ok(format!("{} {}", short_id, summary))
}
