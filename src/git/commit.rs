use crate::config::{AUTO_COMMIT_PREFIX, TIMESTAMP_FORMAT};
use crate::error::CliError;
use crate::git::remote::run_git;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::Path;

/// Stage additions, modifications and deletions across the whole working tree.
pub fn stage_all(git_binary: &str, root: &Path) -> Result<(), CliError> {
    run_git(git_binary, root, &["add", "-A"])
        .map(|_| ())
        .map_err(CliError::StageFailed)
}

/// Commit the index with `git commit`, so hooks and signing apply.
pub fn commit_changes(git_binary: &str, root: &Path, message: &str) -> Result<(), CliError> {
    run_git(git_binary, root, &["commit", "-m", message])
        .map(|_| ())
        .map_err(CliError::CommitFailed)
}

/// Message used when the caller supplied none.
pub fn auto_commit_message<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{} {}", AUTO_COMMIT_PREFIX, now.format(TIMESTAMP_FORMAT))
}

/// Join the message words given on the command line.
///
/// Returns `None` when nothing but whitespace was supplied, so the caller
/// falls back to [`auto_commit_message`].
pub fn format_commit_message(words: &[String]) -> Option<String> {
    let message = words.join(" ");
    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}
