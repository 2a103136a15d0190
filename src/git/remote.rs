//! Operations delegated to the `git` executable.
//!
//! Everything that writes to the repository (fetch, rebase-pull, staging,
//! commit, push) goes through the command line tool, so credential helpers,
//! ssh configuration, hooks, signing and filter drivers behave the same way
//! they do for the user's own `git` invocations.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use log::debug;

use crate::error::CliError;

/// Remote and branch to pull from and push to instead of the upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBranch {
    pub remote: String,
    pub branch: String,
}

/// Verify that `git_binary` can be executed, returning its version string.
pub fn check_git_available(git_binary: &str) -> Result<String, CliError> {
    let output = Command::new(git_binary)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            debug!("Failed to spawn {git_binary}: {e}");
            CliError::GitNotFound(git_binary.to_string())
        })?;

    if !output.status.success() {
        return Err(CliError::GitNotFound(git_binary.to_string()));
    }

    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!("Using {version}");
    Ok(version)
}

pub fn fetch_all(git_binary: &str, root: &Path) -> Result<(), CliError> {
    run_git(git_binary, root, &["fetch", "--all", "--prune"])
        .map(|_| ())
        .map_err(CliError::SyncFailed)
}

pub fn pull_rebase(
    git_binary: &str,
    root: &Path,
    autostash: bool,
    target: Option<&RemoteBranch>,
) -> Result<(), CliError> {
    let mut args = vec!["pull", "--rebase"];
    if autostash {
        args.push("--autostash");
    }
    if let Some(target) = target {
        args.push(&target.remote);
        args.push(&target.branch);
    }

    run_git(git_binary, root, &args)
        .map(|_| ())
        .map_err(CliError::SyncFailed)
}

pub fn push(git_binary: &str, root: &Path, target: Option<&RemoteBranch>) -> Result<(), CliError> {
    let mut args = vec!["push"];
    if let Some(target) = target {
        args.push(&target.remote);
        args.push(&target.branch);
    }

    run_git(git_binary, root, &args)
        .map(|_| ())
        .map_err(CliError::PushRejected)
}

/// Run git inside `root`. A non-zero exit is returned as git's own message.
pub(super) fn run_git(git_binary: &str, root: &Path, args: &[&str]) -> Result<Output, String> {
    debug!("Running {} {} in {:?}", git_binary, args.join(" "), root);

    let output = Command::new(git_binary)
        .args(args)
        .current_dir(root)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| format!("failed to spawn {git_binary}: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let detail = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(format!(
            "git {} exited with {}: {}",
            args.first().copied().unwrap_or_default(),
            output.status,
            detail
        ));
    }

    debug!(
        "git {} succeeded: {}",
        args.first().copied().unwrap_or_default(),
        String::from_utf8_lossy(&output.stdout).trim()
    );
    Ok(output)
}
