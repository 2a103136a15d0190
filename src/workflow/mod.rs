//! The sync, stage, commit and push sequence.
//!
//! [`Workflow::run`] drives a [`VersionControl`] through the fixed steps and
//! returns a [`Report`] on success. Every step is fatal on error except the
//! push, which is retried according to the injected [`RetryPolicy`].

mod retry;

pub use retry::RetryPolicy;

use chrono::Local;
use log::debug;

use crate::error::CliError;
use crate::git::{self, VersionControl};
use crate::logger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// Fetch and rebase-pull before staging, and again between push attempts.
    pub sync_before_push: bool,
    /// Log a failed commit as a warning and carry on to the push.
    pub ignore_commit_failure: bool,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        WorkflowOptions {
            sync_before_push: true,
            ignore_commit_failure: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub branch: String,
    pub last_commit: String,
    pub committed: bool,
    pub push_attempts: u32,
}

pub struct Workflow<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
    options: WorkflowOptions,
    retry: RetryPolicy,
}

impl<'a, V: VersionControl + ?Sized> Workflow<'a, V> {
    pub fn new(vcs: &'a V, options: WorkflowOptions, retry: RetryPolicy) -> Self {
        Workflow {
            vcs,
            options,
            retry,
        }
    }

    /// Run the whole sequence. `message` is the caller's commit message; when
    /// absent a timestamped one is generated at commit time.
    pub fn run(&self, message: Option<&str>) -> Result<Report, CliError> {
        if self.options.sync_before_push {
            self.sync()?;
        } else {
            debug!("Remote synchronization disabled");
        }

        logger::progress("Staging all changes");
        self.vcs.stage_all()?;

        let committed = self.commit(message)?;
        let push_attempts = self.push_with_retry()?;

        let report = Report {
            branch: self.vcs.current_branch()?,
            last_commit: self.vcs.last_commit_summary()?,
            committed,
            push_attempts,
        };
        logger::success(&format!("Pushed {}", report.branch));
        Ok(report)
    }

    fn sync(&self) -> Result<(), CliError> {
        logger::progress("Fetching from remotes");
        self.vcs.fetch_all()?;
        logger::progress("Rebasing onto remote changes");
        self.vcs.rebase_pull(true)
    }

    fn commit(&self, message: Option<&str>) -> Result<bool, CliError> {
        if !self.vcs.has_staged_changes()? {
            logger::info("Nothing to commit, skipping straight to push");
            return Ok(false);
        }

        let message = match message {
            Some(message) => message.to_string(),
            None => git::auto_commit_message(&Local::now()),
        };
        debug!("Commit message: {}", message);

        match self.vcs.commit(&message) {
            Ok(()) => {
                logger::success(&format!("Committed: {}", message));
                Ok(true)
            }
            Err(e) if self.options.ignore_commit_failure => {
                logger::warning(&format!("Ignoring commit failure: {}", e));
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Push until it succeeds or the retry budget runs out. Returns the
    /// number of attempts made.
    fn push_with_retry(&self) -> Result<u32, CliError> {
        let max_attempts = self.retry.max_attempts();
        let mut retries_left = max_attempts;

        loop {
            let attempt = max_attempts - retries_left + 1;
            logger::progress(&format!("Pushing (attempt {}/{})", attempt, max_attempts));

            match self.vcs.push() {
                Ok(()) => return Ok(attempt),
                Err(e) => {
                    retries_left -= 1;
                    logger::warning(&format!("Push failed: {}", e));
                    if retries_left == 0 {
                        logger::error("No push attempts left, the commit stays local");
                        return Err(CliError::PushFailed {
                            attempts: max_attempts,
                        });
                    }

                    if self.options.sync_before_push {
                        logger::progress("Rebasing onto remote changes before retrying");
                        self.vcs.rebase_pull(true)?;
                    }
                    self.retry.wait();
                }
            }
        }
    }
}
