use crate::cli::Command;
use crate::error::CliError;
use crate::git::{self, GitCli, RemoteBranch};
use crate::logger;
use crate::workflow::{RetryPolicy, Workflow, WorkflowOptions};
use log::{debug, info};
use std::env;
use std::time::Duration;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct PushCommand {
    /// Commit message; defaults to "auto commit <timestamp>"
    #[structopt(name = "MESSAGE")]
    message: Vec<String>,

    #[structopt(long, help = "Skip fetch and rebase-pull, only stage, commit and push")]
    no_sync: bool,

    #[structopt(
        long,
        requires = "branch",
        help = "Remote to pull from and push to instead of the upstream"
    )]
    remote: Option<String>,

    #[structopt(long, requires = "remote", help = "Remote branch to pull from and push to")]
    branch: Option<String>,

    #[structopt(long, default_value = "3", help = "Number of push attempts")]
    retries: u32,

    #[structopt(
        long,
        default_value = "2",
        help = "Seconds to wait between push attempts"
    )]
    retry_delay: u64,

    #[structopt(long, help = "Warn about a failed commit and push anyway")]
    ignore_commit_failure: bool,

    #[structopt(
        long,
        env = "AUTOPUSH_GIT",
        default_value = "git",
        help = "git executable to run"
    )]
    git: String,
}

impl PushCommand {
    fn remote_branch(&self) -> Option<RemoteBranch> {
        match (&self.remote, &self.branch) {
            (Some(remote), Some(branch)) => Some(RemoteBranch {
                remote: remote.clone(),
                branch: branch.clone(),
            }),
            _ => None,
        }
    }

    fn workflow_options(&self) -> WorkflowOptions {
        WorkflowOptions {
            sync_before_push: !self.no_sync,
            ignore_commit_failure: self.ignore_commit_failure,
        }
    }

    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retries, Duration::from_secs(self.retry_delay))
    }
}

impl Command for PushCommand {
    fn execute(&self) -> Result<(), CliError> {
        git::check_git_available(&self.git)?;

        let context = git::discover_repository(&env::current_dir()?)?;
        info!("Repository root: {}", context.root().display());

        let vcs = GitCli::new(&self.git, context).with_target(self.remote_branch());
        debug!("Pushing to {:?}", self.remote_branch());

        let workflow = Workflow::new(&vcs, self.workflow_options(), self.retry_policy());
        let message = git::format_commit_message(&self.message);
        let report = workflow.run(message.as_deref())?;

        println!("Branch: {}", report.branch);
        println!("Latest commit: {}", report.last_commit);
        logger::done("Sync, commit and push complete");
        Ok(())
    }
}
