use crate::error::CliError;
use crate::git::commit::{self, commit_changes};
use crate::git::remote::{self, RemoteBranch};
use crate::git::repository::{self, RepoContext};

/// The version-control operations the workflow depends on.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl {
    fn fetch_all(&self) -> Result<(), CliError>;
    fn rebase_pull(&self, autostash: bool) -> Result<(), CliError>;
    fn stage_all(&self) -> Result<(), CliError>;
    fn has_staged_changes(&self) -> Result<bool, CliError>;
    fn commit(&self, message: &str) -> Result<(), CliError>;
    fn push(&self) -> Result<(), CliError>;
    fn current_branch(&self) -> Result<String, CliError>;
    fn last_commit_summary(&self) -> Result<String, CliError>;
}

/// Adapter backed by the `git` executable, with libgit2 for read-only queries.
pub struct GitCli {
    git_binary: String,
    context: RepoContext,
    target: Option<RemoteBranch>,
}

impl GitCli {
    pub fn new(git_binary: impl Into<String>, context: RepoContext) -> Self {
        GitCli {
            git_binary: git_binary.into(),
            context,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Option<RemoteBranch>) -> Self {
        self.target = target;
        self
    }
}

impl VersionControl for GitCli {
    fn fetch_all(&self) -> Result<(), CliError> {
        remote::fetch_all(&self.git_binary, self.context.root())
    }

    fn rebase_pull(&self, autostash: bool) -> Result<(), CliError> {
        remote::pull_rebase(
            &self.git_binary,
            self.context.root(),
            autostash,
            self.target.as_ref(),
        )
    }

    fn stage_all(&self) -> Result<(), CliError> {
        commit::stage_all(&self.git_binary, self.context.root())
    }

    fn has_staged_changes(&self) -> Result<bool, CliError> {
        repository::has_staged_changes(&self.context.open()?)
    }

    fn commit(&self, message: &str) -> Result<(), CliError> {
        commit_changes(&self.git_binary, self.context.root(), message)
    }

    fn push(&self) -> Result<(), CliError> {
        remote::push(&self.git_binary, self.context.root(), self.target.as_ref())
    }

    fn current_branch(&self) -> Result<String, CliError> {
        repository::current_branch(&self.context.open()?)
    }

    fn last_commit_summary(&self) -> Result<String, CliError> {
        repository::last_commit_summary(&self.context.open()?)
    }
}
