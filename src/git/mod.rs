mod commit;
mod remote;
mod repository;
mod vcs;

pub use commit::{auto_commit_message, format_commit_message};
pub use remote::{check_git_available, RemoteBranch};
pub use repository::discover_repository;
pub use vcs::{GitCli, VersionControl};

#[cfg(test)]
pub use vcs::MockVersionControl;
