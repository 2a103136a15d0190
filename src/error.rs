use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Git error: {0}")]
    GitError(#[from] git2::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("git executable '{0}' not found or not runnable")]
    GitNotFound(String),

    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Failed to synchronize with remote, resolve conflicts manually: {0}")]
    SyncFailed(String),

    #[error("Staging failed: {0}")]
    StageFailed(String),

    #[error("Commit failed: {0}")]
    CommitFailed(String),

    #[error("git push rejected: {0}")]
    PushRejected(String),

    #[error("Push failed after {attempts} attempts")]
    PushFailed { attempts: u32 },

    #[error("{0}")]
    Generic(String),
}
