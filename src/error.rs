use crate::git::GitError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorklogError>;

#[derive(Error, Debug)]
pub enum WorklogError {
    #[error("error walking path {}: {source}", root.display())]
    Discovery {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },
    #[error("git user.email not set for repo {}", repo.display())]
    NoIdentityConfigured {
        repo: PathBuf,
        #[source]
        source: Option<GitError>,
    },
    #[error("unable to list branches for repo {}: {source}", repo.display())]
    BranchEnumerationFailed {
        repo: PathBuf,
        #[source]
        source: GitError,
    },
    #[error("error fetching commits for branch {branch} in repo {}: {source}", repo.display())]
    FetchFailed {
        repo: PathBuf,
        branch: String,
        #[source]
        source: GitError,
    },
    #[error("error encoding JSON: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Cancelled.")]
    Cancelled,
    #[error("lsof error: {0}")]
    Lsof(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorklogError {
    /// Errors that must abort the whole run as soon as they are seen,
    /// instead of waiting for the remaining repositories.
    pub fn is_immediate(&self) -> bool {
        matches!(self, WorklogError::NoIdentityConfigured { .. })
    }
}
