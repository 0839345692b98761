//! Access to git history.
//!
//! The rest of the crate talks to git only through [`GitBackend`], so the
//! aggregation pipeline can be exercised without spawning processes.

pub mod constants;
mod executor;
pub mod parser;

pub use executor::GitCli;
pub use parser::parse_log;

use crate::model::{Commit, DateRange};
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when running git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("git is not installed or not in PATH")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// The three history queries the timesheet needs from a repository.
pub trait GitBackend {
    /// Configured `user.email`, or `None` when unset or blank.
    fn user_email(&self, repo: &Path) -> Result<Option<String>, GitError>;

    /// Short names of all local branches. An empty list is valid.
    fn branches(&self, repo: &Path) -> Result<Vec<String>, GitError>;

    /// Commits reachable from `branch` whose date falls inside `range`,
    /// using git's own `--since`/`--until` semantics.
    fn commits(&self, repo: &Path, branch: &str, range: &DateRange) -> Result<Vec<Commit>, GitError>;
}
