//! git command executor
//!
//! Runs git as a child process per query and captures its output.

use std::path::Path;
use std::process::Command;

use super::constants::{self, commands, errors, flags, keys, refs};
use super::parser::parse_log;
use super::{GitBackend, GitError};
use crate::model::{Commit, DateRange};

/// [`GitBackend`] backed by the `git` executable on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    /// Run `git -C <repo> <args>` and return stdout.
    pub fn run(&self, repo: &Path, args: &[&str]) -> Result<String, GitError> {
        let output = Command::new(constants::GIT_COMMAND)
            .arg(flags::REPO_PATH)
            .arg(repo)
            .args(args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::NotFound
                } else {
                    GitError::Io(e)
                }
            })?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.to_lowercase().contains(errors::NOT_A_REPO) {
            return Err(GitError::NotARepository);
        }
        Err(GitError::CommandFailed {
            stderr,
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

impl GitBackend for GitCli {
    fn user_email(&self, repo: &Path) -> Result<Option<String>, GitError> {
        match self.run(repo, &[commands::CONFIG, keys::USER_EMAIL]) {
            Ok(out) => {
                let email = out.trim();
                Ok((!email.is_empty()).then(|| email.to_string()))
            }
            // `git config <key>` exits with 1 when the key is missing
            Err(GitError::CommandFailed { exit_code: 1, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn branches(&self, repo: &Path) -> Result<Vec<String>, GitError> {
        let out = self.run(
            repo,
            &[commands::FOR_EACH_REF, flags::SHORT_REFNAME, refs::LOCAL_BRANCHES],
        )?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn commits(&self, repo: &Path, branch: &str, range: &DateRange) -> Result<Vec<Commit>, GitError> {
        let since = range.since_arg();
        let until = range.until_arg();
        let out = self.run(
            repo,
            &[
                commands::LOG,
                flags::NO_COLOR,
                constants::LOG_FORMAT,
                &since,
                &until,
                branch,
                flags::END_OF_REVISIONS,
            ],
        )?;
        Ok(parse_log(&out))
    }
}
