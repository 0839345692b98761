use crate::error::{Result, WorklogError};
use crate::git::GitBackend;
use crate::model::{Commit, DateRange, RepoResult};
use crate::util::repo_display_name;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Collect the local user's commits from every branch of one repository.
///
/// Fails on a missing identity, a branch listing error, or any branch whose
/// history cannot be read; a repository is never partially reported.
pub fn aggregate_repo<B: GitBackend + ?Sized>(
    backend: &B,
    repo: &Path,
    range: &DateRange,
) -> Result<RepoResult> {
    let email = match backend.user_email(repo) {
        Ok(Some(email)) => email,
        Ok(None) => {
            return Err(WorklogError::NoIdentityConfigured {
                repo: repo.to_path_buf(),
                source: None,
            })
        }
        Err(e) => {
            return Err(WorklogError::NoIdentityConfigured {
                repo: repo.to_path_buf(),
                source: Some(e),
            })
        }
    };

    let branches = backend
        .branches(repo)
        .map_err(|source| WorklogError::BranchEnumerationFailed {
            repo: repo.to_path_buf(),
            source,
        })?;

    let mut by_hash: HashMap<String, Commit> = HashMap::new();
    for branch in &branches {
        let commits = backend
            .commits(repo, branch, range)
            .map_err(|source| WorklogError::FetchFailed {
                repo: repo.to_path_buf(),
                branch: branch.clone(),
                source,
            })?;

        for commit in commits {
            if commit.authored_by(&email) {
                by_hash.entry(commit.hash.clone()).or_insert(commit);
            }
        }
    }

    tracing::debug!(
        repo = %repo.display(),
        branches = branches.len(),
        commits = by_hash.len(),
        "aggregated repository"
    );

    Ok(RepoResult {
        path: repo.to_string_lossy().into_owned(),
        name: repo_display_name(repo),
        commits_by_date: bucket_by_day(by_hash.into_values()),
    })
}

/// Group commits by day key, each day ascending by timestamp. Commits
/// whose date cannot be keyed are dropped with a warning.
pub fn bucket_by_day(commits: impl IntoIterator<Item = Commit>) -> BTreeMap<String, Vec<Commit>> {
    let mut days: BTreeMap<String, Vec<Commit>> = BTreeMap::new();

    for commit in commits {
        match commit.day_key() {
            Some(day) => days.entry(day).or_default().push(commit),
            None => tracing::warn!(
                hash = %commit.hash,
                date = %commit.date,
                "could not parse commit date, skipping"
            ),
        }
    }

    // Fixed-width ISO-8601 strings sort chronologically
    for list in days.values_mut() {
        list.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.hash.cmp(&b.hash)));
    }
    days
}
