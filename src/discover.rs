use crate::error::{Result, WorklogError};
use ignore::{DirEntry, WalkBuilder};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

const GIT_DIR: &str = ".git";

/// Find every directory under `root` that holds a `.git` directory no deeper
/// than `max_depth` path segments below `root`.
///
/// Hidden and ignored directories are searched too, and `.git` directories
/// themselves are never descended into.
pub fn find_repos(root: &Path, max_depth: usize) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .max_depth(Some(max_depth))
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.depth() == 0 || !inside_git_dir(entry))
        .build();

    let mut seen = HashSet::new();
    let mut repos = Vec::new();

    for entry in walker {
        let entry = entry.map_err(|source| WorklogError::Discovery {
            root: root.to_path_buf(),
            source,
        })?;

        if !is_git_dir(&entry) {
            continue;
        }
        if let Some(repo) = entry.path().parent() {
            if seen.insert(repo.to_path_buf()) {
                tracing::debug!(repo = %repo.display(), "found repository");
                repos.push(repo.to_path_buf());
            }
        }
    }

    Ok(repos)
}

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.file_name() == OsStr::new(GIT_DIR)
        && entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
}

fn inside_git_dir(entry: &DirEntry) -> bool {
    entry
        .path()
        .parent()
        .and_then(Path::file_name)
        .map(|name| name == OsStr::new(GIT_DIR))
        .unwrap_or(false)
}
