//! Session reconstruction.
//!
//! All repositories' day buckets are merged into one timeline per day and
//! cut into blocks: runs of consecutive commits in the same repository. A
//! block's first-to-last commit span is the estimated length of that work
//! session. Times are compared on the commit's own wall clock with the
//! offset dropped, so the estimate is a heuristic, not elapsed time.

use crate::model::{Commit, RepoResult};
use chrono::{Duration, NaiveDateTime};
use std::collections::BTreeMap;

/// One commit placed on the global timeline.
#[derive(Debug, Clone, Copy)]
pub struct ChangelogEntry<'a> {
    pub day: &'a str,
    pub repo_name: &'a str,
    pub repo_path: &'a str,
    pub commit: &'a Commit,
}

/// Contiguous run of same-repository entries, `start..=end` into
/// [`DayChangelog::entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
    pub repo_name: String,
    pub duration: Duration,
}

/// First-to-last commit span of one repository over a whole day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpan {
    pub repo_name: String,
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

impl ProjectSpan {
    pub fn duration(&self) -> Duration {
        self.last - self.first
    }
}

#[derive(Debug, Clone)]
pub struct DayChangelog<'a> {
    pub day: &'a str,
    pub entries: Vec<ChangelogEntry<'a>>,
    pub blocks: Vec<Block>,
    pub spans: Vec<ProjectSpan>,
}

impl<'a> DayChangelog<'a> {
    pub fn block_entries(&self, block: &Block) -> &[ChangelogEntry<'a>] {
        &self.entries[block.start..=block.end]
    }
}

/// Merge every repository into a day-ordered changelog.
pub fn build_changelog(results: &[RepoResult]) -> Vec<DayChangelog<'_>> {
    let mut by_day: BTreeMap<&str, Vec<ChangelogEntry<'_>>> = BTreeMap::new();

    for repo in results {
        let (repo_name, repo_path) = (repo.name.as_str(), repo.path.as_str());
        for (day, commits) in &repo.commits_by_date {
            let day = day.as_str();
            by_day.entry(day).or_default().extend(commits.iter().map(move |commit| ChangelogEntry {
                day,
                repo_name,
                repo_path,
                commit,
            }));
        }
    }

    by_day
        .into_iter()
        .map(|(day, mut entries)| {
            sort_entries(&mut entries);
            let blocks = split_blocks(&entries);
            let spans = project_spans(&entries);
            DayChangelog { day, entries, blocks, spans }
        })
        .collect()
}

/// Timestamp, then repository name, then hash.
pub fn sort_entries(entries: &mut [ChangelogEntry<'_>]) {
    entries.sort_by(|a, b| {
        a.commit
            .date
            .cmp(&b.commit.date)
            .then_with(|| a.repo_name.cmp(b.repo_name))
            .then_with(|| a.commit.hash.cmp(&b.commit.hash))
    });
}

/// Cut sorted entries wherever the repository name changes.
pub fn split_blocks(entries: &[ChangelogEntry<'_>]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut start = 0;

    for i in 1..=entries.len() {
        if i == entries.len() || entries[i].repo_name != entries[start].repo_name {
            if let Some(first) = entries.get(start) {
                blocks.push(Block {
                    start,
                    end: i - 1,
                    repo_name: first.repo_name.to_string(),
                    duration: session_duration(first.commit, entries[i - 1].commit),
                });
            }
            start = i;
        }
    }
    blocks
}

/// |last - first| on the local clock; zero if either time is unreadable.
pub fn session_duration(first: &Commit, last: &Commit) -> Duration {
    match (first.local_clock(), last.local_clock()) {
        (Some(start), Some(end)) => {
            let d = end - start;
            if d < Duration::zero() {
                -d
            } else {
                d
            }
        }
        _ => Duration::zero(),
    }
}

fn project_spans(entries: &[ChangelogEntry<'_>]) -> Vec<ProjectSpan> {
    let mut spans: Vec<ProjectSpan> = Vec::new();

    for entry in entries {
        let Some(at) = entry.commit.local_clock() else {
            continue;
        };
        match spans.iter_mut().find(|s| s.repo_name == entry.repo_name) {
            Some(span) => {
                span.first = span.first.min(at);
                span.last = span.last.max(at);
            }
            None => spans.push(ProjectSpan {
                repo_name: entry.repo_name.to_string(),
                first: at,
                last: at,
            }),
        }
    }
    spans
}
