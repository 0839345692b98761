use crate::error::{Result, WorklogError};
use crate::util::{day_key, local_clock, short_hash};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One commit as reported by `git log`. `date` is the author date exactly
/// as git printed it (`%aI`), offset included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub author_name: String,
    pub author_email: String,
    pub date: String,
    pub message: String,
}

impl Commit {
    pub fn day_key(&self) -> Option<String> {
        day_key(&self.date)
    }

    pub fn local_clock(&self) -> Option<NaiveDateTime> {
        local_clock(&self.date)
    }

    pub fn short_hash(&self) -> &str {
        short_hash(&self.hash)
    }

    pub fn authored_by(&self, email: &str) -> bool {
        self.author_email.to_lowercase() == email.to_lowercase()
    }
}

/// Everything one repository contributed to the timesheet, keyed by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoResult {
    pub path: String,
    pub name: String,
    pub commits_by_date: BTreeMap<String, Vec<Commit>>,
}

impl RepoResult {
    pub fn commit_count(&self) -> usize {
        self.commits_by_date.values().map(Vec::len).sum()
    }
}

/// Calendar range handed to `git log --since/--until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(WorklogError::InvalidDate(format!(
                "Invalid range: from ({}) is after to ({})",
                from.format(DATE_FORMAT),
                to.format(DATE_FORMAT)
            )));
        }
        Ok(Self { from, to })
    }

    pub fn since_arg(&self) -> String {
        format!("--since={}", self.from.format(DATE_FORMAT))
    }

    pub fn until_arg(&self) -> String {
        format!("--until={}", self.to.format(DATE_FORMAT))
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        WorklogError::InvalidDate(format!("\"{}\" is not a valid date. Try YYYY-MM-DD.", input.trim()))
    })
}
