use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::path::Path;

const LOCAL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `YYYY-MM-DD` of the commit in its own offset. Falls back to the first ten
/// characters when the timestamp is not strict RFC 3339 but still starts
/// with a date.
pub fn day_key(iso: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }
    let prefix = iso.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()?;
    Some(prefix.to_string())
}

/// Wall-clock time of the commit with the offset dropped, so 14:18Z and
/// 14:18+01:00 compare equal.
pub fn local_clock(iso: &str) -> Option<NaiveDateTime> {
    let local = iso.get(..19)?;
    NaiveDateTime::parse_from_str(local, LOCAL_CLOCK_FORMAT).ok()
}

pub fn short_hash(hash: &str) -> &str {
    hash.get(..7).unwrap_or(hash)
}

/// Last path segment, resolving `.` and friends through the filesystem.
pub fn repo_display_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    std::fs::canonicalize(path)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Compact duration like `45m` or `2h05m`.
pub fn format_duration(duration: chrono::Duration) -> String {
    let minutes = duration.num_minutes();
    if minutes < 60 {
        format!("{minutes}m")
    } else {
        format!("{}h{:02}m", minutes / 60, minutes % 60)
    }
}
