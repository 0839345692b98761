//! Parser for the `git log` wire format defined in [`super::constants`].

use super::constants::{FIELD_SEPARATOR, LOG_FIELDS, RECORD_SEPARATOR};
use crate::model::Commit;

/// Split raw `git log` output into commits. Partial records are dropped.
pub fn parse_log(raw: &str) -> Vec<Commit> {
    raw.split(RECORD_SEPARATOR)
        .map(str::trim)
        .filter(|rec| !rec.is_empty())
        .filter_map(parse_record)
        .collect()
}

fn parse_record(record: &str) -> Option<Commit> {
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    if fields.len() < LOG_FIELDS {
        return None;
    }
    Some(Commit {
        hash: fields[0].to_string(),
        author_name: fields[1].to_string(),
        author_email: fields[2].to_string(),
        date: fields[3].to_string(),
        message: fields[4].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> String {
        format!("{}\x1e", fields.join("\x1f"))
    }

    #[test]
    fn parses_records_separated_by_newlines() {
        let raw = format!(
            "{}\n{}",
            record(&["aaa111", "Ann", "ann@example.com", "2025-02-03T09:00:00+00:00", "fix bug"]),
            record(&["bbb222", "Ann", "ann@example.com", "2025-02-03T09:45:00+00:00", "add test"]),
        );
        let commits = parse_log(&raw);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, "aaa111");
        assert_eq!(commits[1].message, "add test");
        assert_eq!(commits[1].date, "2025-02-03T09:45:00+00:00");
    }

    #[test]
    fn drops_partial_records() {
        let raw = format!(
            "{}{}",
            record(&["aaa111", "Ann", "ann@example.com", "2025-02-03T09:00:00+00:00"]),
            record(&["bbb222", "Ann", "ann@example.com", "2025-02-03T09:45:00+00:00", "add test"]),
        );
        let commits = parse_log(&raw);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash, "bbb222");
    }

    #[test]
    fn keeps_subject_punctuation() {
        let raw = record(&["ccc333", "Bo", "bo@example.com", "2025-02-03T10:00:00Z", "fix: a | b, c; \"d\""]);
        assert_eq!(parse_log(&raw)[0].message, "fix: a | b, c; \"d\"");
    }

    #[test]
    fn empty_output_has_no_commits() {
        assert!(parse_log("").is_empty());
        assert!(parse_log("\n").is_empty());
    }
}
