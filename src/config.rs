use crate::cli::HoursArgs;
use crate::error::{Result, WorklogError};
use crate::model::{parse_date, DateRange};
use chrono::NaiveDate;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

/// Everything the `hours` pipeline needs, fixed before any repository is
/// touched.
#[derive(Debug, Clone)]
pub struct HoursConfig {
    pub root: PathBuf,
    pub range: DateRange,
    pub depth: usize,
    pub jobs: usize,
    pub format: OutputFormat,
}

impl HoursConfig {
    /// Resolve CLI arguments against `today`, asking `source` for the start
    /// date when `--from` was not given.
    pub fn from_args(args: HoursArgs, today: NaiveDate, source: &dyn StartDateSource) -> Result<Self> {
        let from = match args.from.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => source.obtain_start_date(today)?,
        };
        if from > today {
            return Err(WorklogError::InvalidDate(format!(
                "from date {} is in the future, pick today or earlier",
                from.format("%Y-%m-%d")
            )));
        }
        let to = match args.to.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => today,
        };

        Ok(Self {
            root: args.root.unwrap_or_else(|| PathBuf::from(".")),
            range: DateRange::new(from, to)?,
            depth: args.depth,
            jobs: args.jobs.max(1),
            format: if args.json { OutputFormat::Json } else { OutputFormat::Pretty },
        })
    }
}

/// Where the start date comes from when `--from` is missing.
pub trait StartDateSource {
    /// Returns a date no later than `today`, or [`WorklogError::Cancelled`].
    fn obtain_start_date(&self, today: NaiveDate) -> Result<NaiveDate>;
}

/// Used when no terminal is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireFlag;

impl StartDateSource for RequireFlag {
    fn obtain_start_date(&self, _today: NaiveDate) -> Result<NaiveDate> {
        Err(WorklogError::InvalidDate(
            "--from YYYY-MM-DD is required when not running in a terminal".to_string(),
        ))
    }
}

/// Interactive picker when both stdin and stderr are terminals.
pub fn start_date_source() -> Box<dyn StartDateSource> {
    if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
        Box::new(crate::tui::InteractivePrompt)
    } else {
        Box::new(RequireFlag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(NaiveDate);

    impl StartDateSource for Fixed {
        fn obtain_start_date(&self, _today: NaiveDate) -> Result<NaiveDate> {
            Ok(self.0)
        }
    }

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn args() -> HoursArgs {
        HoursArgs {
            root: None,
            from: None,
            to: None,
            json: false,
            depth: 5,
            jobs: 8,
        }
    }

    #[test]
    fn missing_from_asks_the_source_and_to_defaults_to_today() {
        let cfg = HoursConfig::from_args(args(), date("2025-02-07"), &Fixed(date("2025-02-01"))).unwrap();
        assert_eq!(cfg.range.from, date("2025-02-01"));
        assert_eq!(cfg.range.to, date("2025-02-07"));
        assert_eq!(cfg.root, PathBuf::from("."));
        assert_eq!(cfg.format, OutputFormat::Pretty);
    }

    #[test]
    fn explicit_flags_win() {
        let mut a = args();
        a.from = Some("2025-01-01".into());
        a.to = Some("2025-01-31".into());
        a.json = true;
        a.jobs = 0;
        let cfg = HoursConfig::from_args(a, date("2025-02-07"), &RequireFlag).unwrap();
        assert_eq!(cfg.range.to, date("2025-01-31"));
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.jobs, 1);
    }

    #[test]
    fn rejects_inverted_and_future_ranges() {
        let mut a = args();
        a.from = Some("2025-02-05".into());
        a.to = Some("2025-02-01".into());
        assert!(HoursConfig::from_args(a, date("2025-02-07"), &RequireFlag).is_err());

        let mut b = args();
        b.from = Some("2025-03-01".into());
        assert!(HoursConfig::from_args(b, date("2025-02-07"), &RequireFlag).is_err());
    }

    #[test]
    fn non_interactive_source_requires_the_flag() {
        let err = HoursConfig::from_args(args(), date("2025-02-07"), &RequireFlag).unwrap_err();
        assert!(err.to_string().contains("--from"));
    }
}
