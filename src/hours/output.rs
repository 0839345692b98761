use super::changelog::{build_changelog, DayChangelog};
use crate::error::Result;
use crate::model::RepoResult;
use crate::util::format_duration;
use chrono::Duration;
use console::{Style, StyledObject};
use std::io::{self, Write};

pub const NO_REPOS: &str = "(no git repos found)";
pub const NO_COMMITS: &str = "(no commits)";

/// Terminal styling that can be switched off for pipes and tests.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    styled: bool,
}

impl Palette {
    pub fn detect() -> Self {
        Self {
            styled: console::colors_enabled(),
        }
    }

    pub fn plain() -> Self {
        Self { styled: false }
    }

    fn paint<D>(&self, style: Style, value: D) -> StyledObject<D> {
        style.force_styling(self.styled).apply_to(value)
    }
}

pub fn output_json<W: Write>(results: &[RepoResult], out: &mut W) -> Result<()> {
    let encoded = serde_json::to_string_pretty(results)?;
    writeln!(out, "{encoded}")?;
    Ok(())
}

pub fn output_changelog<W: Write>(results: &[RepoResult], out: &mut W, palette: Palette) -> io::Result<()> {
    let days = build_changelog(results);
    if days.is_empty() {
        return writeln!(out, "{NO_COMMITS}");
    }
    for day in &days {
        write_day(day, out, palette)?;
    }
    Ok(())
}

fn write_day<W: Write>(day: &DayChangelog<'_>, out: &mut W, palette: Palette) -> io::Result<()> {
    writeln!(out, "📅 {}\n", palette.paint(Style::new().bold().cyan(), day.day))?;

    for block in &day.blocks {
        write!(out, "  {}", palette.paint(Style::new().bold(), &block.repo_name))?;
        if block.duration > Duration::zero() {
            write!(
                out,
                " {}",
                palette.paint(Style::new().green(), format!("~{}", format_duration(block.duration)))
            )?;
        }
        writeln!(out)?;

        for entry in day.block_entries(block) {
            let commit = entry.commit;
            let time = commit
                .local_clock()
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default();
            writeln!(
                out,
                "    {} {} ({})",
                palette.paint(Style::new().black().bright(), time),
                palette.paint(Style::new().yellow(), &commit.message),
                commit.short_hash()
            )?;
        }
        writeln!(out)?;
    }

    if !day.spans.is_empty() {
        let summary: Vec<String> = day
            .spans
            .iter()
            .map(|span| format!("{} {}", span.repo_name, format_duration(span.duration())))
            .collect();
        writeln!(
            out,
            "  {} {}\n",
            palette.paint(Style::new().magenta(), "⏱"),
            palette.paint(Style::new().dim(), summary.join(", "))
        )?;
    }
    Ok(())
}
