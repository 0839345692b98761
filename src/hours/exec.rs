use super::fleet::collect_repos;
use super::output::{output_changelog, output_json, Palette, NO_REPOS};
use crate::config::{HoursConfig, OutputFormat};
use crate::discover::find_repos;
use crate::git::GitBackend;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};

/// Discover repositories under the configured root, aggregate them, and
/// write the timesheet to `out`.
pub fn exec<B, W>(config: &HoursConfig, backend: &B, out: &mut W) -> anyhow::Result<()>
where
    B: GitBackend + Sync + ?Sized,
    W: Write,
{
    let repos = find_repos(&config.root, config.depth)?;
    if repos.is_empty() {
        writeln!(out, "{NO_REPOS}")?;
        return Ok(());
    }

    tracing::debug!(
        repos = repos.len(),
        from = %config.range.from,
        to = %config.range.to,
        "collecting commits"
    );

    let pb = progress_bar(repos.len() as u64, config.format);
    let results = collect_repos(backend, &repos, &config.range, config.jobs, &pb);
    pb.finish_and_clear();
    let results = results?;

    match config.format {
        OutputFormat::Json => output_json(&results, out)?,
        OutputFormat::Pretty => output_changelog(&results, out, Palette::detect())
            .context("Failed to write changelog")?,
    }
    out.flush()?;
    Ok(())
}

fn progress_bar(len: u64, format: OutputFormat) -> ProgressBar {
    if format == OutputFormat::Json || !console::Term::stderr().is_term() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} scanning repositories {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

/// Entry point used by the CLI: real git, stdout.
pub fn run(config: &HoursConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    exec(config, &crate::git::GitCli::new(), &mut out)
}
