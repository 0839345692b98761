use crate::config::{start_date_source, HoursConfig};
use crate::hours::DEFAULT_JOBS;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "worklog")]
#[command(about = "Recover the hours you swear you worked but forgot to log")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct HoursArgs {
    #[arg(help = "Directory to search for git repositories [default: .]")]
    pub root: Option<PathBuf>,

    #[arg(long, help = "Start date (YYYY-MM-DD); prompts interactively when omitted")]
    pub from: Option<String>,

    #[arg(long, help = "End date (YYYY-MM-DD, defaults to today)")]
    pub to: Option<String>,

    #[arg(long, help = "Output JSON instead of pretty format")]
    pub json: bool,

    #[arg(
        long,
        default_value_t = 5,
        help = "Maximum directory traversal depth when searching for git repos"
    )]
    pub depth: usize,

    #[arg(
        long,
        env = "WORKLOG_JOBS",
        default_value_t = DEFAULT_JOBS,
        help = "Number of repositories scanned in parallel"
    )]
    pub jobs: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild a per-day changelog of your commits across every repository
    #[command(alias = "oops-i-forgot-to-log-my-hours")]
    Hours(HoursArgs),
    /// Show process and file descriptors count
    Lsof,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Hours(args) => {
                let today = chrono::Local::now().date_naive();
                let source = start_date_source();
                let config = HoursConfig::from_args(args, today, source.as_ref())?;
                crate::hours::run(&config)
            }
            Commands::Lsof => crate::lsof::exec(),
        }
    }
}
