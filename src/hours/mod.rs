//! The `hours` command: commits by the local user, grouped per day and
//! per repository.

pub mod aggregate;
pub mod changelog;
pub mod exec;
pub mod fleet;
pub mod output;

pub use aggregate::{aggregate_repo, bucket_by_day};
pub use changelog::{build_changelog, Block, ChangelogEntry, DayChangelog, ProjectSpan};
pub use exec::{exec, run};
pub use fleet::{collect_repos, DEFAULT_JOBS};
pub use output::{output_changelog, output_json, Palette};
