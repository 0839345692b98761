use super::aggregate::aggregate_repo;
use crate::error::{Result, WorklogError};
use crate::git::GitBackend;
use crate::model::{DateRange, RepoResult};
use crossbeam_channel::bounded;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Repositories processed at the same time unless configured otherwise.
pub const DEFAULT_JOBS: usize = 8;

/// Run [`aggregate_repo`] over every repository with at most `jobs`
/// repositories in flight.
///
/// Returns only after every worker has exited. Results come back in the
/// order of `repos`. On failure the first error in `repos` order wins,
/// except that a missing identity always wins and stops workers from
/// picking up further repositories.
pub fn collect_repos<B: GitBackend + Sync + ?Sized>(
    backend: &B,
    repos: &[PathBuf],
    range: &DateRange,
    jobs: usize,
    progress: &ProgressBar,
) -> Result<Vec<RepoResult>> {
    if repos.is_empty() {
        return Ok(Vec::new());
    }

    let workers = jobs.clamp(1, repos.len());
    let abort = AtomicBool::new(false);
    let (job_tx, job_rx) = bounded::<usize>(repos.len());
    let (tx, rx) = bounded::<(usize, Result<RepoResult>)>(repos.len());
    for idx in 0..repos.len() {
        // capacity covers every index
        let _ = job_tx.send(idx);
    }
    drop(job_tx);

    thread::scope(|s| {
        for _ in 0..workers {
            let (queue, tx, abort) = (job_rx.clone(), tx.clone(), &abort);
            s.spawn(move || {
                for idx in queue.iter() {
                    if abort.load(Ordering::SeqCst) {
                        break;
                    }
                    let outcome = aggregate_repo(backend, &repos[idx], range);
                    if matches!(&outcome, Err(e) if e.is_immediate()) {
                        abort.store(true, Ordering::SeqCst);
                    }
                    progress.inc(1);
                    if tx.send((idx, outcome)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);
    });

    let mut slots: Vec<Option<RepoResult>> = (0..repos.len()).map(|_| None).collect();
    let mut errors: Vec<(usize, WorklogError)> = Vec::new();
    for (idx, outcome) in rx.iter() {
        match outcome {
            Ok(result) => slots[idx] = Some(result),
            Err(e) => errors.push((idx, e)),
        }
    }

    if !errors.is_empty() {
        errors.sort_by_key(|(idx, _)| *idx);
        let pick = errors.iter().position(|(_, e)| e.is_immediate()).unwrap_or(0);
        return Err(errors.swap_remove(pick).1);
    }

    Ok(slots.into_iter().flatten().collect())
}
