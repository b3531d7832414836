use std::{num::NonZeroUsize, thread};

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Result;

/// Number of execution units available on this host (at least 1).
pub fn default_workers() -> usize {
    thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(1)
}

/// Resolve the worker count for one scoring call.
///
/// `0` falls back to [`default_workers`]; the result is clamped to the
/// number of items so no worker starts without work, but never below 1.
pub fn resolve_workers(requested: usize, items: usize) -> usize {
    let workers = if requested == 0 { default_workers() } else { requested };
    workers.min(items).max(1)
}

/// Build a dedicated pool with exactly `workers` threads.
pub fn build_pool(workers: usize) -> Result<ThreadPool> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("tagger-worker-{i}"))
        .build()?;
    Ok(pool)
}
