//! Fixed-size worker pool shared by every reduction of a run.
//!
//! The pool is built once from the run configuration and passed explicitly
//! to the reduction driver; nothing reaches for rayon's global pool.

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::constants::FALLBACK_THREADS;
use crate::error::QuadError;

/// Number of processing units available to this process.
#[must_use]
pub fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(FALLBACK_THREADS)
}

/// A rayon thread pool with a fixed number of workers.
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// Build a pool with `threads` workers.
    pub fn new(threads: usize) -> Result<Self, QuadError> {
        if threads == 0 {
            return Err(QuadError::Config("worker count must be at least 1".into()));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("quadcalc-worker-{i}"))
            .build()
            .map_err(|e| QuadError::ThreadPool(e.to_string()))?;
        debug!(threads, "Worker pool created");
        Ok(Self { pool })
    }

    /// Build a pool sized to the host's processing units.
    pub fn with_available_parallelism() -> Result<Self, QuadError> {
        Self::new(available_threads())
    }

    /// Number of workers.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `op` inside the pool; parallel iterators used by `op` execute on its workers.
    pub fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("threads", &self.threads())
            .finish()
    }
}
