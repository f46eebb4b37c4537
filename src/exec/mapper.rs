//! The pooled-executor collaborator contract and the rayon-backed adapter.

use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::pool::Task;

/// A reusable worker abstraction the framework can delegate parallel
/// execution to instead of spawning fresh threads.
///
/// `run_all` executes every task across the mapper's own fixed worker set,
/// potentially interleaved with other callers' tasks, and blocks until all of
/// them have run (or been discarded by a shutdown). Tasks communicate their
/// own results back; the mapper only schedules.
pub trait TaskMapper: Send + Sync {
    /// Execute every task, blocking until all have completed.
    fn run_all(&self, tasks: Vec<Task>);

    /// Release the mapper's workers. Tasks mapped afterwards are discarded.
    fn shutdown(&self);
}

/// [`TaskMapper`] backed by a dedicated rayon thread pool.
pub struct RayonMapper {
    pool: Mutex<Option<Arc<rayon::ThreadPool>>>,
}

impl RayonMapper {
    /// Build a mapper with its own pool of `workers` rayon threads.
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("chunkwise-rayon-{index}"))
            .build()
            .map_err(|e| Error::ThreadSpawn(e.to_string()))?;
        Ok(Self {
            pool: Mutex::new(Some(Arc::new(pool))),
        })
    }
}

impl TaskMapper for RayonMapper {
    fn run_all(&self, tasks: Vec<Task>) {
        let pool = self.pool.lock().unwrap().clone();
        match pool {
            Some(pool) => pool.scope(|scope| {
                for task in tasks {
                    scope.spawn(move |_| task());
                }
            }),
            None => {
                tracing::debug!("mapper already shut down, discarding {} tasks", tasks.len());
            }
        }
    }

    fn shutdown(&self) {
        self.pool.lock().unwrap().take();
    }
}
