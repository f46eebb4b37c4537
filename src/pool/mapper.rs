//! [`TaskMapper`] adapter over a shared [`FixedWorkerPool`].

use std::sync::Arc;

use crossbeam::channel::unbounded;

use crate::exec::TaskMapper;
use crate::pool::{FixedWorkerPool, Task};

/// Runs mapped tasks on a shared [`FixedWorkerPool`].
///
/// The pool's `submit` is fire-and-forget, so each task is wrapped with a
/// completion guard: a channel sender the task drops when it finishes. The
/// barrier waits for the channel to disconnect, which also happens when the
/// pool discards a task at shutdown. `run_all` never hangs on work that will
/// never run; the missing result surfaces to the framework as a lost task.
pub struct PoolMapper {
    pool: Arc<FixedWorkerPool>,
}

impl PoolMapper {
    pub fn new(pool: Arc<FixedWorkerPool>) -> Self {
        Self { pool }
    }
}

impl TaskMapper for PoolMapper {
    fn run_all(&self, tasks: Vec<Task>) {
        let (done_tx, done_rx) = unbounded::<()>();
        for task in tasks {
            let guard = done_tx.clone();
            self.pool.submit(move || {
                task();
                drop(guard);
            });
        }
        drop(done_tx);

        // Disconnects once every guard is dropped, run or not.
        while done_rx.recv().is_ok() {}
    }

    fn shutdown(&self) {
        self.pool.shutdown();
    }
}
