//! Execution strategies: ephemeral threads vs. a pooled mapper.
//!
//! Both strategies satisfy the same contract: run N chunk jobs, hand back N
//! partial results index-aligned with the jobs. Completion order never leaks
//! into result order; that alignment is the framework's central invariant.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::thread;

use crossbeam::channel::unbounded;
use crossbeam::select;

use crate::error::{Error, Result};
use crate::exec::cancel::CancelToken;
use crate::exec::mapper::TaskMapper;
use crate::pool::Task;

/// A chunk computation, boxed with everything it needs.
pub(crate) type ChunkJob<P> = Box<dyn FnOnce() -> P + Send + 'static>;

/// How a call executes its chunk jobs. Chosen at executor construction; does
/// not change observable results, only concurrency and resource usage.
pub enum ExecutionStrategy {
    /// One dedicated thread per chunk, joined at a collect barrier.
    Ephemeral,
    /// Delegate to an external reusable mapper.
    Pooled(Arc<dyn TaskMapper>),
}

impl ExecutionStrategy {
    pub(crate) fn run<P: Send + 'static>(
        &self,
        jobs: Vec<ChunkJob<P>>,
        cancel: &CancelToken,
    ) -> Result<Vec<P>> {
        if jobs.is_empty() {
            return Ok(Vec::new());
        }
        if cancel.is_cancelled() {
            return Err(Error::Interrupted);
        }
        match self {
            Self::Ephemeral => run_ephemeral(jobs, cancel),
            Self::Pooled(mapper) => run_pooled(mapper.as_ref(), jobs),
        }
    }
}

impl fmt::Debug for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ephemeral => f.write_str("Ephemeral"),
            Self::Pooled(_) => f.write_str("Pooled"),
        }
    }
}

/// Spawn one thread per job and collect `(index, result)` messages until all
/// have arrived.
///
/// A fired cancel token fails the call immediately; threads still running are
/// left to finish on their own (they own snapshots of their chunk, so nothing
/// dangles). A panicked job fails the whole call with the chunk's index.
fn run_ephemeral<P: Send + 'static>(
    jobs: Vec<ChunkJob<P>>,
    cancel: &CancelToken,
) -> Result<Vec<P>> {
    let total = jobs.len();
    let (result_tx, result_rx) = unbounded::<(usize, thread::Result<P>)>();

    tracing::debug!("spawning {total} chunk threads");
    for (index, job) in jobs.into_iter().enumerate() {
        let result_tx = result_tx.clone();
        thread::Builder::new()
            .name(format!("chunkwise-chunk-{index}"))
            .spawn(move || {
                let outcome = panic::catch_unwind(AssertUnwindSafe(job));
                let _ = result_tx.send((index, outcome));
            })
            .map_err(|e| Error::ThreadSpawn(e.to_string()))?;
    }
    drop(result_tx);

    let mut slots: Vec<Option<P>> = Vec::with_capacity(total);
    slots.resize_with(total, || None);
    let mut received = 0;

    while received < total {
        select! {
            recv(result_rx) -> message => match message {
                Ok((index, Ok(partial))) => {
                    slots[index] = Some(partial);
                    received += 1;
                }
                Ok((index, Err(_))) => {
                    tracing::debug!("chunk thread {index} panicked, failing call");
                    return Err(Error::TaskPanicked(index));
                }
                // Every sender is gone but results are missing.
                Err(_) => return Err(Error::TaskLost),
            },
            recv(cancel.receiver()) -> _ => {
                tracing::debug!("cancelled while waiting for {} of {total} chunks", total - received);
                return Err(Error::Interrupted);
            }
        }
    }

    slots
        .into_iter()
        .map(|slot| slot.ok_or(Error::TaskLost))
        .collect()
}

/// Wrap each job to record its outcome into an indexed slot, hand everything
/// to the mapper, then read the slots back in chunk order.
fn run_pooled<P: Send + 'static>(mapper: &dyn TaskMapper, jobs: Vec<ChunkJob<P>>) -> Result<Vec<P>> {
    let slots: Vec<Arc<Mutex<Option<thread::Result<P>>>>> =
        (0..jobs.len()).map(|_| Arc::new(Mutex::new(None))).collect();

    let tasks: Vec<Task> = jobs
        .into_iter()
        .zip(slots.iter())
        .map(|(job, slot)| {
            let slot = Arc::clone(slot);
            Box::new(move || {
                let outcome = panic::catch_unwind(AssertUnwindSafe(job));
                *slot.lock().unwrap() = Some(outcome);
            }) as Task
        })
        .collect();

    tracing::debug!("dispatching {} chunk tasks to mapper", slots.len());
    mapper.run_all(tasks);

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| match slot.lock().unwrap().take() {
            Some(Ok(partial)) => Ok(partial),
            Some(Err(_)) => Err(Error::TaskPanicked(index)),
            None => Err(Error::TaskLost),
        })
        .collect()
}
