//! Fixed-size worker pool.
//!
//! A bounded set of persistent worker threads consuming a shared task queue
//! for the pool's whole lifetime. The queue is the only structure shared
//! between workers and it is only touched through its channel endpoints: a
//! single mutual-exclusion discipline, simplicity over throughput.
//!
//! Shutdown is fire-and-forget: the queue is drained (pending tasks are
//! silently dropped), every worker is signalled, and the call returns without
//! joining. A worker mid-task finishes that task and exits at its next queue
//! wait. Tasks submitted after shutdown are never executed and raise no
//! error; submitters that need completion guarantees attach their own
//! outcome cells, as [`PoolMapper`](crate::pool::PoolMapper) does.

mod mapper;

pub use mapper::PoolMapper;

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam::channel::{Receiver, Sender, unbounded};
use crossbeam::select;

use crate::error::{Error, Result};

/// A queued unit of work. Result communication is the task's own business.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Pool lifecycle: accepting work, draining, or done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    Running,
    ShuttingDown,
    Terminated,
}

const RUNNING: u8 = 0;
const SHUTTING_DOWN: u8 = 1;
const TERMINATED: u8 = 2;

/// Fixed-size pool of persistent worker threads over a shared queue.
pub struct FixedWorkerPool {
    task_tx: Sender<Task>,
    task_rx: Receiver<Task>,
    kill_tx: Mutex<Option<Sender<()>>>,
    state: Arc<AtomicU8>,
    workers: Vec<JoinHandle<()>>,
}

impl FixedWorkerPool {
    /// Start a pool with exactly `workers` persistent threads.
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }

        let (task_tx, task_rx) = unbounded::<Task>();
        let (kill_tx, kill_rx) = unbounded::<()>();
        let state = Arc::new(AtomicU8::new(RUNNING));

        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            let tasks = task_rx.clone();
            let kill = kill_rx.clone();
            let state = Arc::clone(&state);
            let handle = thread::Builder::new()
                .name(format!("chunkwise-pool-{id}"))
                .spawn(move || worker_loop(id, tasks, kill, state))
                .map_err(|e| Error::ThreadSpawn(e.to_string()))?;
            handles.push(handle);
        }

        Ok(Self {
            task_tx,
            task_rx,
            kill_tx: Mutex::new(Some(kill_tx)),
            state,
            workers: handles,
        })
    }

    /// Queue a task for execution. Never blocks the submitter.
    ///
    /// After shutdown has begun the task is silently dropped.
    pub fn submit<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.state.load(Ordering::SeqCst) != RUNNING {
            tracing::debug!("pool is shut down, dropping submitted task");
            return;
        }
        if self.task_tx.send(Box::new(task)).is_err() {
            tracing::debug!("pool queue disconnected, dropping submitted task");
        }
    }

    /// Drain the queue and signal every worker to exit.
    ///
    /// Pending tasks are dropped without running. The call does not wait for
    /// worker threads to terminate; sequencing a clean process exit after
    /// shutdown is the caller's responsibility.
    pub fn shutdown(&self) {
        if self
            .state
            .compare_exchange(RUNNING, SHUTTING_DOWN, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        let mut dropped = 0usize;
        while self.task_rx.try_recv().is_ok() {
            dropped += 1;
        }
        if dropped > 0 {
            tracing::debug!("discarded {dropped} queued tasks at shutdown");
        }

        // Severing the kill channel wakes every worker blocked on the queue.
        self.kill_tx.lock().unwrap().take();
        self.state.store(TERMINATED, Ordering::SeqCst);
    }

    pub fn state(&self) -> PoolState {
        match self.state.load(Ordering::SeqCst) {
            RUNNING => PoolState::Running,
            SHUTTING_DOWN => PoolState::ShuttingDown,
            _ => PoolState::Terminated,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }
}

fn worker_loop(id: usize, tasks: Receiver<Task>, kill: Receiver<()>, state: Arc<AtomicU8>) {
    tracing::debug!("pool worker {id} started");
    loop {
        select! {
            recv(tasks) -> task => match task {
                Ok(task) => {
                    if state.load(Ordering::SeqCst) != RUNNING {
                        // Dequeued after shutdown began; drop without running.
                        continue;
                    }
                    if std::panic::catch_unwind(std::panic::AssertUnwindSafe(task)).is_err() {
                        tracing::warn!("pool worker {id}: task panicked");
                    }
                }
                Err(_) => break,
            },
            recv(kill) -> _ => break,
        }
    }
    tracing::debug!("pool worker {id} exiting");
}
