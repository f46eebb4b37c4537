//! Typed errors for the execution framework and the worker pool.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the framework entry points and [`FixedWorkerPool`].
///
/// Callers either get a fully merged result or exactly one of these; there is
/// no partial-result mode.
///
/// [`FixedWorkerPool`]: crate::pool::FixedWorkerPool
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Every entry point requires at least one worker.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    /// Minimum/maximum are undefined over an empty sequence.
    #[error("empty input")]
    EmptyInput,

    /// The cancel token fired before all results were collected.
    #[error("interrupted")]
    Interrupted,

    /// A chunk computation panicked. The whole call fails and no partial
    /// results are returned.
    #[error("worker task {0} panicked")]
    TaskPanicked(usize),

    /// A task was discarded before it could run, e.g. by a mapper that was
    /// shut down underneath the call.
    #[error("worker task result was lost before completion")]
    TaskLost,

    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker thread: {0}")]
    ThreadSpawn(String),
}
