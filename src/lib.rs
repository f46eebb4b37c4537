//! # Chunkwise - Chunked divide-and-merge parallel execution
//!
//! Chunkwise is an in-process parallel-computation primitive: it partitions a
//! sequence into contiguous chunks, runs one worker per chunk, and
//! deterministically merges per-chunk results into the same answer a
//! sequential computation would produce.
//!
//! - **Deterministic merging**: results are re-assembled by chunk index, so
//!   completion order never affects the output (first-minimum tie-breaks,
//!   concatenation order)
//! - **Two execution backends behind one interface**: ephemeral threads per
//!   call, or a shared reusable mapper
//! - **Fixed worker pool**: persistent worker threads over a shared queue,
//!   with graceful drain-and-signal shutdown
//! - **Explicit cancellation**: a cloneable token interrupts a call blocked
//!   on worker results
//!
//! ## Quick Start
//!
//! ```
//! use chunkwise::ParallelExecutor;
//!
//! let executor = ParallelExecutor::new();
//!
//! let items = vec![5, 1, 4, 1, 5];
//! let min = executor.minimum(3, &items, |a: &i32, b: &i32| a.cmp(b)).unwrap();
//! assert_eq!(min, 1);
//!
//! let even = executor.filter(2, &[1, 2, 3, 4, 5], |x: &i32| x % 2 == 0).unwrap();
//! assert_eq!(even, vec![2, 4]);
//!
//! let joined = executor.concat(4, &["a", "b", "c"]).unwrap();
//! assert_eq!(joined, "abc");
//! ```
//!
//! ## Pooled execution
//!
//! Instead of spawning fresh threads per call, an executor can delegate to a
//! reusable worker set shared with other callers:
//!
//! ```
//! use std::sync::Arc;
//! use chunkwise::{FixedWorkerPool, ParallelExecutor, PoolMapper};
//!
//! let pool = Arc::new(FixedWorkerPool::new(4).unwrap());
//! let executor = ParallelExecutor::with_mapper(Arc::new(PoolMapper::new(Arc::clone(&pool))));
//!
//! let squares: Vec<i64> = executor.map(4, &[1i64, 2, 3], |x: &i64| x * x).unwrap();
//! assert_eq!(squares, vec![1, 4, 9]);
//!
//! pool.shutdown();
//! ```
//!
//! ## Picking a worker count
//!
//! Entry points take an explicit worker count; [`workers`] calculates one
//! from the machine and configuration:
//!
//! ```
//! use chunkwise::workers::{self, WorkerConfig};
//!
//! let budget = workers::optimal_workers(&WorkerConfig::default());
//! let worker_count = workers::clamp_to_workload(budget, 1000);
//! assert!(worker_count >= 1);
//! ```

pub mod error;
pub mod exec;
pub mod ops;
pub mod partition;
pub mod pool;
pub mod workers;

pub use error::{Error, Result};
pub use exec::{CancelToken, ExecutionStrategy, ParallelExecutor, RayonMapper, TaskMapper};
pub use pool::{FixedWorkerPool, PoolMapper, PoolState, Task};
