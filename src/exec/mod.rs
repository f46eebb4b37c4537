//! Divide-and-merge orchestration.
//!
//! [`ParallelExecutor`] is the framework entry point. Every call follows the
//! same path:
//!
//! 1. partition the input into contiguous chunks for the requested worker
//!    count;
//! 2. snapshot the input into an `Arc<[T]>` so chunk jobs own their view and
//!    can outlive an interrupted call;
//! 3. run one job per chunk through the configured [`ExecutionStrategy`];
//! 4. merge the index-ordered partial results with the operation's own merge.
//!
//! The strategy is a construction-time choice: [`ParallelExecutor::new`]
//! spawns ephemeral threads per call, [`ParallelExecutor::with_mapper`]
//! delegates to a shared [`TaskMapper`]. Results are identical either way:
//! merge logic lives with the operation, not the strategy.

mod cancel;
mod mapper;
mod strategy;

pub use cancel::CancelToken;
pub use mapper::{RayonMapper, TaskMapper};
pub use strategy::ExecutionStrategy;

use std::cmp::Ordering;
use std::fmt::Display;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::ops::{All, Any, ChunkOp, Concat, Filter, Map, Maximum, Minimum};
use crate::partition::partition;
use strategy::ChunkJob;

/// Chunked parallel operations over slices.
///
/// ```
/// use chunkwise::ParallelExecutor;
///
/// let executor = ParallelExecutor::new();
/// let min = executor.minimum(3, &[5, 1, 4, 1, 5], |a: &i32, b: &i32| a.cmp(b)).unwrap();
/// assert_eq!(min, 1);
/// ```
#[derive(Debug)]
pub struct ParallelExecutor {
    strategy: ExecutionStrategy,
    cancel: CancelToken,
}

impl ParallelExecutor {
    /// Executor that spawns one ephemeral thread per chunk.
    pub fn new() -> Self {
        Self {
            strategy: ExecutionStrategy::Ephemeral,
            cancel: CancelToken::new(),
        }
    }

    /// Executor that delegates chunk execution to a shared mapper.
    pub fn with_mapper(mapper: Arc<dyn TaskMapper>) -> Self {
        Self {
            strategy: ExecutionStrategy::Pooled(mapper),
            cancel: CancelToken::new(),
        }
    }

    /// Handle for cancelling this executor from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// First minimum of `items` by `cmp`; ties keep the earliest occurrence.
    pub fn minimum<T, C>(&self, worker_count: usize, items: &[T], cmp: C) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.run_op(worker_count, items, Minimum::new(cmp))?
            .ok_or(Error::EmptyInput)
    }

    /// First maximum of `items` by `cmp`; ties keep the earliest occurrence.
    pub fn maximum<T, C>(&self, worker_count: usize, items: &[T], cmp: C) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.run_op(worker_count, items, Maximum::new(cmp))?
            .ok_or(Error::EmptyInput)
    }

    /// True iff every element satisfies `pred`. Empty input is true.
    pub fn all<T, P>(&self, worker_count: usize, items: &[T], pred: P) -> Result<bool>
    where
        T: Clone + Send + Sync + 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.run_op(worker_count, items, All::new(pred))
    }

    /// True iff some element satisfies `pred`. Empty input is false.
    pub fn any<T, P>(&self, worker_count: usize, items: &[T], pred: P) -> Result<bool>
    where
        T: Clone + Send + Sync + 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.run_op(worker_count, items, Any::new(pred))
    }

    /// The elements satisfying `pred`, in original order.
    pub fn filter<T, P>(&self, worker_count: usize, items: &[T], pred: P) -> Result<Vec<T>>
    where
        T: Clone + Send + Sync + 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.run_op(worker_count, items, Filter::new(pred))
    }

    /// `transform` applied to every element, in original order.
    pub fn map<T, R, F>(&self, worker_count: usize, items: &[T], transform: F) -> Result<Vec<R>>
    where
        T: Clone + Send + Sync + 'static,
        R: Send + 'static,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.run_op(worker_count, items, Map::new(transform))
    }

    /// The `Display` forms of all elements concatenated, in order.
    pub fn concat<T>(&self, worker_count: usize, items: &[T]) -> Result<String>
    where
        T: Clone + Display + Send + Sync + 'static,
    {
        self.run_op(worker_count, items, Concat)
    }

    /// Partition, dispatch one job per chunk, merge in chunk order.
    fn run_op<T, Op>(&self, worker_count: usize, items: &[T], op: Op) -> Result<Op::Output>
    where
        T: Clone + Send + Sync + 'static,
        Op: ChunkOp<T> + 'static,
    {
        let chunks = partition(worker_count, items.len())?;
        if chunks.is_empty() {
            return Ok(op.merge(Vec::new()));
        }

        let shared: Arc<[T]> = Arc::from(items);
        let op = Arc::new(op);
        let jobs: Vec<ChunkJob<Op::Partial>> = chunks
            .into_iter()
            .map(|range| {
                let shared = Arc::clone(&shared);
                let op = Arc::clone(&op);
                Box::new(move || op.compute(&shared[range])) as ChunkJob<Op::Partial>
            })
            .collect();

        let partials = self.strategy.run(jobs, &self.cancel)?;
        Ok(op.merge(partials))
    }
}

impl Default for ParallelExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_returns_first_occurrence() {
        let executor = ParallelExecutor::new();
        let min = executor
            .minimum(3, &[5, 1, 4, 1, 5], |a: &i32, b: &i32| a.cmp(b))
            .unwrap();
        assert_eq!(min, 1);
    }

    #[test]
    fn filter_preserves_original_order() {
        let executor = ParallelExecutor::new();
        let even = executor
            .filter(2, &[1, 2, 3, 4, 5], |x: &i32| x % 2 == 0)
            .unwrap();
        assert_eq!(even, vec![2, 4]);
    }

    #[test]
    fn concat_with_more_workers_than_items() {
        let executor = ParallelExecutor::new();
        let joined = executor.concat(4, &["a", "b", "c"]).unwrap();
        assert_eq!(joined, "abc");
    }

    #[test]
    fn zero_workers_fails_every_operation() {
        let executor = ParallelExecutor::new();
        let items = [1, 2, 3];
        assert_eq!(
            executor.minimum(0, &items, |a: &i32, b: &i32| a.cmp(b)),
            Err(Error::InvalidWorkerCount)
        );
        assert_eq!(
            executor.all(0, &items, |x: &i32| *x > 0),
            Err(Error::InvalidWorkerCount)
        );
        assert_eq!(
            executor.map(0, &items, |x: &i32| x + 1),
            Err(Error::InvalidWorkerCount)
        );
        assert_eq!(executor.concat(0, &items), Err(Error::InvalidWorkerCount));
    }

    #[test]
    fn empty_input_semantics() {
        let executor = ParallelExecutor::new();
        let empty: [i32; 0] = [];
        assert_eq!(
            executor.minimum(4, &empty, |a: &i32, b: &i32| a.cmp(b)),
            Err(Error::EmptyInput)
        );
        assert_eq!(
            executor.maximum(4, &empty, |a: &i32, b: &i32| a.cmp(b)),
            Err(Error::EmptyInput)
        );
        assert_eq!(executor.all(4, &empty, |x: &i32| *x > 0), Ok(true));
        assert_eq!(executor.any(4, &empty, |x: &i32| *x > 0), Ok(false));
        assert_eq!(executor.filter(4, &empty, |x: &i32| *x > 0), Ok(Vec::new()));
        assert_eq!(executor.concat(4, &empty), Ok(String::new()));
    }

    #[test]
    fn panicking_transform_fails_the_call() {
        let executor = ParallelExecutor::new();
        let items: Vec<i32> = (0..10).collect();
        let result = executor.map(5, &items, |x: &i32| {
            if *x == 7 {
                panic!("bad element");
            }
            x * 2
        });
        assert!(matches!(result, Err(Error::TaskPanicked(_))));
    }

    #[test]
    fn cancelled_executor_stays_cancelled() {
        let executor = ParallelExecutor::new();
        executor.cancel_token().cancel();
        assert_eq!(
            executor.concat(2, &["a", "b"]),
            Err(Error::Interrupted)
        );
        assert_eq!(
            executor.any(2, &[1, 2, 3], |x: &i32| *x > 1),
            Err(Error::Interrupted)
        );
    }
}
