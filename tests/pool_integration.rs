//! The worker pool as a shared mapper: reuse, interleaving, and the weak
//! shutdown guarantees.

use std::sync::Arc;
use std::thread;

use chunkwise::{Error, FixedWorkerPool, ParallelExecutor, PoolMapper, PoolState};

#[test]
fn one_pool_serves_many_calls() {
    let pool = Arc::new(FixedWorkerPool::new(4).unwrap());
    let executor = ParallelExecutor::with_mapper(Arc::new(PoolMapper::new(Arc::clone(&pool))));

    for round in 0..20 {
        let items: Vec<i64> = (0..50).map(|i| i + round).collect();
        let expected: Vec<i64> = items.iter().map(|x| x * 2).collect();
        assert_eq!(executor.map(3, &items, |x: &i64| x * 2).unwrap(), expected);
    }
    assert_eq!(pool.state(), PoolState::Running);
}

#[test]
fn interleaved_callers_get_correct_results() {
    let pool = Arc::new(FixedWorkerPool::new(4).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|caller: i64| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                let executor =
                    ParallelExecutor::with_mapper(Arc::new(PoolMapper::new(pool)));
                let items: Vec<i64> = (0..40).map(|i| i * caller).collect();
                let got = executor.map(4, &items, |x: &i64| x + 1).unwrap();
                let expected: Vec<i64> = items.iter().map(|x| x + 1).collect();
                assert_eq!(got, expected);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn call_on_a_shut_down_pool_reports_lost_tasks() {
    let pool = Arc::new(FixedWorkerPool::new(2).unwrap());
    let executor = ParallelExecutor::with_mapper(Arc::new(PoolMapper::new(Arc::clone(&pool))));

    pool.shutdown();
    assert_eq!(pool.state(), PoolState::Terminated);

    // The pool silently discards the chunk tasks; the framework reports the
    // missing results rather than hanging or inventing a partial answer.
    let result = executor.map(2, &[1i64, 2, 3, 4], |x: &i64| x * 2);
    assert_eq!(result, Err(Error::TaskLost));
}

#[test]
fn mapper_shutdown_forwards_to_the_pool() {
    let pool = Arc::new(FixedWorkerPool::new(2).unwrap());
    let mapper = PoolMapper::new(Arc::clone(&pool));

    chunkwise::TaskMapper::shutdown(&mapper);
    assert_eq!(pool.state(), PoolState::Terminated);
}
