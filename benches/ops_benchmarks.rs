use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

use chunkwise::{FixedWorkerPool, ParallelExecutor, PoolMapper};

fn dataset(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| (i * 2_654_435_761) % 1_000_003).collect()
}

fn bench_minimum(c: &mut Criterion) {
    let items = dataset(200_000);
    let executor = ParallelExecutor::new();

    let mut group = c.benchmark_group("minimum");
    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.iter(|| {
                executor
                    .minimum(workers, black_box(&items), |a: &i64, b: &i64| a.cmp(b))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let items = dataset(200_000);
    let executor = ParallelExecutor::new();

    let mut group = c.benchmark_group("map");
    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.iter(|| {
                executor
                    .map(workers, black_box(&items), |x: &i64| x.wrapping_mul(31) ^ 0x5f5f)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_pooled_vs_ephemeral(c: &mut Criterion) {
    let items = dataset(200_000);
    let ephemeral = ParallelExecutor::new();
    let pool = Arc::new(FixedWorkerPool::new(4).unwrap());
    let pooled = ParallelExecutor::with_mapper(Arc::new(PoolMapper::new(pool)));

    let mut group = c.benchmark_group("filter_strategies");
    group.bench_function("ephemeral", |b| {
        b.iter(|| {
            ephemeral
                .filter(4, black_box(&items), |x: &i64| x % 3 == 0)
                .unwrap()
        })
    });
    group.bench_function("pooled", |b| {
        b.iter(|| {
            pooled
                .filter(4, black_box(&items), |x: &i64| x % 3 == 0)
                .unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_minimum, bench_map, bench_pooled_vs_ephemeral);
criterion_main!(benches);
