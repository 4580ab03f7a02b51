//! Criterion benchmarks comparing the four traversals.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use graph_sweep::engine::{
    level_synchronous_bfs_in, sequential_bfs, sequential_dfs, unsynchronized_concurrent_dfs,
    WorkerPool,
};
use graph_sweep::graph::generate::{complete_graph, random_graph};
use graph_sweep::graph::Graph;

fn bench_graph(c: &mut Criterion, label: &str, graph: &Graph) {
    let mut group = c.benchmark_group(label);

    group.bench_function("seq_dfs", |b| {
        b.iter(|| sequential_dfs(black_box(graph), 0).unwrap())
    });
    group.bench_function("seq_bfs", |b| {
        b.iter(|| sequential_bfs(black_box(graph), 0).unwrap())
    });

    for workers in [2usize, 4, 8] {
        let pool = WorkerPool::new(workers).unwrap();
        group.bench_with_input(BenchmarkId::new("level_bfs", workers), &pool, |b, pool| {
            b.iter(|| level_synchronous_bfs_in(pool, black_box(graph), 0).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("racy_dfs", workers), &pool, |b, pool| {
            b.iter(|| unsynchronized_concurrent_dfs(black_box(graph), 0, pool).unwrap())
        });
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let graph = random_graph(2_000, 0.01, 42).unwrap();
    bench_graph(c, "random_2k", &graph);
}

fn bench_complete(c: &mut Criterion) {
    let graph = complete_graph(500).unwrap();
    bench_graph(c, "complete_500", &graph);
}

criterion_group!(benches, bench_random, bench_complete);
criterion_main!(benches);
