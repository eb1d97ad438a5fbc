//! Benchmarks for the generational arena

use bloxel_core::alloc::{Arena, SlotId};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone, Debug, Default)]
struct NodeData {
    position: (i32, i32),
    size: (i32, i32),
    children: Vec<SlotId>,
    focused: bool,
}

fn bench_arena_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_insert");

    for size in [10, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut arena = Arena::new();
                for _ in 0..size {
                    arena.insert(black_box(NodeData::default()));
                }
                arena
            });
        });
    }

    group.finish();
}

fn bench_arena_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_get");

    for size in [10, 100, 1000, 10000] {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..size).map(|_| arena.insert(NodeData::default())).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ids, |b, ids| {
            b.iter(|| {
                let mut focused = 0;
                for id in ids {
                    if let Some(node) = arena.get(*id)
                        && !node.focused
                    {
                        focused += 1;
                    }
                }
                black_box(focused)
            });
        });
    }

    group.finish();
}

fn bench_arena_churn(c: &mut Criterion) {
    c.bench_function("arena_remove_reinsert_1000", |b| {
        b.iter(|| {
            let mut arena = Arena::new();
            let ids: Vec<_> = (0..1000).map(|_| arena.insert(NodeData::default())).collect();
            for id in ids.iter().step_by(2) {
                arena.remove(*id);
            }
            for _ in 0..500 {
                arena.insert(black_box(NodeData::default()));
            }
            arena
        });
    });
}

criterion_group!(benches, bench_arena_insert, bench_arena_get, bench_arena_churn);
criterion_main!(benches);
