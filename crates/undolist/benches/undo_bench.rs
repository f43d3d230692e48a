//! Benchmarks for recording and replaying undo operations.
//!
//! Run with: cargo bench -p undolist --bench undo_bench
//!
//! - `append_then_undo/N`: N `insert_back` calls followed by N undos
//! - `front_insert_then_undo/N`: N `insert_front` calls (O(n) shifts)
//! - `remove_all_undo/N`: snapshot-restore of an N-value list

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use undolist::StringList;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn filled(n: usize) -> StringList {
    (0..n).map(|i| format!("value-{i}")).collect()
}

fn bench_append_then_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_then_undo");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut list = StringList::new();
                for i in 0..n {
                    list.insert_back(format!("v{i}"));
                }
                while list.undo() {}
                black_box(list.len())
            });
        });
    }
    group.finish();
}

fn bench_front_insert_then_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_insert_then_undo");
    for n in [100usize, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut list = StringList::new();
                for i in 0..n {
                    list.insert_front(format!("v{i}"));
                }
                while list.undo() {}
                black_box(list.len())
            });
        });
    }
    group.finish();
}

fn bench_remove_all_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_all_undo");
    for n in SIZES {
        let base = filled(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &base, |b, base| {
            b.iter(|| {
                let mut list = base.clone();
                list.remove_all();
                list.undo();
                black_box(list.len())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_append_then_undo,
    bench_front_insert_then_undo,
    bench_remove_all_undo
);
criterion_main!(benches);
