//! Criterion micro-benchmarks for container growth, shifting, and cursor walks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use varr::DynArray;
use varr_bench::{prefilled_array, sequential_array};

const N: usize = 10_000;

/// Benchmark: push N elements at the back, doubling growth included.
fn bench_push_back_growth(c: &mut Criterion) {
    c.bench_function("push_back_growth_10k", |b| {
        b.iter(|| black_box(sequential_array(N)));
    });
}

/// Benchmark: push N elements at the back into pre-reserved capacity.
fn bench_push_back_reserved(c: &mut Criterion) {
    c.bench_function("push_back_reserved_10k", |b| {
        b.iter(|| black_box(prefilled_array(N)));
    });
}

/// Benchmark: push at the front, the always-O(n) shifting path.
fn bench_push_front(c: &mut Criterion) {
    c.bench_function("push_front_1k", |b| {
        b.iter(|| {
            let mut arr = DynArray::with_capacity(1_000);
            for i in 0..1_000u64 {
                arr.push_front(i);
            }
            black_box(arr)
        });
    });
}

/// Benchmark: insert then erase at the midpoint of a 10K array.
fn bench_mid_insert_erase(c: &mut Criterion) {
    let base = prefilled_array(N);
    c.bench_function("mid_insert_erase_10k", |b| {
        b.iter(|| {
            let mut arr = base.clone();
            let mid = arr.begin() + (N / 2) as isize;
            let at = arr.insert(mid, 42).unwrap();
            arr.erase(at).unwrap();
            black_box(arr.len())
        });
    });
}

/// Benchmark: walk the live range by cursor resolution vs slice iteration.
fn bench_traversal(c: &mut Criterion) {
    let arr = prefilled_array(N);

    c.bench_function("cursor_walk_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            let mut cur = arr.begin();
            while cur != arr.end() {
                sum = sum.wrapping_add(*arr.get(cur).unwrap());
                cur.advance();
            }
            black_box(sum)
        });
    });

    c.bench_function("slice_iter_10k", |b| {
        b.iter(|| {
            let sum: u64 = arr.iter().copied().sum();
            black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_push_back_growth,
    bench_push_back_reserved,
    bench_push_front,
    bench_mid_insert_erase,
    bench_traversal
);
criterion_main!(benches);
