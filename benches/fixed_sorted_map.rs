//! Benchmarks: FixedSortedMap vs std::collections::BTreeMap
//!
//! Comparison at capacity `N = 16`.
//!
//! | Variant          | Storage           | Lookup       | Insert |
//! |------------------|-------------------|--------------|--------|
//! | `BTreeMap`       | Heap (B-tree)     | O(log N)     | O(log N) + alloc |
//! | `FixedSortedMap` | Stack (flat array)| O(log N)     | O(N) shift |
//!
//! Keys are inserted in descending order so every `FixedSortedMap` insert lands at the
//! front and shifts the whole tail.

use std::collections::BTreeMap;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fixed_collections::FixedSortedMap;

const N: usize = 16;

// ─── Insert ───────────────────────────────────────────────────────────────────

fn bench_map_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SortedMap Insert (N=16, descending)");

    group.bench_function("std::BTreeMap", |b| {
        b.iter(|| {
            let mut m = BTreeMap::new();
            for i in (0..N).rev() {
                m.insert(black_box(i as i32), black_box(i as i32));
            }
            m
        })
    });

    group.bench_function("FixedSortedMap<i32,i32,16>", |b| {
        b.iter(|| {
            let mut m: FixedSortedMap<i32, i32, N> = FixedSortedMap::new();
            for i in (0..N).rev() {
                // All N keys fit.
                let _ = m.try_insert(black_box(i as i32), black_box(i as i32));
            }
            m
        })
    });

    group.finish();
}

// ─── Get (binary search) ─────────────────────────────────────────────────────

fn bench_map_get(c: &mut Criterion) {
    let m_std: BTreeMap<i32, i32> = (0..N as i32).map(|i| (i, i)).collect();
    let m_fixed: FixedSortedMap<i32, i32, N> = (0..N as i32).map(|i| (i, i)).collect();

    let mut group = c.benchmark_group("SortedMap Get (N=16, all-hit)");

    group.bench_function("std::BTreeMap", |b| {
        b.iter(|| {
            for i in 0..N {
                black_box(m_std.get(&black_box(i as i32)));
            }
        })
    });

    group.bench_function("FixedSortedMap<i32,i32,16>", |b| {
        b.iter(|| {
            for i in 0..N {
                black_box(m_fixed.get(&black_box(i as i32)));
            }
        })
    });

    group.finish();
}

// ─── Remove + reinsert ───────────────────────────────────────────────────────

fn bench_map_churn(c: &mut Criterion) {
    let mut m_std: BTreeMap<i32, i32> = (0..N as i32).map(|i| (i, i)).collect();
    let mut m_fixed: FixedSortedMap<i32, i32, N> = (0..N as i32).map(|i| (i, i)).collect();

    let mut group = c.benchmark_group("SortedMap Remove+Insert (N=16)");

    group.bench_function("std::BTreeMap", |b| {
        b.iter(|| {
            let k = black_box(3);
            let v = m_std.remove(&k);
            m_std.insert(k, v.unwrap_or_default());
        })
    });

    group.bench_function("FixedSortedMap<i32,i32,16>", |b| {
        b.iter(|| {
            let k = black_box(3);
            let v = m_fixed.remove(&k);
            let _ = m_fixed.try_insert(k, v.unwrap_or_default());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_map_insert, bench_map_get, bench_map_churn);
criterion_main!(benches);
