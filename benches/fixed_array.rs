//! Benchmarks: FixedArray vs std::Vec (vs heapless::Vec with `--features heapless`)
//!
//! Comparison at capacity `N = 16`.
//!
//! | Variant            | Storage    | Push   | Insert at front |
//! |--------------------|------------|--------|-----------------|
//! | `std::Vec`         | Heap       | O(1)*  | O(N)            |
//! | `heapless::Vec`    | Stack only | O(1)   | O(N)            |
//! | `FixedArray`       | Stack only | O(1)   | O(N)            |

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fixed_collections::FixedArray;

const N: usize = 16;

// ─── Push / Pop ───────────────────────────────────────────────────────────────

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("Array Push+Pop (N=16)");

    group.bench_function("std::Vec", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(N);
            for i in 0..N {
                v.push(black_box(i as u32));
            }
            while let Some(x) = v.pop() {
                black_box(x);
            }
        })
    });

    #[cfg(feature = "heapless")]
    group.bench_function("heapless::Vec<u32,16>", |b| {
        b.iter(|| {
            let mut v: heapless::Vec<u32, N> = heapless::Vec::new();
            for i in 0..N {
                let _ = v.push(black_box(i as u32));
            }
            while let Some(x) = v.pop() {
                black_box(x);
            }
        })
    });

    group.bench_function("FixedArray<u32,16>", |b| {
        b.iter(|| {
            let mut v: FixedArray<u32, N> = FixedArray::new();
            for i in 0..N {
                v.push(black_box(i as u32));
            }
            while let Some(x) = v.pop() {
                black_box(x);
            }
        })
    });

    group.finish();
}

// ─── Insert at front (worst-case shifting) ───────────────────────────────────

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("Array Insert Front (N=16)");

    group.bench_function("std::Vec", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(N);
            for i in 0..N {
                v.insert(0, black_box(i as u32));
            }
            v
        })
    });

    group.bench_function("FixedArray<u32,16>", |b| {
        b.iter(|| {
            let mut v: FixedArray<u32, N> = FixedArray::new();
            for i in 0..N {
                v.insert(0, black_box(i as u32));
            }
            v
        })
    });

    group.finish();
}

// ─── Clone of a full container ───────────────────────────────────────────────

fn bench_clone(c: &mut Criterion) {
    let v_std: Vec<String> = (0..N).map(|i| i.to_string()).collect();
    let v_fixed: FixedArray<String, N> = v_std.iter().cloned().collect();

    let mut group = c.benchmark_group("Array Clone (N=16, String)");

    group.bench_function("std::Vec", |b| b.iter(|| black_box(&v_std).clone()));
    group.bench_function("FixedArray<String,16>", |b| {
        b.iter(|| black_box(&v_fixed).clone())
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_insert_front, bench_clone);
criterion_main!(benches);
