//! Benchmarks for bulk load/extract throughput.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gridstore::{DataFrame, Frame};

const ROWS: u32 = 500;
const COLS: u32 = 100;

fn bounds() -> Frame {
    Frame::new((0, 0), (COLS - 1, ROWS - 1)).expect("valid bounds")
}

fn block(rows: u32, cols: u32) -> Vec<Vec<Option<u32>>> {
    (0..rows)
        .map(|y| (0..cols).map(|x| Some(y * cols + x)).collect())
        .collect()
}

fn full_store() -> DataFrame<u32> {
    let mut store = DataFrame::new(bounds());
    store
        .load_from_array(block(ROWS, COLS), (0, 0))
        .expect("block fits bounds");
    store
}

/// Benchmark bulk-loading a full block into an empty store
fn bench_load(c: &mut Criterion) {
    let data = block(ROWS, COLS);
    let mut group = c.benchmark_group("load_from_array");
    group.throughput(Throughput::Elements(u64::from(ROWS) * u64::from(COLS)));
    group.bench_function(BenchmarkId::from_parameter(format!("{ROWS}x{COLS}")), |b| {
        b.iter(|| {
            let mut store = DataFrame::new(bounds());
            store
                .load_from_array(black_box(data.clone()), (0, 0))
                .expect("block fits bounds");
            store
        })
    });
    group.finish();
}

/// Benchmark extracting the full region from a populated store
fn bench_extract(c: &mut Criterion) {
    let store = full_store();
    c.bench_function("data_array_for_frame_full", |b| {
        b.iter(|| {
            store
                .data_array_for_frame(black_box(bounds()))
                .expect("frame is contained")
        })
    });
}

/// Benchmark the completeness scan over a full store (worst case: no hole)
fn bench_complete_scan(c: &mut Criterion) {
    let store = full_store();
    c.bench_function("has_complete_data_full", |b| {
        b.iter(|| {
            store
                .has_complete_data_for_frame(black_box(bounds()))
                .expect("frame is contained")
        })
    });
}

/// Benchmark tight-extent derivation over a sparse store
fn bench_min_frame(c: &mut Criterion) {
    let mut store: DataFrame<u32> = DataFrame::new(bounds());
    // Every 7th cell, a scattered but sizable population
    for (i, p) in bounds().points().enumerate() {
        if i % 7 == 0 {
            store.put_at_silent(p, Some(1));
        }
    }
    c.bench_function("min_frame_sparse", |b| {
        b.iter(|| store.min_frame().expect("store is non-empty"))
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_extract,
    bench_complete_scan,
    bench_min_frame
);
criterion_main!(benches);
