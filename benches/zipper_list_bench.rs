//! Benchmark for ZipperList vs a plain Vec with an index.
//!
//! Every ZipperList operation rebuilds the sequence; the Vec baseline shows
//! the cost of keeping the cursor as a bare index instead.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zipper_list::persistent::ZipperList;

// =============================================================================
// next Benchmark
// =============================================================================

fn benchmark_next(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("next");

    for size in [100, 1000, 10000] {
        let elements: Vec<i32> = (0..size).collect();
        let zipper = ZipperList::from_indexed(0, elements.clone()).unwrap();

        group.bench_with_input(BenchmarkId::new("ZipperList", size), &zipper, |bencher, zipper| {
            bencher.iter(|| black_box(zipper.next()));
        });

        group.bench_with_input(BenchmarkId::new("Vec+index", size), &elements, |bencher, elements| {
            bencher.iter(|| {
                let index = black_box(0usize);
                black_box((index + 1).min(elements.len() - 1))
            });
        });
    }

    group.finish();
}

// =============================================================================
// map Benchmark
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in [100, 1000, 10000] {
        let elements: Vec<i32> = (0..size).collect();
        let zipper = ZipperList::from_indexed(size as isize / 2, elements.clone()).unwrap();

        group.bench_with_input(BenchmarkId::new("ZipperList", size), &zipper, |bencher, zipper| {
            bencher.iter(|| black_box(zipper.map(|n| n * 2)));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &elements, |bencher, elements| {
            bencher.iter(|| black_box(elements.iter().map(|n| n * 2).collect::<Vec<_>>()));
        });
    }

    group.finish();
}

// =============================================================================
// filter / includes Benchmark
// =============================================================================

fn benchmark_filter_includes(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_includes");

    for size in [100, 1000, 10000] {
        let zipper = ZipperList::from_indexed(0, (0..size).collect()).unwrap();

        group.bench_with_input(BenchmarkId::new("filter", size), &zipper, |bencher, zipper| {
            bencher.iter(|| black_box(zipper.filter(|n| n % 2 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("includes", size), &zipper, |bencher, zipper| {
            let equality = |left: &i32, right: &i32| left == right;
            bencher.iter(|| black_box(zipper.includes(&equality, black_box(&(size - 1)))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_next, benchmark_map, benchmark_filter_includes);
criterion_main!(benches);
