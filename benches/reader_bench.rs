//! Benchmarks for pagers.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use pagers::{ChunkedReader, Cursor, MemorySource};

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");

    for size in [1_000u64, 100_000, 1_000_000] {
        let source = MemorySource::new((0..size).collect::<Vec<u64>>());

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(format!("records_{}", size), &source, |b, source| {
            b.iter(|| {
                let reader = ChunkedReader::with_chunk_size(source, 500).unwrap();
                let sum: u64 = reader.records().map(Result::unwrap).sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_sizes");
    let size = 100_000u64;
    let source = MemorySource::new((0..size).collect::<Vec<u64>>());
    group.throughput(Throughput::Elements(size));

    for chunk_size in [10usize, 100, 1_000, 10_000] {
        group.bench_with_input(
            format!("chunk_{}", chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let reader = ChunkedReader::with_chunk_size(&source, chunk_size).unwrap();
                    let count = reader.records().count();
                    black_box(count)
                });
            },
        );
    }

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");
    let size = 100_000u64;
    let source = MemorySource::new((0..size).collect::<Vec<u64>>());

    // Deterministic pseudo-random positions
    let positions: Vec<u64> = (0..1_000u64).map(|i| (i * 7919 + 13) % size).collect();

    group.throughput(Throughput::Elements(positions.len() as u64));
    group.bench_with_input("get_scattered", &positions, |b, positions| {
        b.iter(|| {
            let mut reader = ChunkedReader::with_chunk_size(&source, 1_000).unwrap();
            let mut hits = 0u64;
            for &p in positions {
                if reader.get(black_box(p)).unwrap().is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });

    group.finish();
}

fn bench_mapped(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapped");
    let size = 100_000u64;
    let source = MemorySource::new((0..size).collect::<Vec<u64>>());
    group.throughput(Throughput::Elements(size));

    group.bench_function("map_records", |b| {
        b.iter(|| {
            let reader = ChunkedReader::with_chunk_size(&source, 500).unwrap();
            let sum: u64 = reader
                .map(|n| n.wrapping_mul(2))
                .records()
                .map(Result::unwrap)
                .sum();
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sequential,
    bench_chunk_sizes,
    bench_random_access,
    bench_mapped
);
criterion_main!(benches);
