//! md4-hash Criterion Benchmark
//!
//! Latency, bulk throughput and batch scaling, plus a comparison against
//! the RustCrypto MD4 and SHA-256 implementations.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use sha2::Digest as _;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (protocol fields, identifiers).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (16, "16B"),
        (55, "55B-one-block"),
        (56, "56B-two-blocks"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| md4_hash::digest(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Throughput for file-sized inputs.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(30);

    let sizes = [(64 * KB, "64KB"), (MB, "1MB"), (16 * MB, "16MB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| md4_hash::digest(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: COMPARISON
// =============================================================================

/// This crate vs RustCrypto `md4` vs `sha2::Sha256` over the same input.
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Compare");

    for size in [64, 4 * KB, MB] {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("md4-hash - {size} bytes"), |b| {
            b.iter(|| md4_hash::digest(black_box(&input)))
        });
        group.bench_function(format!("RustCrypto md4 - {size} bytes"), |b| {
            b.iter(|| md4::Md4::digest(black_box(&input)))
        });
        group.bench_function(format!("sha256 - {size} bytes"), |b| {
            b.iter(|| sha2::Sha256::digest(black_box(&input)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: VERIFY & HEX
// =============================================================================

/// Secondary operations on a small input.
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Special-Operations");

    let size = 4 * KB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("digest", |b| {
        b.iter(|| md4_hash::digest(black_box(&input)))
    });

    group.bench_function("digest-hex", |b| {
        b.iter(|| md4_hash::digest_hex(black_box(&input)))
    });

    // Verification (constant-time)
    let hash = md4_hash::digest(&input);
    group.bench_function("verify", |b| {
        b.iter(|| md4_hash::verify(black_box(&input), black_box(&hash)))
    });

    let hex = md4_hash::to_hex(&hash);
    group.bench_function("from-hex", |b| {
        b.iter(|| md4_hash::from_hex(black_box(&hex)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 5: BATCH SCALING
// =============================================================================

/// Independent inputs spread over 1 to N threads.
#[cfg(feature = "multithread")]
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Batch-Scaling");
    group.sample_size(30);

    let count = 256;
    let size = 64 * KB;
    let owned: Vec<Vec<u8>> = (0..count)
        .map(|_| {
            let mut input = vec![0u8; size];
            rand::rng().fill(&mut input[..]);
            input
        })
        .collect();
    let inputs: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();
    group.throughput(Throughput::Bytes((count * size) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{}threads", threads)),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| md4_hash::digest_batch(black_box(&inputs))));
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_compare,
    bench_special_operations,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_batch_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
