//! Pipeline Stage Benchmark
//!
//! Times padding, block compression and assembly separately to show where a
//! digest spends its time.

#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use md4_hash::kernels::compress::{compress, process, State};
use md4_hash::kernels::finalize::assemble;
use md4_hash::kernels::padding::pad;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("MD4 Stages");

    // Scenarios:
    // - 55B: one padded block
    // - 56B: padding spills into a second block
    // - 64KB: compression dominated
    let sizes = [55, 56, 64 * 1024];

    for size in sizes {
        let input = vec![0x61u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        // 1. Padding only (one allocation + copy)
        group.bench_function(format!("pad - {size} bytes"), |b| {
            b.iter(|| pad(black_box(&input)));
        });

        // 2. Compression fold over pre-padded input
        let padded = pad(&input);
        group.bench_function(format!("process - {size} bytes"), |b| {
            b.iter(|| process(black_box(&padded), State::INITIAL));
        });

        // 3. Full pipeline
        group.bench_function(format!("digest - {size} bytes"), |b| {
            b.iter(|| md4_hash::digest(black_box(&input)));
        });
    }

    // Single block compression and assembly
    let block = [0x5Au8; 64];
    group.throughput(Throughput::Bytes(64));
    group.bench_function("compress - single block", |b| {
        b.iter(|| compress(black_box(State::INITIAL), black_box(&block)));
    });
    group.bench_function("assemble", |b| {
        b.iter(|| assemble(black_box(State::INITIAL)));
    });

    group.finish();
}

criterion_group!(benches, bench_stages);
criterion_main!(benches);
