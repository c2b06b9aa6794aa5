//! RSX benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 100K samples)
//! - Smoothing length
//! - Execution adapters (batch, streaming, online)
//! - Length sweeps, serial and parallel
//!
//! For serial sweeps, use `RSX_SWEEP=serial cargo bench`.
//! For parallel sweeps, use `RSX_SWEEP=parallel cargo bench --features cpu`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use rsx::prelude::*;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("RSX_SWEEP").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a price series (geometric random walk).
fn generate_price_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let returns_dist = Normal::new(0.0005, 0.02).unwrap();

    let mut prices = vec![100.0];
    for _ in 1..size {
        let ret = returns_dist.sample(&mut rng);
        let next = prices.last().unwrap() * (1.0 + ret);
        prices.push(next);
    }
    prices
}

/// Generate a price series with occasional gaps (5% of samples jump).
fn generate_gapped_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let gap_dist = Uniform::new(-10.0, 10.0).unwrap();

    let mut prices = generate_price_data(size, seed);
    for _ in 0..size / 20 {
        let idx = rng.random_range(0..size);
        prices[idx] += gap_dist.sample(&mut rng);
    }
    prices
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let prices = generate_price_data(size, 42);

        group.bench_with_input(BenchmarkId::new("batch", size), &size, |b, _| {
            b.iter(|| compute_rsx(black_box(&prices), 14.0).unwrap())
        });
    }

    group.finish();
}

fn bench_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("length");
    group.sample_size(100);

    let prices = generate_gapped_data(10_000, 42);

    for length in [2.0, 5.0, 14.0, 50.0] {
        group.bench_with_input(BenchmarkId::new("batch", length), &length, |b, &length| {
            b.iter(|| {
                Rsx::new()
                    .length(length)
                    .adapter(Batch)
                    .build()
                    .unwrap()
                    .compute(black_box(&prices))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");
    group.sample_size(100);

    let size = 10_000;
    group.throughput(Throughput::Elements(size as u64));
    let prices = generate_price_data(size, 7);

    group.bench_function("batch", |b| {
        b.iter(|| compute_rsx(black_box(&prices), 14.0).unwrap())
    });

    group.bench_function("streaming_chunk_500", |b| {
        b.iter(|| {
            let mut processor = Rsx::new().length(14.0).adapter(Streaming).build().unwrap();
            for chunk in prices.chunks(500) {
                black_box(processor.process_chunk(black_box(chunk)).unwrap());
            }
            processor.finalize()
        })
    });

    group.bench_function("online", |b| {
        b.iter(|| {
            let mut processor = Rsx::new().length(14.0).adapter(Online).build().unwrap();
            for &p in &prices {
                black_box(processor.update(black_box(p)));
            }
        })
    });

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("sweep_{}", mode_name));
    group.sample_size(30);

    for size in [1_000, 10_000, 50_000] {
        let prices = generate_price_data(size, 42);

        group.bench_with_input(BenchmarkId::new("lengths_2_15", size), &size, |b, _| {
            b.iter(|| {
                Rsx::new()
                    .adapter(Sweep)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .compute(black_box(&prices))
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_length,
    bench_adapters,
    bench_sweep,
);

criterion_main!(benches);
