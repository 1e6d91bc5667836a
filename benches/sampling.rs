//! Sampling benchmarks.
//!
//! Measure batch generation against different random sources, and the cost of
//! merging batches into a growing sample set.
//!
//! Run with:
//! ```bash
//! cargo bench --bench sampling
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use monte_carlo_pi::sampler::{generate_batch, Batch};
use monte_carlo_pi::samples::{append_batch, reset};
use monte_carlo_pi::source::SequenceSource;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Deterministic batches for reproducible benchmarks.
fn seeded_batches(seed: u64, count: usize, size: usize) -> Vec<Batch> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| generate_batch(&mut rng, size, 360.0)).collect()
}

// ============================================================================
// Benchmark: Batch Generation
// ============================================================================

fn bench_generate_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler/generate_batch");

    for n in [10, 100, 10_000] {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("chacha8", n), &n, |b, &n| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| generate_batch(&mut rng, n, 360.0));
        });

        group.bench_with_input(BenchmarkId::new("std", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| generate_batch(&mut rng, n, 360.0));
        });

        group.bench_with_input(BenchmarkId::new("sequence", n), &n, |b, &n| {
            let mut source = SequenceSource::new((0..64).map(|k| k as f64 / 64.0).collect());
            b.iter(|| generate_batch(&mut source, n, 360.0));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Appending Batches
// ============================================================================

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("samples/append");

    for (count, size) in [(100, 10), (100, 100), (1000, 100)] {
        let batches = seeded_batches(7, count, size);

        group.throughput(Throughput::Elements((count * size) as u64));
        group.bench_with_input(
            BenchmarkId::new("batches", format!("{}x{}", count, size)),
            &batches,
            |b, batches| {
                b.iter_with_setup(
                    || batches.clone(),
                    |batches| batches.into_iter().fold(reset(), append_batch),
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate_batch, bench_append);
criterion_main!(benches);
