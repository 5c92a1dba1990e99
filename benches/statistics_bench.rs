use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seqstats::prelude::*;

fn generate_lengths(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(50..15_000)).collect()
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for &n in &[10_000, 100_000, 1_000_000] {
        let data = generate_lengths(n, 42);

        group.bench_with_input(BenchmarkId::new("add_and_summarize", n), &data, |b, data| {
            b.iter(|| {
                let mut hist = HistogramStatistics::with_capacity(1024).unwrap();
                hist.extend(data.iter().copied());
                black_box(hist.summary())
            });
        });
    }

    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    for &n in &[10_000, 100_000] {
        let data = generate_lengths(n, 7);

        group.bench_with_input(BenchmarkId::new("summarize", n), &data, |b, data| {
            b.iter(|| {
                let sample: SampleStatistics<usize> = data.iter().copied().collect();
                black_box(sample.summary())
            });
        });
    }

    group.finish();
}

fn bench_online(c: &mut Criterion) {
    let data: Vec<f64> = generate_lengths(100_000, 3)
        .into_iter()
        .map(|v| v as f64)
        .collect();

    c.bench_function("online_insert_100k", |b| {
        b.iter(|| {
            let mut acc = OnlineAccumulator::<f64>::new();
            for &v in &data {
                acc.insert(v).unwrap();
            }
            black_box(acc.stddev())
        });
    });
}

criterion_group!(benches, bench_histogram, bench_sample, bench_online);
criterion_main!(benches);
