use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sampling_core::Population;
use sampling_proportion::{estimate_proportion, MonteCarloExperiment};

fn bench_single_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_proportion");
    let population = Population::with_proportion(62_500, 0.01).unwrap();

    for &n in &[100usize, 1_000, 10_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        group.bench_with_input(BenchmarkId::new("n", n), &n, |b, &n| {
            b.iter(|| estimate_proportion(black_box(&population), n, &mut rng))
        });
    }

    group.finish();
}

fn bench_experiment(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(10);
    let population = Population::with_proportion(62_500, 0.01).unwrap();

    for &repetitions in &[100usize, 1_000] {
        let experiment = MonteCarloExperiment::new(1_000).with_repetitions(repetitions);
        group.bench_with_input(
            BenchmarkId::new("repetitions", repetitions),
            &experiment,
            |b, experiment| b.iter(|| experiment.run(black_box(&population))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_estimate, bench_experiment);
criterion_main!(benches);
