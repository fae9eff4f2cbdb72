//! Criterion benchmarks for u-anneal.
//!
//! Random symmetric tours with distances in [100, 200], annealed from
//! 1.5x the start objective down to 1.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_anneal::sa::{SaConfig, SaRunner, Solution};
use u_anneal::tour::{DistanceMatrix, SwapNeighborGenerator, Tour};

fn instance(n: usize) -> (SwapNeighborGenerator, Tour) {
    let mut rng = StdRng::seed_from_u64(42);
    let dm = DistanceMatrix::random_symmetric(n + 1, 100..=200, &mut rng);
    let tour = Tour::identity(n, &dm).expect("valid tour");
    (SwapNeighborGenerator::new(dm), tour)
}

fn bench_sa_swap_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_swap_tour");
    group.sample_size(10);

    for &n in &[20usize, 100, 500] {
        let (generator, tour) = instance(n);
        let config = SaConfig::default()
            .with_start_temperature(tour.objective() * 1.5)
            .with_stop_temperature(1.0)
            .with_cooling_factor(0.99)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(generator, tour, config),
            |b, (g, t, c)| {
                b.iter(|| {
                    let result = SaRunner::run(black_box(t.clone()), black_box(g), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_swap_delta(c: &mut Criterion) {
    let (generator, tour) = instance(1000);
    let last = tour.len() - 1;
    c.bench_function("swap_delta_n1000", |b| {
        b.iter(|| {
            black_box(generator.swap_delta(black_box(tour.sequence()), black_box(3), black_box(last)))
        })
    });
}

criterion_group!(benches, bench_sa_swap_tour, bench_swap_delta);
criterion_main!(benches);
