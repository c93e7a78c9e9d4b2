//! Criterion benchmarks for the path GA operators.
//!
//! Uses a synthetic grid world (points on a square lattice, links between
//! orthogonal neighbours) to measure operator overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_pathga::ga::{
    crossover, mutate, reproduce, Chromosome, FitnessEvaluator, LinkTable, PathGaConfig,
    PointTable, Population,
};

// ===========================================================================
// Grid world
// ===========================================================================

fn grid(side: usize) -> (PointTable, LinkTable) {
    let mut coords = Vec::with_capacity(side * side);
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            coords.push((c as f64, r as f64));
            let id = r * side + c;
            if c + 1 < side {
                edges.push((id, id + 1));
            }
            if r + 1 < side {
                edges.push((id, id + side));
            }
        }
    }
    let links = LinkTable::from_edges(side * side, &edges).expect("grid edges stay on the grid");
    (PointTable::from_coords(&coords), links)
}

fn random_population(config: &PathGaConfig, rng: &mut StdRng) -> Population {
    (0..config.population_size)
        .map(|_| {
            let mut genes: Vec<usize> = (0..config.chromosome_length)
                .map(|_| rng.random_range(0..config.point_count))
                .collect();
            genes[0] = 0;
            Chromosome::new(genes)
        })
        .collect()
}

fn config(population_size: usize, side: usize) -> PathGaConfig {
    PathGaConfig::default()
        .with_population_size(population_size)
        .with_chromosome_length(16)
        .with_point_count(side * side)
        .with_mutation_rate(0.01)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let (points, links) = grid(8);

    for &size in &[50usize, 200, 1000] {
        let cfg = config(size, 8);
        let evaluator = FitnessEvaluator::new(&cfg, &points, &links).unwrap();
        let pop = random_population(&cfg, &mut StdRng::seed_from_u64(42));

        group.bench_with_input(BenchmarkId::from_parameter(size), &pop, |b, pop| {
            b.iter(|| evaluator.evaluate(black_box(pop)).unwrap())
        });
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let (points, links) = grid(8);
    let cfg = config(200, 8);
    let evaluator = FitnessEvaluator::new(&cfg, &points, &links).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let prior = random_population(&cfg, &mut rng);
    let eval = evaluator.evaluate(&prior).unwrap();

    c.bench_function("crossover/200", |b| {
        b.iter(|| {
            crossover(
                &cfg,
                black_box(&prior),
                &eval.best_fit_indices,
                &prior,
                &mut rng,
            )
            .unwrap()
        })
    });

    c.bench_function("mutate/200", |b| {
        b.iter(|| mutate(&cfg, black_box(&prior), &mut rng).unwrap())
    });

    c.bench_function("reproduce/200", |b| {
        b.iter(|| {
            reproduce(
                &cfg,
                &eval.fitness,
                black_box(&prior),
                &eval.best_fit_indices,
                &prior,
                &mut rng,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_operators);
criterion_main!(benches);
