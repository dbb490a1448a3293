//! Criterion benchmarks for the TSP engine and its operators.
//!
//! Uses a fixed 22-city layout on a 500 x 500 canvas.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::crossover::segment_crossover;
use u_tsp::mutation::swap_mutation;
use u_tsp::random::create_rng;
use u_tsp::{City, Engine, EngineConfig};

const CANVAS_CITIES: [(f64, f64); 22] = [
    (100.0, 100.0),
    (200.0, 200.0),
    (300.0, 300.0),
    (400.0, 400.0),
    (150.0, 100.0),
    (200.0, 150.0),
    (200.0, 300.0),
    (400.0, 300.0),
    (100.0, 400.0),
    (300.0, 100.0),
    (400.0, 200.0),
    (300.0, 400.0),
    (100.0, 200.0),
    (200.0, 400.0),
    (300.0, 200.0),
    (400.0, 100.0),
    (100.0, 50.0),
    (50.0, 100.0),
    (50.0, 200.0),
    (50.0, 300.0),
    (50.0, 400.0),
    (50.0, 340.0),
];

fn canvas_cities() -> Vec<City> {
    CANVAS_CITIES.iter().copied().map(City::from).collect()
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_step");
    for &pop in &[50usize, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(pop), &pop, |b, &pop| {
            let config = EngineConfig::new(canvas_cities())
                .with_population_size(pop)
                .with_elite_size(pop / 5)
                .with_max_generations(usize::MAX)
                .with_seed(42);
            let mut engine = Engine::new(config).expect("valid config");
            b.iter(|| black_box(engine.step()));
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    c.bench_function("run_22_cities_1000_generations", |b| {
        b.iter(|| {
            let config = EngineConfig::new(canvas_cities()).with_seed(42);
            let mut engine = Engine::new(config).expect("valid config");
            black_box(engine.run().best.best_length)
        });
    });
}

fn bench_operators(c: &mut Criterion) {
    let p1: Vec<usize> = (0..200).collect();
    let p2: Vec<usize> = (0..200).rev().collect();

    c.bench_function("segment_crossover_200", |b| {
        let mut rng = create_rng(7);
        b.iter(|| black_box(segment_crossover(&p1, &p2, &mut rng)));
    });

    c.bench_function("swap_mutation_200", |b| {
        let mut rng = create_rng(7);
        let mut order = p1.clone();
        b.iter(|| swap_mutation(black_box(&mut order), 0.01, &mut rng));
    });
}

criterion_group!(benches, bench_step, bench_full_run, bench_operators);
criterion_main!(benches);
