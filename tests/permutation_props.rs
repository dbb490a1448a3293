//! Property tests: every operator keeps tours valid permutations.

use proptest::prelude::*;
use u_tsp::crossover::{segment_crossover, segment_crossover_at};
use u_tsp::mutation::swap_mutation;
use u_tsp::random::create_rng;
use u_tsp::tour::is_permutation;
use u_tsp::{fitness, City, Engine, EngineConfig};

/// Two permutations of `0..n` for some `n` in `1..40`.
fn parent_pair() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (1usize..40).prop_flat_map(|n| {
        let base: Vec<usize> = (0..n).collect();
        (Just(base.clone()).prop_shuffle(), Just(base).prop_shuffle())
    })
}

fn city_set() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 3..15)
        .prop_map(|pts| pts.into_iter().map(City::from).collect())
}

proptest! {
    #[test]
    fn crossover_at_any_cut_is_permutation(
        (p1, p2) in parent_pair(),
        a in 0usize..=40,
        b in 0usize..=40,
    ) {
        let n = p1.len();
        let start = a.min(b).min(n);
        let end = a.max(b).min(n);
        let child = segment_crossover_at(&p1, &p2, start, end);
        prop_assert!(is_permutation(&child, n));
        prop_assert_eq!(&child[start..end], &p1[start..end]);
    }

    #[test]
    fn random_crossover_is_permutation((p1, p2) in parent_pair(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let child = segment_crossover(&p1, &p2, &mut rng);
        prop_assert!(is_permutation(&child, p1.len()));
    }

    #[test]
    fn mutation_is_permutation(
        (order, _) in parent_pair(),
        rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = create_rng(seed);
        let mut mutated = order.clone();
        swap_mutation(&mut mutated, rate, &mut rng);
        prop_assert!(is_permutation(&mutated, order.len()));
    }

    #[test]
    fn zero_rate_mutation_is_identity((order, _) in parent_pair(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let mut mutated = order.clone();
        swap_mutation(&mut mutated, 0.0, &mut rng);
        prop_assert_eq!(mutated, order);
    }

    #[test]
    fn fitness_orders_by_length(a in 0.001f64..1e6, b in 0.001f64..1e6) {
        prop_assume!(a != b);
        let (short, long) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(fitness(short) > fitness(long));
        prop_assert!(fitness(long) > 0.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn engine_keeps_size_permutations_and_elite_best(
        cities in city_set(),
        seed in any::<u64>(),
    ) {
        prop_assume!(cities.iter().any(|c| *c != cities[0]));
        let n = cities.len();
        let config = EngineConfig::new(cities)
            .with_population_size(20)
            .with_elite_size(2)
            .with_mutation_rate(0.1)
            .with_max_generations(15)
            .with_seed(seed);
        let mut engine = Engine::new(config).unwrap();
        let mut previous = engine.current_best().best_length;
        while !engine.is_finished() {
            let snapshot = engine.step();
            prop_assert_eq!(engine.population().len(), 20);
            prop_assert!(engine.population().iter().all(|t| t.is_permutation(n)));
            prop_assert!(snapshot.best_length <= previous);
            previous = snapshot.best_length;
        }
    }
}
