//! Generational evolution engine.
//!
//! [`Engine`] owns the whole run state: configuration, random source,
//! current population and generation index. A driver (animation timer,
//! render loop, or a plain `for` loop) calls [`Engine::step`] on its own
//! schedule; each call replaces the population with the next generation:
//!
//! rank → keep elites → select parents → crossover → mutate → evaluate.
//!
//! Once the generation budget is spent the engine is finished and further
//! steps return the last snapshot unchanged.

use crate::config::EngineConfig;
use crate::crossover::segment_crossover;
use crate::error::TspResult;
use crate::geometry::City;
use crate::mutation::swap_mutation;
use crate::population::Population;
use crate::random::{create_rng, DefaultRng};
use crate::tour::Tour;
use rand::Rng;
use tracing::{debug, info, instrument};

/// The best tour of a generation, as handed to collaborators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Best route as coordinates, in visiting order.
    pub best_tour: Vec<City>,

    /// Best route as city indices.
    pub best_order: Vec<usize>,

    /// Closed length of the best route.
    pub best_length: f64,

    /// Generations completed so far (0 for the initial population).
    pub generation: usize,

    /// Whether the generation budget is exhausted.
    pub finished: bool,
}

/// Result of running an engine to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Snapshot of the final generation.
    pub best: Snapshot,

    /// Generations executed during the run call.
    pub generations: usize,

    /// Best length of every generation, starting with the initial population.
    pub length_history: Vec<f64>,
}

/// Step-wise genetic algorithm for the Euclidean TSP.
///
/// # Usage
///
/// ```
/// use u_tsp::{City, Engine, EngineConfig};
///
/// let square = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 10.0),
///     City::new(10.0, 10.0),
///     City::new(10.0, 0.0),
/// ];
/// let config = EngineConfig::new(square)
///     .with_max_generations(50)
///     .with_seed(42);
/// let mut engine = Engine::new(config).unwrap();
///
/// while !engine.is_finished() {
///     let snapshot = engine.step();
///     assert_eq!(snapshot.best_tour.len(), 4);
/// }
/// assert!(engine.current_best().best_length <= 40.0 + 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Engine<R = DefaultRng> {
    config: EngineConfig,
    rng: R,
    population: Population,
    generation: usize,
    history: Vec<f64>,
}

impl Engine<DefaultRng> {
    /// Builds an engine seeded from `config.seed`, or from OS entropy when
    /// no seed is set.
    ///
    /// # Errors
    /// Returns the error from [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> TspResult<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(config, create_rng(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Builds an engine drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored. The initial population is sampled and
    /// evaluated here, so generation 0 is immediately inspectable.
    ///
    /// # Errors
    /// Returns the error from [`EngineConfig::validate`].
    #[instrument(
        level = "info",
        skip(config, rng),
        fields(
            cities = config.cities.len(),
            population_size = config.population_size,
            elite_size = config.elite_size,
            mutation_rate = config.mutation_rate,
            max_generations = config.max_generations,
        )
    )]
    pub fn with_rng(config: EngineConfig, mut rng: R) -> TspResult<Self> {
        config.validate()?;

        let mut population =
            Population::random(config.cities.len(), config.population_size, &mut rng);
        population.evaluate(&config.cities);

        let mut engine = Self {
            config,
            rng,
            population,
            generation: 0,
            history: Vec::new(),
        };
        let initial = engine.best_tour().length().unwrap_or(f64::INFINITY);
        engine.history.push(initial);
        info!(best_length = initial, "initial population sampled");
        Ok(engine)
    }

    /// Advances one generation and returns the new best tour.
    ///
    /// When the budget is already spent this is a no-op that returns the
    /// current snapshot with `finished == true`.
    #[instrument(level = "debug", skip(self), fields(generation = self.generation))]
    pub fn step(&mut self) -> Snapshot {
        if self.is_finished() {
            return self.current_best();
        }

        self.population.rank_descending();

        let cities = &self.config.cities;
        let elite_size = self.config.elite_size;
        let mut next: Vec<Tour> = Vec::with_capacity(self.config.population_size);
        next.extend(self.population.tours()[..elite_size].iter().cloned());

        for _ in 0..self.config.offspring_count() {
            let p1 = self.config.selection.select(&self.population, &mut self.rng);
            let p2 = self.config.selection.select(&self.population, &mut self.rng);
            let order = segment_crossover(
                self.population.tours()[p1].order(),
                self.population.tours()[p2].order(),
                &mut self.rng,
            );

            let mut child = Tour::new(order);
            swap_mutation(child.order_mut(), self.config.mutation_rate, &mut self.rng);
            child.evaluate(cities);
            next.push(child);
        }

        self.population = Population::new(next);
        self.generation += 1;

        let snapshot = self.current_best();
        self.history.push(snapshot.best_length);
        debug!(
            best_length = snapshot.best_length,
            mean_length = self.population.mean_length().unwrap_or(f64::NAN),
            "generation advanced"
        );
        if snapshot.finished {
            info!(
                generations = self.generation,
                best_length = snapshot.best_length,
                "generation budget exhausted"
            );
        }
        snapshot
    }

    /// Snapshot of the current best tour, without advancing.
    pub fn current_best(&self) -> Snapshot {
        let best = self.best_tour();
        Snapshot {
            best_tour: best.cities(&self.config.cities),
            best_order: best.order().to_vec(),
            best_length: best.length().unwrap_or(f64::INFINITY),
            generation: self.generation,
            finished: self.is_finished(),
        }
    }

    /// Steps until the budget is spent.
    pub fn run(&mut self) -> RunResult {
        self.run_with(|_| {})
    }

    /// Steps until the budget is spent, passing every new snapshot to
    /// `on_generation`.
    pub fn run_with<F: FnMut(&Snapshot)>(&mut self, mut on_generation: F) -> RunResult {
        let start = self.generation;
        while !self.is_finished() {
            let snapshot = self.step();
            on_generation(&snapshot);
        }
        RunResult {
            best: self.current_best(),
            generations: self.generation - start,
            length_history: self.history.clone(),
        }
    }

    /// Whether the generation budget is exhausted.
    pub fn is_finished(&self) -> bool {
        self.generation >= self.config.max_generations
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The city set.
    pub fn cities(&self) -> &[City] {
        &self.config.cities
    }

    /// The current population. Every member is evaluated.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Best length of every generation so far, starting with generation 0.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    fn best_tour(&self) -> &Tour {
        self.population
            .best()
            .expect("population holds at least 2 tours")
    }
}
