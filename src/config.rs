//! Engine configuration.
//!
//! [`EngineConfig`] holds the city set and every parameter that controls the
//! generational loop.

use crate::error::{EngineError, TspResult};
use crate::geometry::City;
use crate::selection::Selection;

/// Configuration for the evolution engine.
///
/// # Defaults
///
/// ```
/// use u_tsp::{City, EngineConfig};
///
/// let config = EngineConfig::new(vec![City::new(0.0, 0.0), City::new(1.0, 1.0)]);
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.elite_size, 10);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::{City, EngineConfig, Selection};
///
/// let cities = vec![City::new(0.0, 0.0), City::new(0.0, 10.0), City::new(10.0, 10.0)];
/// let config = EngineConfig::new(cities)
///     .with_population_size(80)
///     .with_elite_size(8)
///     .with_mutation_rate(0.02)
///     .with_max_generations(300)
///     .with_selection(Selection::Uniform)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Cities to visit. Tours are permutations of their indices.
    pub cities: Vec<City>,

    /// Number of tours per generation. At least 2.
    pub population_size: usize,

    /// Number of top-ranked tours copied unchanged into the next generation.
    ///
    /// Must not exceed `population_size`. With at least one elite the best
    /// tour length never gets worse from one generation to the next.
    pub elite_size: usize,

    /// Per-position swap probability applied to every child (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of generations before the engine stops advancing.
    pub max_generations: usize,

    /// Parent selection policy.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Creates a configuration for `cities` with default parameters:
    /// population 50, 10 elites, mutation rate 0.01, 1000 generations,
    /// uniform parent selection.
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities,
            population_size: 50,
            elite_size: 10,
            mutation_rate: 0.01,
            max_generations: 1000,
            selection: Selection::default(),
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the per-position mutation probability.
    ///
    /// Unlike the other setters this does not clamp; out-of-range values are
    /// reported by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the parent selection policy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for small instances and quick previews.
    ///
    /// - Population: 50, Elites: 10, Generations: 200
    pub fn fast(cities: Vec<City>) -> Self {
        Self {
            max_generations: 200,
            ..Self::new(cities)
        }
    }

    /// Preset balancing quality and time per run.
    ///
    /// - Population: 100, Elites: 20, Generations: 500
    pub fn balanced(cities: Vec<City>) -> Self {
        Self {
            population_size: 100,
            elite_size: 20,
            max_generations: 500,
            ..Self::new(cities)
        }
    }

    /// Preset for larger instances.
    ///
    /// - Population: 200, Elites: 30, Generations: 2000
    pub fn quality(cities: Vec<City>) -> Self {
        Self {
            population_size: 200,
            elite_size: 30,
            max_generations: 2000,
            ..Self::new(cities)
        }
    }

    /// Selects a preset from the number of cities.
    ///
    /// - fewer than 20 → [`fast`](Self::fast)
    /// - 20 to 99 → [`balanced`](Self::balanced)
    /// - 100 or more → [`quality`](Self::quality)
    pub fn auto_select(cities: Vec<City>) -> Self {
        match cities.len() {
            0..=19 => Self::fast(cities),
            20..=99 => Self::balanced(cities),
            _ => Self::quality(cities),
        }
    }

    /// Number of children bred per generation.
    pub fn offspring_count(&self) -> usize {
        self.population_size.saturating_sub(self.elite_size)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfiguration`] for out-of-range parameters,
    ///   fewer than 2 cities, or non-finite coordinates.
    /// - [`EngineError::DegenerateTour`] when every city shares one
    ///   coordinate, since all tours would have zero length.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size < 2 {
            return Err(EngineError::invalid("population_size must be at least 2"));
        }
        if self.elite_size > self.population_size {
            return Err(EngineError::invalid(format!(
                "elite_size ({}) exceeds population_size ({})",
                self.elite_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EngineError::invalid(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.selection == Selection::Tournament(0) {
            return Err(EngineError::invalid("tournament size must be at least 1"));
        }
        if self.cities.len() < 2 {
            return Err(EngineError::invalid(format!(
                "at least 2 cities are required, got {}",
                self.cities.len()
            )));
        }
        if let Some(i) = self.cities.iter().position(|c| !c.is_finite()) {
            return Err(EngineError::invalid(format!(
                "city {i} has a non-finite coordinate"
            )));
        }
        let first = self.cities[0];
        if self.cities.iter().all(|c| *c == first) {
            return Err(EngineError::DegenerateTour {
                cities: self.cities.len(),
            });
        }
        Ok(())
    }
}
