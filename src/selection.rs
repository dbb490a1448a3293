//! Parent selection policies.
//!
//! The default, [`Selection::Uniform`], draws parents uniformly at random
//! with replacement and ignores fitness entirely; elitism is then the only
//! source of selection pressure. The fitness-aware variants are opt-in and
//! change how quickly a run converges.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::population::Population;
use rand::Rng;

/// Selection strategy for choosing crossover parents.
///
/// # Examples
///
/// ```
/// use u_tsp::Selection;
///
/// assert_eq!(Selection::default(), Selection::Uniform);
/// let stronger = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Every member is equally likely, regardless of fitness.
    #[default]
    Uniform,

    /// Pick `k` members uniformly at random, keep the shortest.
    ///
    /// `k = 1` behaves like [`Selection::Uniform`].
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection on `1 / length`.
    Roulette,
}

impl Selection {
    /// Selects a parent index from an evaluated population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &Population, rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Uniform => rng.random_range(0..population.len()),
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
        }
    }
}

fn tournament<R: Rng>(population: &Population, k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let length = |i: usize| {
        population.tours()[i]
            .length()
            .unwrap_or(f64::INFINITY)
    };

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if length(idx) < length(best_idx) {
            best_idx = idx;
        }
    }
    best_idx
}

fn roulette<R: Rng>(population: &Population, rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let weights: Vec<f64> = population
        .iter()
        .map(|tour| tour.fitness().filter(|f| f.is_finite()).unwrap_or(0.0))
        .collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
