//! Tours and their fitness.
//!
//! A [`Tour`] is a permutation of city indices `0..n` describing a closed
//! route that returns to its starting city. Tour length is a pure function
//! of the order; [`Tour`] caches it and drops the cache on every mutable
//! access to the order.

use crate::geometry::{distance, City};

/// Length of the closed route visiting `cities` in `order`.
///
/// Sums `distance(cities[order[i]], cities[order[(i + 1) % n]])`.
/// Returns `0.0` for fewer than two stops.
///
/// # Panics
/// Panics if `order` contains an index outside `cities`.
pub fn tour_length(cities: &[City], order: &[usize]) -> f64 {
    let n = order.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| distance(cities[order[i]], cities[order[(i + 1) % n]]))
        .sum()
}

/// Length of the closed route through an explicit sequence of cities.
pub fn route_length(route: &[City]) -> f64 {
    let n = route.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|i| distance(route[i], route[(i + 1) % n])).sum()
}

/// Fitness of a tour with the given length: `1 / length`.
///
/// Higher is better. Only meaningful for `length > 0`; the engine rejects
/// city sets whose tours could have zero length.
#[inline]
pub fn fitness(length: f64) -> f64 {
    1.0 / length
}

/// One candidate route.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    length: Option<f64>,
}

impl Tour {
    /// Wraps a permutation of city indices. The length is not yet known.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            length: None,
        }
    }

    /// The tour `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }

    /// Visiting order as city indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Mutable access to the visiting order. Clears the cached length.
    pub fn order_mut(&mut self) -> &mut [usize] {
        self.length = None;
        &mut self.order
    }

    /// Consumes the tour, returning its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for a tour with no stops.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cached length, if the tour has been evaluated since its last change.
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    /// Cached fitness, if the tour has been evaluated since its last change.
    pub fn fitness(&self) -> Option<f64> {
        self.length.map(fitness)
    }

    /// Computes (or reuses) the tour length against `cities`.
    pub fn evaluate(&mut self, cities: &[City]) -> f64 {
        match self.length {
            Some(len) => len,
            None => {
                let len = tour_length(cities, &self.order);
                self.length = Some(len);
                len
            }
        }
    }

    /// The route as coordinates, in visiting order.
    pub fn cities(&self, cities: &[City]) -> Vec<City> {
        self.order.iter().map(|&i| cities[i]).collect()
    }

    /// Returns `true` if the order is a permutation of `0..n`.
    pub fn is_permutation(&self, n: usize) -> bool {
        is_permutation(&self.order, n)
    }
}

/// Returns `true` if `order` contains every index of `0..n` exactly once.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in order {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}
