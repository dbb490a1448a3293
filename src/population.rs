//! Population of candidate tours.

use crate::geometry::City;
use crate::tour::Tour;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// A fixed-size collection of tours.
///
/// Members carry no order beyond what [`rank_descending`](Self::rank_descending)
/// imposes. Ranking and [`best`](Self::best) read cached lengths, so call
/// [`evaluate`](Self::evaluate) after adding or changing members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Population {
    tours: Vec<Tour>,
}

impl Population {
    /// Wraps existing tours.
    pub fn new(tours: Vec<Tour>) -> Self {
        Self { tours }
    }

    /// Draws `size` independent uniformly random permutations of
    /// `0..city_count`.
    ///
    /// Each permutation comes from a Fisher–Yates shuffle, so every ordering
    /// is equally likely. Members need not be distinct.
    pub fn random<R: Rng>(city_count: usize, size: usize, rng: &mut R) -> Self {
        let tours = (0..size)
            .map(|_| {
                let mut order: Vec<usize> = (0..city_count).collect();
                order.shuffle(rng);
                Tour::new(order)
            })
            .collect();
        Self { tours }
    }

    /// Fills the length cache of every member.
    pub fn evaluate(&mut self, cities: &[City]) {
        for tour in &mut self.tours {
            tour.evaluate(cities);
        }
    }

    /// Sorts members by fitness, best first (shortest length first).
    ///
    /// The sort is stable: equal-length tours keep their relative order.
    /// Unevaluated tours sort last.
    pub fn rank_descending(&mut self) {
        self.tours.sort_by(compare_by_length);
    }

    /// The member with the highest fitness.
    ///
    /// Among ties, the earliest member in current order wins, which is the
    /// member [`rank_descending`](Self::rank_descending) would put first.
    /// Returns `None` for an empty population.
    pub fn best(&self) -> Option<&Tour> {
        // `min_by` keeps the first of equal elements.
        self.tours.iter().min_by(|a, b| compare_by_length(a, b))
    }

    /// The member with the lowest fitness.
    pub fn worst(&self) -> Option<&Tour> {
        self.tours.iter().max_by(|a, b| compare_by_length(a, b))
    }

    /// Mean length over evaluated members.
    pub fn mean_length(&self) -> Option<f64> {
        let lengths: Vec<f64> = self.tours.iter().filter_map(Tour::length).collect();
        if lengths.is_empty() {
            return None;
        }
        Some(lengths.iter().sum::<f64>() / lengths.len() as f64)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Returns `true` if there are no members.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Members in current order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Member at `index`.
    pub fn get(&self, index: usize) -> Option<&Tour> {
        self.tours.get(index)
    }

    /// Iterates over members.
    pub fn iter(&self) -> std::slice::Iter<'_, Tour> {
        self.tours.iter()
    }

    /// Appends a member.
    pub fn push(&mut self, tour: Tour) {
        self.tours.push(tour);
    }

    /// Consumes the population, returning its members.
    pub fn into_tours(self) -> Vec<Tour> {
        self.tours
    }
}

impl FromIterator<Tour> for Population {
    fn from_iter<T: IntoIterator<Item = Tour>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Tour;
    type IntoIter = std::slice::Iter<'a, Tour>;

    fn into_iter(self) -> Self::IntoIter {
        self.tours.iter()
    }
}

/// Shorter first; tours without a cached length compare as worst.
fn compare_by_length(a: &Tour, b: &Tour) -> Ordering {
    let a = a.length().unwrap_or(f64::INFINITY);
    let b = b.length().unwrap_or(f64::INFINITY);
    a.total_cmp(&b)
}
