//! Order-preserving segment crossover for tours.
//!
//! # Algorithm
//!
//! 1. Pick `start` uniformly from `[0, n]` and `end` uniformly from
//!    `[start, n]`. The segment `[start, end)` may be empty or cover the
//!    whole tour.
//! 2. Copy `parent1[start..end]` into the same child positions.
//! 3. Walk `parent2` in order; every city not yet in the child goes into the
//!    next unset child position, scanning left to right.
//!
//! The child keeps parent1's segment in place and parent2's relative order
//! everywhere else.
//!
//! # Complexity
//! O(n) time, O(n) space
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::Rng;
use tracing::trace;

/// Produces one child from two parents with randomly drawn cut points.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn segment_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    let (start, end) = random_cut(n, rng);
    trace!(start, end, n, "segment crossover");
    segment_crossover_at(parent1, parent2, start, end)
}

/// Produces one child keeping `parent1[start..end]` in place.
///
/// `start == end` yields parent2's order; `(0, n)` yields parent1.
///
/// # Panics
/// Panics if the parents have different lengths, if `start > end`, if
/// `end > n`, or if the parents are not permutations of `0..n`.
pub fn segment_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(
        start <= end && end <= n,
        "invalid segment [{start}, {end}) for length {n}"
    );

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];

    for i in start..end {
        child[i] = Some(parent1[i]);
        placed[parent1[i]] = true;
    }

    // Positions before `cursor` are known to be filled.
    let mut cursor = 0;
    for &city in parent2 {
        if placed[city] {
            continue;
        }
        while child[cursor].is_some() {
            cursor += 1;
        }
        child[cursor] = Some(city);
        placed[city] = true;
    }

    child
        .into_iter()
        .map(|slot| slot.expect("both parents are permutations of the same cities"))
        .collect()
}

/// Picks `start` in `[0, n]`, then `end` in `[start, n]`.
fn random_cut<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let start = rng.random_range(0..=n);
    let end = rng.random_range(start..=n);
    (start, end)
}
