//! Swap mutation.

use rand::Rng;

/// Per-position swap mutation.
///
/// Each position `i` is, with probability `rate`, swapped with a uniformly
/// random position `j` in `0..n`. `j == i` leaves the tour unchanged. The
/// result is always a permutation of the input.
///
/// `rate` is clamped to `[0, 1]`; a rate of zero never touches the tour.
pub fn swap_mutation<R: Rng>(order: &mut [usize], rate: f64, rng: &mut R) {
    let n = order.len();
    if n < 2 || rate.is_nan() || rate <= 0.0 {
        return;
    }
    let rate = rate.min(1.0);
    for i in 0..n {
        if rng.random_bool(rate) {
            let j = rng.random_range(0..n);
            order.swap(i, j);
        }
    }
}
