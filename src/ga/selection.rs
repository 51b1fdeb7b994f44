//! Fitness-proportionate parent selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// Roulette wheel selection over a parallel fitness array.
///
/// Draws `r` uniformly from `[0, total)` and returns the first index whose
/// cumulative fitness exceeds `r`. Higher fitness means a wider slice of
/// the wheel.
///
/// Fallbacks:
/// - When the total is not a positive finite number (all-zero fitness, or a
///   NaN slipped in), every index is equally likely.
/// - When floating-point rounding leaves no cumulative sum above the draw,
///   the last index is returned.
///
/// # Complexity
/// O(n) per selection (linear scan)
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn roulette<R: Rng>(fitnesses: &[f64], rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");

    let n = fitnesses.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = fitnesses.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &f) in fitnesses.iter().enumerate() {
        cumulative += f;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
