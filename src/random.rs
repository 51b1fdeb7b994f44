//! Seeded random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible RNG from a seed.
///
/// Every stochastic decision in a run draws from the single generator
/// returned here, so a fixed seed reproduces the run exactly.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
