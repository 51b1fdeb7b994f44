//! Coverage-per-time scoring.

use super::model::Suite;
use crate::error::{Result, SuiteError};

/// Fitness of a suite: total number of steps divided by total execution time.
///
/// Higher is better: broad coverage bought cheaply. A degenerate suite
/// (empty, or with a total time that is not a positive finite number)
/// scores `0.0`, which roulette selection treats as a zero-width slice.
pub fn fitness(suite: &Suite) -> f64 {
    checked_fitness(suite).unwrap_or(0.0)
}

/// Like [`fitness`], but reports degenerate suites.
///
/// # Errors
/// Returns [`SuiteError::DegenerateIndividual`] when the total execution
/// time is not a positive finite number.
pub fn checked_fitness(suite: &Suite) -> Result<f64> {
    let total_time = suite.total_time();
    if !(total_time.is_finite() && total_time > 0.0) {
        return Err(SuiteError::DegenerateIndividual { total_time });
    }
    Ok(suite.coverage() as f64 / total_time)
}
