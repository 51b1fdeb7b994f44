//! The test-suite search as a [`GaProblem`].

use super::catalog::Catalog;
use super::crossover::crossover_suites;
use super::fitness::fitness;
use super::model::Suite;
use super::mutation::mutate_suite;
use crate::error::{Result, SuiteError};
use crate::ga::GaProblem;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probabilities and limits used by the suite operators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorConfig {
    /// Per-slot probability of crossing a test case, of mutating a test
    /// case's steps, and per-position probability of swapping a step.
    pub mutation_rate: f64,

    /// Fewest distinct steps a mutated test case keeps (pool permitting),
    /// and fewest steps a test case needs to be reported.
    pub min_unique_test_steps: usize,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.03,
            min_unique_test_steps: 3,
        }
    }
}

impl OperatorConfig {
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_min_unique_test_steps(mut self, n: usize) -> Self {
        self.min_unique_test_steps = n;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be within 0.0..=1.0, got {}",
                self.mutation_rate
            ));
        }
        Ok(())
    }
}

/// Searches for a regrouping of the catalog's test cases.
///
/// Every initial individual is a copy of the catalog. Fitness is
/// [`fitness`]; crossover is [`crossover_suites`]; mutation is
/// [`mutate_suite`].
#[derive(Debug, Clone)]
pub struct SuiteProblem {
    catalog: Catalog,
    operators: OperatorConfig,
}

impl SuiteProblem {
    /// # Errors
    /// Returns [`SuiteError::InvalidConfig`] if the operator rates are out of range.
    pub fn new(catalog: Catalog, operators: OperatorConfig) -> Result<Self> {
        operators.validate().map_err(SuiteError::InvalidConfig)?;
        Ok(Self { catalog, operators })
    }
}

impl GaProblem for SuiteProblem {
    type Individual = Suite;

    fn create_individual<R: Rng>(&self, _rng: &mut R) -> Suite {
        self.catalog.to_suite()
    }

    fn evaluate(&self, suite: &Suite) -> f64 {
        fitness(suite)
    }

    fn crossover<R: Rng>(&self, parent1: &Suite, parent2: &Suite, rng: &mut R) -> Suite {
        crossover_suites(parent1, parent2, self.operators.mutation_rate, rng)
    }

    fn mutate<R: Rng>(&self, suite: &mut Suite, rng: &mut R) {
        mutate_suite(
            suite,
            self.operators.mutation_rate,
            self.operators.min_unique_test_steps,
            rng,
        );
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        debug!("generation {generation}: best fitness {best_fitness:.6}");
    }
}
