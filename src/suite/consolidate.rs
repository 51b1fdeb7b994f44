//! Collapsing a final population into unique test cases.

use super::fitness::fitness;
use super::model::{Suite, TestCase};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the final population is reduced before the best suite is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consolidation {
    /// Every unique, large-enough test case of the whole population is
    /// pooled into a single suite, which is then the only candidate.
    ///
    /// This reproduces the established output of the optimizer: the
    /// reported test cases come from across all individuals, not from the
    /// single fittest one.
    #[default]
    Pooled,

    /// Each suite is deduplicated and filtered on its own and the fittest
    /// resulting suite is reported.
    PerIndividual,
}

/// Reduces a population to unique test cases with at least `min_steps` steps.
///
/// Uniqueness is by [`TestCase::dedup_key`]; the first occurrence in
/// population order is kept. With [`Consolidation::Pooled`] the result is
/// always exactly one suite (possibly empty). With
/// [`Consolidation::PerIndividual`] suites left empty are dropped.
pub fn consolidate(population: &[Suite], min_steps: usize, mode: Consolidation) -> Vec<Suite> {
    match mode {
        Consolidation::Pooled => {
            let mut seen = HashSet::new();
            let cases = population
                .iter()
                .flat_map(|suite| suite.cases.iter())
                .filter(|tc| keep(tc, min_steps, &mut seen))
                .cloned()
                .collect();
            vec![Suite::new(cases)]
        }
        Consolidation::PerIndividual => population
            .iter()
            .map(|suite| {
                let mut seen = HashSet::new();
                suite
                    .cases
                    .iter()
                    .filter(|tc| keep(tc, min_steps, &mut seen))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .filter(|cases| !cases.is_empty())
            .map(Suite::new)
            .collect(),
    }
}

fn keep(tc: &TestCase, min_steps: usize, seen: &mut HashSet<String>) -> bool {
    seen.insert(tc.dedup_key()) && tc.steps.len() >= min_steps
}

/// The fittest suite; the first one wins ties. `None` for an empty slice.
pub fn best_suite(population: &[Suite]) -> Option<&Suite> {
    let mut best: Option<(&Suite, f64)> = None;
    for suite in population {
        let f = fitness(suite);
        match best {
            Some((_, best_f)) if f <= best_f => {}
            _ => best = Some((suite, f)),
        }
    }
    best.map(|(suite, _)| suite)
}
