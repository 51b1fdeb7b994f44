//! Dependency-aware recombination of test cases and suites.

use super::model::{extend_unique, Step, Suite, TestCase};
use rand::Rng;
use std::collections::HashSet;

/// Recombines two test cases into one.
///
/// The offspring is built greedily:
///
/// 1. `first`'s steps, in order. A step is admitted if its id is not yet in
///    the offspring and either all its dependencies already are, or
///    `second` lists the step id among its cross-dependencies. A step
///    admitted this way skips the dependency check, so it may precede
///    (or appear without) the steps it depends on.
/// 2. `second`'s steps, in order. Steps whose id is in `first`'s
///    cross-dependencies are skipped; the rest are admitted if not yet
///    present and all their dependencies are.
///
/// The offspring's cross-dependencies are the deduplicated union of the
/// admitted steps' dependencies, and its id is `"<first>-<second>"`.
/// Step ids in the result are always unique.
pub fn crossover_test_case(first: &TestCase, second: &TestCase) -> TestCase {
    let mut steps: Vec<Step> = Vec::with_capacity(first.steps.len() + second.steps.len());
    let mut present: HashSet<&str> = HashSet::new();
    let mut dependencies: Vec<String> = Vec::new();

    let mut admit = |step: &Step, steps: &mut Vec<Step>| {
        steps.push(step.clone());
        extend_unique(&mut dependencies, &step.dependencies);
    };

    for step in &first.steps {
        if present.contains(step.id.as_str()) {
            continue;
        }
        let required_by_second = second.dependencies.contains(&step.id);
        if required_by_second || dependencies_met(step, &present) {
            admit(step, &mut steps);
            present.insert(step.id.as_str());
        }
    }

    for step in &second.steps {
        if first.dependencies.contains(&step.id) || present.contains(step.id.as_str()) {
            continue;
        }
        if dependencies_met(step, &present) {
            admit(step, &mut steps);
            present.insert(step.id.as_str());
        }
    }

    TestCase {
        id: format!("{}-{}", first.id, second.id),
        steps,
        dependencies,
    }
}

fn dependencies_met(step: &Step, present: &HashSet<&str>) -> bool {
    step.dependencies.iter().all(|d| present.contains(d.as_str()))
}

/// Produces one offspring suite from two parents.
///
/// The offspring starts as a copy of `first`. Each slot, with probability
/// `rate`, is crossed with `second`'s slot at the same index. The crossed
/// case replaces the slot only if no case of the offspring already has the
/// same step sequence, which keeps identical cases from crowding a suite.
/// Slots past the end of `second` (merging can shorten suites) pass
/// through unchanged.
pub fn crossover_suites<R: Rng>(first: &Suite, second: &Suite, rate: f64, rng: &mut R) -> Suite {
    let mut offspring = first.clone();

    for i in 0..offspring.cases.len() {
        if !rng.random_bool(rate) {
            continue;
        }
        let Some(partner) = second.cases.get(i) else {
            continue;
        };

        let candidate = crossover_test_case(&offspring.cases[i], partner);
        let duplicate = offspring
            .cases
            .iter()
            .any(|tc| tc.same_step_sequence(&candidate));
        if !duplicate {
            offspring.cases[i] = candidate;
        }
    }

    offspring
}
