//! Step shuffling and dependency-driven merging.

use super::model::{Step, Suite, TestCase};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Mutates a suite in place.
///
/// Each case, with probability `rate`, has its steps perturbed by
/// [`mutate_steps`]. Afterwards cases that reference each other through
/// cross-dependencies are merged with [`merge_dependent`].
pub fn mutate_suite<R: Rng>(suite: &mut Suite, rate: f64, min_unique_steps: usize, rng: &mut R) {
    for tc in suite.cases.iter_mut() {
        if rng.random_bool(rate) {
            tc.steps = mutate_steps(&tc.steps, rate, min_unique_steps, rng);
        }
    }

    let cases = std::mem::take(&mut suite.cases);
    suite.cases = merge_dependent(cases);
}

/// Perturbs a step sequence.
///
/// A shuffled copy of `steps` is drawn; each position independently, with
/// probability `rate`, takes the shuffled copy's step. Repeated ids are
/// then dropped (first occurrence wins). If fewer than `min_unique_steps`
/// remain, steps from the shuffled pool that are not yet present are
/// appended until the minimum is met or the pool runs out.
///
/// The result never has fewer distinct ids than
/// `min(min_unique_steps, distinct ids of steps)`.
pub fn mutate_steps<R: Rng>(
    steps: &[Step],
    rate: f64,
    min_unique_steps: usize,
    rng: &mut R,
) -> Vec<Step> {
    let mut shuffled = steps.to_vec();
    shuffled.shuffle(rng);

    let mut mutated: Vec<Step> = Vec::with_capacity(steps.len());
    for (original, replacement) in steps.iter().zip(&shuffled) {
        if rng.random_bool(rate) {
            mutated.push(replacement.clone());
        } else {
            mutated.push(original.clone());
        }
    }

    let mut seen: HashSet<String> = HashSet::new();
    mutated.retain(|s| seen.insert(s.id.clone()));

    for step in &shuffled {
        if mutated.len() >= min_unique_steps {
            break;
        }
        if seen.insert(step.id.clone()) {
            mutated.push(step.clone());
        }
    }

    mutated
}

/// Merges test cases linked by cross-dependencies until none are.
///
/// Two cases are linked when either one's cross-dependencies name a step
/// of the other. The first linked pair `(i, j)`, `i < j`, in scan order is
/// replaced by `cases[i].merge(&cases[j])` at index `i`; the list is then
/// rebuilt and scanned again from the start. Each pass removes one case,
/// so this terminates, and the result has no linked pair left. On a list
/// with no links it returns the input unchanged.
pub fn merge_dependent(cases: Vec<TestCase>) -> Vec<TestCase> {
    let mut working = cases;

    while let Some((i, j)) = find_linked_pair(&working) {
        let mut merged = Some(working[i].merge(&working[j]));
        let mut next = Vec::with_capacity(working.len() - 1);
        for (k, tc) in working.into_iter().enumerate() {
            if k == i {
                next.extend(merged.take());
            } else if k != j {
                next.push(tc);
            }
        }
        working = next;
    }

    working
}

fn find_linked_pair(cases: &[TestCase]) -> Option<(usize, usize)> {
    for i in 0..cases.len() {
        for j in (i + 1)..cases.len() {
            if cases[i].depends_on(&cases[j]) || cases[j].depends_on(&cases[i]) {
                return Some((i, j));
            }
        }
    }
    None
}
