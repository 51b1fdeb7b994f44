//! Candidate representation: steps, test cases and suites.

use serde::{Deserialize, Serialize};

/// An atomic test action.
///
/// Step identifiers are unique inside one test case but are reused across
/// test cases (many cases start with the same login step). Steps are plain
/// values: operators clone them, never edit shared instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,

    /// Cost of executing the step. Positive for every catalog step.
    #[serde(rename = "executionTime")]
    pub execution_time: f64,

    /// Step identifiers that must already have run.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Step {
    pub fn new(id: impl Into<String>, execution_time: f64, dependencies: &[&str]) -> Self {
        Self {
            id: id.into(),
            execution_time,
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// A named, ordered group of steps.
///
/// `dependencies` holds the cross-dependencies accumulated by crossover:
/// step identifiers, possibly owned by other test cases, that this case
/// relies on. They drive the dependency merge during mutation. Catalog
/// test cases start with none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub steps: Vec<Step>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TestCase {
    /// Creates a test case with no cross-dependencies.
    pub fn new(id: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            id: id.into(),
            steps,
            dependencies: Vec::new(),
        }
    }

    /// Sum of the execution times of all steps.
    pub fn total_time(&self) -> f64 {
        self.steps.iter().map(|s| s.execution_time).sum()
    }

    pub fn has_step(&self, id: &str) -> bool {
        self.steps.iter().any(|s| s.id == id)
    }

    /// Number of distinct step identifiers.
    #[cfg(test)]
    pub(crate) fn unique_step_count(&self) -> usize {
        use std::collections::HashSet;
        self.steps.iter().map(|s| s.id.as_str()).collect::<HashSet<_>>().len()
    }

    /// Whether both cases list the same step identifiers in the same order.
    pub fn same_step_sequence(&self, other: &TestCase) -> bool {
        self.steps.len() == other.steps.len()
            && self.steps.iter().zip(&other.steps).all(|(a, b)| a.id == b.id)
    }

    /// Whether any cross-dependency names a step of `other`.
    pub fn depends_on(&self, other: &TestCase) -> bool {
        self.dependencies.iter().any(|d| other.has_step(d))
    }

    /// Identity used when collapsing a population into unique test cases:
    /// the case id, its step ids and its cross-dependency ids.
    pub fn dedup_key(&self) -> String {
        let steps: Vec<&str> = self.steps.iter().map(|s| s.id.as_str()).collect();
        format!(
            "{}-{}-{}",
            self.id,
            steps.join("-"),
            self.dependencies.join("-")
        )
    }

    /// Concatenates two cases: steps of `self` then `other`, the union of
    /// their cross-dependencies and the ids joined by `-`.
    pub fn merge(&self, other: &TestCase) -> TestCase {
        let mut steps = self.steps.clone();
        steps.extend(other.steps.iter().cloned());

        let mut dependencies = self.dependencies.clone();
        extend_unique(&mut dependencies, &other.dependencies);

        TestCase {
            id: format!("{}-{}", self.id, other.id),
            steps,
            dependencies,
        }
    }
}

/// One candidate test suite: an ordered sequence of test cases.
///
/// Order matters for crossover, which pairs cases by position, but not
/// for fitness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suite {
    pub cases: Vec<TestCase>,
}

impl Suite {
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    /// Total number of steps across all cases.
    pub fn coverage(&self) -> usize {
        self.cases.iter().map(|tc| tc.steps.len()).sum()
    }

    /// Total execution time across all cases.
    pub fn total_time(&self) -> f64 {
        self.cases.iter().map(TestCase::total_time).sum()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Appends the items of `extra` missing from `target`, keeping first-seen order.
pub(crate) fn extend_unique(target: &mut Vec<String>, extra: &[String]) {
    for item in extra {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}
