//! The fixed catalog of test cases the search starts from.

use super::model::{Suite, TestCase};
use crate::error::{Result, SuiteError};
use log::info;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// A validated set of test cases.
///
/// The JSON form is an array of `{ "id", "steps": [{ "id", "executionTime",
/// "dependencies" }] }` objects. Construction always validates, so a
/// `Catalog` value is known to be usable:
///
/// - at least one test case, each with a unique id and at least one step
/// - step ids unique within their test case
/// - every execution time positive and finite
/// - every step dependency names a step somewhere in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    test_cases: Vec<TestCase>,
}

impl Catalog {
    /// Validates and wraps a list of test cases.
    ///
    /// Cross-dependencies present on the input are discarded; the search
    /// always starts from empty ones.
    ///
    /// # Errors
    /// Returns [`SuiteError::InvalidCatalog`] describing the first problem found.
    pub fn new(test_cases: Vec<TestCase>) -> Result<Self> {
        validate(&test_cases)?;
        let test_cases = test_cases
            .into_iter()
            .map(|tc| TestCase::new(tc.id, tc.steps))
            .collect();
        Ok(Self { test_cases })
    }

    /// Parses a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let test_cases: Vec<TestCase> = serde_json::from_str(json)?;
        Self::new(test_cases)
    }

    /// Reads a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        info!("Loading catalog from '{}'...", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    /// A fresh suite holding a copy of every catalog test case, in catalog
    /// order, with empty cross-dependencies.
    pub fn to_suite(&self) -> Suite {
        Suite::new(self.test_cases.clone())
    }
}

fn validate(test_cases: &[TestCase]) -> Result<()> {
    if test_cases.is_empty() {
        return Err(SuiteError::InvalidCatalog("catalog has no test cases".into()));
    }

    let known_steps: HashSet<&str> = test_cases
        .iter()
        .flat_map(|tc| tc.steps.iter().map(|s| s.id.as_str()))
        .collect();
    let mut case_ids = HashSet::new();

    for tc in test_cases {
        if !case_ids.insert(tc.id.as_str()) {
            return Err(SuiteError::InvalidCatalog(format!(
                "duplicate test case id '{}'",
                tc.id
            )));
        }
        if tc.steps.is_empty() {
            return Err(SuiteError::InvalidCatalog(format!(
                "test case '{}' has no steps",
                tc.id
            )));
        }

        let mut step_ids = HashSet::new();
        for step in &tc.steps {
            if !step_ids.insert(step.id.as_str()) {
                return Err(SuiteError::InvalidCatalog(format!(
                    "step '{}' appears twice in test case '{}'",
                    step.id, tc.id
                )));
            }
            if !(step.execution_time.is_finite() && step.execution_time > 0.0) {
                return Err(SuiteError::InvalidCatalog(format!(
                    "step '{}' in test case '{}' has execution time {}",
                    step.id, tc.id, step.execution_time
                )));
            }
            if let Some(missing) = step
                .dependencies
                .iter()
                .find(|d| !known_steps.contains(d.as_str()))
            {
                return Err(SuiteError::InvalidCatalog(format!(
                    "step '{}' in test case '{}' depends on unknown step '{}'",
                    step.id, tc.id, missing
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::model::Step;

    fn assert_invalid(result: Result<Catalog>, needle: &str) {
        match result {
            Err(SuiteError::InvalidCatalog(msg)) => {
                assert!(msg.contains(needle), "unexpected message: {msg}")
            }
            other => panic!("expected InvalidCatalog, got {other:?}"),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.test_cases().len(), 17);
        assert_eq!(catalog.test_cases()[0].id, "LoginAsCustomer");
        assert_eq!(catalog.test_cases()[0].steps[0].id, "loginAsCustomer");
    }

    #[test]
    fn test_to_suite_starts_without_cross_dependencies() {
        let suite = Catalog::builtin().unwrap().to_suite();
        assert_eq!(suite.len(), 17);
        assert!(suite.cases.iter().all(|tc| tc.dependencies.is_empty()));
    }

    #[test]
    fn test_input_cross_dependencies_are_dropped() {
        let json = r#"[{"id":"A","steps":[{"id":"a","executionTime":1}],"dependencies":["a"]}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.test_cases()[0].dependencies.is_empty());
    }

    #[test]
    fn test_unknown_dependency_rejected() {
        let json = r#"[{"id":"A","steps":[{"id":"a","executionTime":1,"dependencies":["ghost"]}]}]"#;
        assert_invalid(Catalog::from_json(json), "unknown step 'ghost'");
    }

    #[test]
    fn test_dependency_on_other_case_accepted() {
        let json = r#"[
            {"id":"Login","steps":[{"id":"login","executionTime":1}]},
            {"id":"Use","steps":[{"id":"use","executionTime":2,"dependencies":["login"]}]}
        ]"#;
        assert!(Catalog::from_json(json).is_ok());
    }

    #[test]
    fn test_non_positive_time_rejected() {
        let tc = TestCase::new("A", vec![Step::new("a", 0.0, &[])]);
        assert_invalid(Catalog::new(vec![tc]), "execution time 0");
        let tc = TestCase::new("A", vec![Step::new("a", f64::NAN, &[])]);
        assert_invalid(Catalog::new(vec![tc]), "execution time");
    }

    #[test]
    fn test_structural_problems_rejected() {
        assert_invalid(Catalog::new(vec![]), "no test cases");
        assert_invalid(Catalog::new(vec![TestCase::new("A", vec![])]), "no steps");

        let tc = TestCase::new("A", vec![Step::new("a", 1.0, &[]), Step::new("a", 2.0, &[])]);
        assert_invalid(Catalog::new(vec![tc]), "appears twice");

        let a = TestCase::new("A", vec![Step::new("a", 1.0, &[])]);
        assert_invalid(Catalog::new(vec![a.clone(), a]), "duplicate test case id");
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(SuiteError::Json(_))
        ));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"[{"id":"A","steps":[{"id":"a","executionTime":2}]}]"#).unwrap();
        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.test_cases()[0].id, "A");
    }

    #[test]
    fn test_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::from_path(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(SuiteError::Io(_))));
    }
}
