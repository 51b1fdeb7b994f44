//! Output artifact: the winning suite as a JSON document.

use crate::error::{Result, SuiteError};
use crate::suite::Suite;
use serde::{Deserialize, Serialize, Serializer};
use std::fs;
use std::path::Path;

/// One reported test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactEntry {
    pub id: String,

    /// `GTC-<n>`, numbered from 1 in report order.
    #[serde(rename = "generatedTestId")]
    pub generated_test_id: String,

    pub steps: Vec<ArtifactStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactStep {
    pub id: String,

    #[serde(rename = "executionTime", serialize_with = "serialize_time")]
    pub execution_time: f64,
}

/// Whole-number times are written as integers (`3`, not `3.0`).
fn serialize_time<S: Serializer>(time: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if time.fract() == 0.0 && time.abs() <= MAX_EXACT {
        serializer.serialize_i64(*time as i64)
    } else {
        serializer.serialize_f64(*time)
    }
}

/// The first `max_entries` test cases of `suite`, numbered `GTC-1`, `GTC-2`, ...
pub fn build_artifact(suite: &Suite, max_entries: usize) -> Vec<ArtifactEntry> {
    suite
        .cases
        .iter()
        .take(max_entries)
        .enumerate()
        .map(|(i, tc)| ArtifactEntry {
            id: tc.id.clone(),
            generated_test_id: format!("GTC-{}", i + 1),
            steps: tc
                .steps
                .iter()
                .map(|s| ArtifactStep {
                    id: s.id.clone(),
                    execution_time: s.execution_time,
                })
                .collect(),
        })
        .collect()
}

/// Renders the artifact as JSON with two-space indentation.
pub fn render_artifact(entries: &[ArtifactEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Writes the artifact to `path`, replacing any existing file.
///
/// # Errors
/// Returns [`SuiteError::WriteFailure`] if the file cannot be written.
pub fn write_artifact(path: &Path, entries: &[ArtifactEntry]) -> Result<()> {
    let json = render_artifact(entries)?;
    fs::write(path, json).map_err(|source| SuiteError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::{Step, TestCase};

    fn suite_of(n: usize) -> Suite {
        Suite::new(
            (0..n)
                .map(|i| {
                    TestCase::new(
                        format!("Case{i}"),
                        vec![Step::new("login", 1.0, &[]), Step::new("check", 2.5, &["login"])],
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_entries_are_numbered_and_capped() {
        let entries = build_artifact(&suite_of(20), 15);
        assert_eq!(entries.len(), 15);
        assert_eq!(entries[0].generated_test_id, "GTC-1");
        assert_eq!(entries[14].generated_test_id, "GTC-15");
        assert_eq!(entries[14].id, "Case14");
    }

    #[test]
    fn test_fewer_cases_than_cap() {
        let entries = build_artifact(&suite_of(2), 15);
        assert_eq!(entries.len(), 2);
        assert!(build_artifact(&Suite::default(), 15).is_empty());
    }

    #[test]
    fn test_render_format() {
        let entries = build_artifact(&suite_of(1), 15);
        let json = render_artifact(&entries).unwrap();
        let expected = r#"[
  {
    "id": "Case0",
    "generatedTestId": "GTC-1",
    "steps": [
      {
        "id": "login",
        "executionTime": 1
      },
      {
        "id": "check",
        "executionTime": 2.5
      }
    ]
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_rendered_artifact_parses_back() {
        let entries = build_artifact(&suite_of(3), 15);
        let json = render_artifact(&entries).unwrap();
        let parsed: Vec<ArtifactEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_cases.json");
        fs::write(&path, "stale content that is longer than the new artifact".repeat(50)).unwrap();

        write_artifact(&path, &build_artifact(&suite_of(1), 15)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with('['));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_write_failure_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("test_cases.json");

        let err = write_artifact(&path, &[]).unwrap_err();
        match err {
            SuiteError::WriteFailure { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected WriteFailure, got {other:?}"),
        }
    }
}
