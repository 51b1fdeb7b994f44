//! Error type shared by the catalog, configuration and report layers.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by `suite-evolve`.
///
/// The evolutionary operators themselves never fail: randomness-driven edge
/// cases (all-zero fitness, an exhausted mutation pool) are resolved locally.
/// Errors only come from the inputs and outputs around the search.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// The catalog is structurally unusable.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// An individual whose total execution time is not a positive number.
    #[error("degenerate individual: total execution time {total_time}")]
    DegenerateIndividual { total_time: f64 },

    /// The output artifact could not be persisted.
    #[error("failed to write artifact to '{}': {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SuiteError>;
