//! Run configuration, loaded from TOML.
//!
//! ```toml
//! catalog_path = "catalog.json"   # omit for the built-in catalog
//!
//! [ga]
//! population_size = 1000
//! max_generations = 1000
//! elite_ratio = 0.1
//! seed = 42
//!
//! [operators]
//! mutation_rate = 0.03
//! min_unique_test_steps = 3
//!
//! [output]
//! path = "test_cases.json"
//! max_test_cases = 15
//! consolidation = "pooled"        # or "per_individual"
//! ```
//!
//! Every key is optional; missing keys take the defaults shown.

use crate::error::{Result, SuiteError};
use crate::ga::GaConfig;
use crate::suite::{Consolidation, OperatorConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// JSON catalog to load. `None` selects the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub ga: GaConfig,
    pub operators: OperatorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the artifact is written.
    pub path: PathBuf,

    /// Most test cases reported.
    pub max_test_cases: usize,

    pub consolidation: Consolidation,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("test_cases.json"),
            max_test_cases: 15,
            consolidation: Consolidation::default(),
        }
    }
}

impl OptimizerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: OptimizerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// # Errors
    /// Returns [`SuiteError::InvalidConfig`] naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        self.ga.validate().map_err(SuiteError::InvalidConfig)?;
        self.operators.validate().map_err(SuiteError::InvalidConfig)?;
        if self.output.max_test_cases == 0 {
            return Err(SuiteError::InvalidConfig(
                "output.max_test_cases must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
