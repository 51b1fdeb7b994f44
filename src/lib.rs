//! Evolutionary regrouping of dependency-constrained test steps.
//!
//! Given a catalog of test cases (ordered steps with execution costs and
//! step-level dependencies), `suite-evolve` searches for a regrouping that
//! covers as many steps as possible per unit of execution time. It never
//! runs tests; it only rearranges and scores their descriptions.
//!
//! - **GA engine** ([`ga`]): generic generational loop with elitism and
//!   roulette wheel selection, driven through the [`ga::GaProblem`] trait.
//! - **Suite domain** ([`suite`]): steps, test cases, the catalog, fitness,
//!   dependency-aware crossover, step mutation and dependency merging.
//! - **Reporting** ([`report`]): the best suite as a JSON artifact.
//!
//! [`optimize`] wires the three together; the `suite-evolve` binary adds
//! configuration loading and writes the artifact.
//!
//! # Example
//!
//! ```no_run
//! use suite_evolve::{optimize, Catalog, OptimizerConfig};
//!
//! let catalog = Catalog::builtin()?;
//! let mut config = OptimizerConfig::default();
//! config.ga = config.ga.with_seed(42);
//! let result = optimize(&catalog, &config)?;
//! suite_evolve::report::write_artifact(&config.output.path, &result.artifact)?;
//! # Ok::<(), suite_evolve::SuiteError>(())
//! ```

pub mod config;
pub mod error;
pub mod ga;
mod optimizer;
pub mod random;
pub mod report;
pub mod suite;

pub use config::{OptimizerConfig, OutputConfig};
pub use error::{Result, SuiteError};
pub use optimizer::{optimize, Optimization};
pub use suite::Catalog;
