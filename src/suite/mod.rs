//! Test-suite optimization domain.
//!
//! A [`Suite`] is an ordered list of [`TestCase`]s, each an ordered list
//! of [`Step`]s with execution costs and dependencies. The search looks
//! for regroupings of the [`Catalog`] that cover many steps per unit of
//! execution time.
//!
//! # Submodules
//!
//! - [`catalog`]: Loading and validating the starting test cases
//! - [`fitness`]: Coverage-per-time scoring
//! - [`crossover`]: Dependency-aware recombination
//! - [`mutation`]: Step shuffling and dependency-driven merging
//! - [`consolidate`]: Reducing the final population to unique test cases

pub mod catalog;
pub mod consolidate;
pub mod crossover;
pub mod fitness;
mod model;
pub mod mutation;
mod problem;

pub use catalog::Catalog;
pub use consolidate::{best_suite, consolidate, Consolidation};
pub use fitness::{checked_fitness, fitness};
pub use model::{Step, Suite, TestCase};
pub use problem::{OperatorConfig, SuiteProblem};
