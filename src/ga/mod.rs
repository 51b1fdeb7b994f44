//! Genetic Algorithm engine.
//!
//! A generic generational loop built on a trait seam. Problems implement
//! [`GaProblem`], which specifies how to create, evaluate, crossover and
//! mutate individuals; the engine owns the population, elitism and
//! fitness-proportionate parent selection.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Loop parameters (population size, generations, elitism, seed)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final population, best individual and fitness history
//! - [`next_generation`]: One generation as a pure snapshot-to-snapshot step
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{next_generation, GaResult, GaRunner};
pub use selection::roulette;
pub use types::GaProblem;
