//! GA configuration.
//!
//! [`GaConfig`] holds the parameters that drive the generational loop.

use serde::{Deserialize, Serialize};

/// Configuration for the generational loop.
///
/// Controls population size, generation count, elitism, evaluation
/// parallelism and seeding. Operator probabilities live with the problem
/// definition, not here.
///
/// # Defaults
///
/// ```
/// use suite_evolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use suite_evolve::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_max_generations(50)
///     .with_elite_ratio(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals in the population, kept constant every generation.
    pub population_size: usize,

    /// Number of generations to run. There is no early exit.
    pub max_generations: usize,

    /// Fraction of the population carried unchanged into the next generation.
    ///
    /// The elite count is `round(population_size * elite_ratio)`.
    pub elite_ratio: f64,

    /// Whether to evaluate fitness in parallel.
    ///
    /// Only honored when the crate is built with the `parallel` feature.
    /// Population order is preserved either way, so results do not change.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            max_generations: 1000,
            elite_ratio: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio).round() as usize
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.elite_ratio) {
            return Err("elite_ratio must be within 0.0..=1.0".into());
        }
        if self.elite_count() >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        Ok(())
    }
}
