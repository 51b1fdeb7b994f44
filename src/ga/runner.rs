//! Generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → ranking → elitism → breeding → repeat.
//!
//! One generation is the pure step [`next_generation`], which maps a
//! population snapshot and its fitness array to the next population.
//! The runner only threads snapshots through it.

use super::config::GaConfig;
use super::selection::roulette;
use super::types::GaProblem;
use crate::error::{Result, SuiteError};
use crate::random::create_rng;
use log::info;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// The population after the last generation.
    pub population: Vec<I>,

    /// Fitness of each member of `population`, index-aligned.
    pub fitnesses: Vec<f64>,

    /// The fittest individual of the final population.
    ///
    /// Ties go to the lowest index.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// The seed the run drew its randomness from.
    pub seed: u64,

    /// Best fitness of the initial population, then of each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA for exactly `config.max_generations` generations.
    ///
    /// # Errors
    /// Returns [`SuiteError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        config.validate().map_err(SuiteError::InvalidConfig)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        let elite_count = config.elite_count();

        info!(
            "starting GA: population {}, generations {}, elites {}, seed {}",
            config.population_size, config.max_generations, elite_count, seed
        );

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        // 2. Evaluate initial population
        let mut fitnesses = evaluate_population(problem, &population, config.parallel);
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(fitnesses[best_index(&fitnesses)]);

        // 3. Generational loop, no early exit
        for gen in 0..config.max_generations {
            population = next_generation(problem, &population, &fitnesses, config, &mut rng);
            fitnesses = evaluate_population(problem, &population, config.parallel);

            let gen_best = fitnesses[best_index(&fitnesses)];
            fitness_history.push(gen_best);
            problem.on_generation(gen + 1, gen_best);
        }

        let best_idx = best_index(&fitnesses);
        let best = population[best_idx].clone();
        let best_fitness = fitnesses[best_idx];

        info!(
            "GA finished after {} generations, best fitness {:.6}",
            config.max_generations, best_fitness
        );

        Ok(GaResult {
            population,
            fitnesses,
            best,
            best_fitness,
            generations: config.max_generations,
            seed,
            fitness_history,
        })
    }
}

/// Builds the next population from a snapshot of the current one.
///
/// The top `config.elite_count()` individuals (stable descending sort by
/// fitness) are carried over unchanged. The rest is filled by selecting two
/// parents from the *unsorted* snapshot with [`roulette`], crossing them over
/// and mutating the offspring, until `config.population_size` is reached.
///
/// # Panics
/// Panics if `population` is empty or `fitnesses` is not index-aligned
/// with it.
pub fn next_generation<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Individual],
    fitnesses: &[f64],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<P::Individual> {
    assert_eq!(
        population.len(),
        fitnesses.len(),
        "fitnesses must be index-aligned with the population"
    );

    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|&a, &b| {
        fitnesses[b]
            .partial_cmp(&fitnesses[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut next_gen: Vec<P::Individual> = Vec::with_capacity(config.population_size);
    next_gen.extend(
        ranked
            .iter()
            .take(config.elite_count())
            .map(|&i| population[i].clone()),
    );

    while next_gen.len() < config.population_size {
        let p1 = roulette(fitnesses, rng);
        let p2 = roulette(fitnesses, rng);

        let mut child = problem.crossover(&population[p1], &population[p2], rng);
        problem.mutate(&mut child, rng);

        next_gen.push(child);
    }

    next_gen
}

/// Evaluate all individuals, preserving population order.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &[P::Individual],
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return population.par_iter().map(|ind| problem.evaluate(ind)).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(|ind| problem.evaluate(ind)).collect()
}

/// Index of the highest fitness; the first one wins ties.
fn best_index(fitnesses: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitnesses.iter().enumerate().skip(1) {
        if f > fitnesses[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
