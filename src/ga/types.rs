//! Core trait definition for the GA engine.
//!
//! [`GaProblem`] is the contract between the generational loop and a
//! domain-specific problem: the loop owns the population, the problem owns
//! the representation and the operators.

use rand::Rng;

/// Defines a GA optimization problem.
///
/// This is the trait a problem implements to plug its domain logic into
/// the generational loop. It covers:
///
/// 1. **Initialization**: How to create the starting individuals
/// 2. **Evaluation**: How to compute fitness
/// 3. **Crossover**: How to recombine two parents into one offspring
/// 4. **Mutation**: How to perturb an offspring
///
/// # Fitness
///
/// Fitness is an `f64` and **higher is better** (maximization). Selection
/// is fitness-proportionate, so evaluations must be non-negative; a problem
/// should return `0.0` for individuals it cannot score.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel when built with the `parallel` feature.
pub trait GaProblem: Send + Sync {
    /// The individual (candidate solution) type for this problem.
    ///
    /// Individuals are owned values; the loop clones them when carrying
    /// elites and parents, so no two population slots alias.
    type Individual: Clone + Send + Sync;

    /// Creates one individual of the starting population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Must be pure: the runner may call it from several threads.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces one offspring by recombining two parents.
    ///
    /// The default implementation clones parent1 (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an offspring in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the best fitness of the
    /// population that generation produced.
    ///
    /// This is the diagnostics seam: operators stay silent and reporting
    /// happens here. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}
