//! The genetic algorithm engine.
//!
//! [`GeneticAlgorithm`] owns a fitness-ordered [`Population`], a seedable
//! random number generator and the generation counter, and exposes the
//! individual GA steps (initialize, select, crossover, mutate) plus the
//! one-shot [`run_default`](GeneticAlgorithm::run_default) pipeline.
//!
//! The engine produces one batch of offspring per call. Looping, deciding
//! which children join the population and when to stop are left to the
//! caller.
//!
//! # Concurrency
//!
//! All state is owned by one engine value and every operation runs to
//! completion synchronously. The engine is `Send` when its parts are, but
//! it takes `&mut self` for anything that draws random numbers or touches
//! the population; sharing one engine across threads needs external
//! synchronization (e.g. a `Mutex`).

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{GaConfig, GenerationPolicy};
use super::crossover::{self, CrossoverMethod};
use super::mutation::{self, MutationMethod, MutationParams, Randomizer};
use super::population::Population;
use super::selection;
use super::types::{Entity, EntityFactory, FitnessFn};
use crate::error::{GaError, Result};

/// Generic real-valued genetic algorithm.
///
/// # Type Parameters
///
/// - `E`: the candidate type, see [`Entity`]
/// - `F`: fitness function, higher is better
/// - `C`: factory for fresh children
/// - `R`: random number generator, [`StdRng`] unless injected via
///   [`with_rng`](Self::with_rng)
///
/// # Usage
///
/// ```
/// use realga::ga::{
///     Chromosome, CrossoverMethod, Entity, GaConfig, GeneticAlgorithm, MutationMethod,
/// };
///
/// #[derive(Clone, Default)]
/// struct Animal { value: f64, dna: Chromosome }
///
/// impl Entity for Animal {
///     fn chromosome(&self) -> &Chromosome { &self.dna }
///     fn chromosome_mut(&mut self) -> &mut Chromosome { &mut self.dna }
/// }
///
/// let config = GaConfig::default().with_seed(42);
/// let mut ga =
///     GeneticAlgorithm::<Animal, _, _>::with_config(Animal::default, |a: &Animal| a.value, config)
///         .unwrap();
/// for value in [100.0, 3.0, 2.0, 5.0] {
///     ga.add_entity(Animal { value, ..Animal::default() });
/// }
/// ga.initialize_default(20).unwrap();
///
/// let children = ga
///     .run_default(10, CrossoverMethod::Uniform, MutationMethod::NewValue, 0.99)
///     .unwrap();
/// assert_eq!(children.len(), 10);
/// ```
pub struct GeneticAlgorithm<E, F, C, R = StdRng> {
    population: Population<E>,
    fitness: F,
    factory: C,
    rng: R,
    generation: u64,
    config: GaConfig,
}

impl<E, F, C> GeneticAlgorithm<E, F, C, StdRng>
where
    E: Entity,
    F: FitnessFn<E>,
    C: EntityFactory<E>,
{
    /// Creates an engine with the default configuration and an
    /// OS-seeded generator.
    pub fn new(factory: C, fitness: F) -> Self {
        Self::build(factory, fitness, GaConfig::default())
    }

    /// Creates an engine from a validated configuration.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(factory: C, fitness: F, config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(factory, fitness, config))
    }

    fn build(factory: C, fitness: F, config: GaConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = StdRng::seed_from_u64(seed);
        Self::assemble(factory, fitness, config, rng)
    }
}

impl<E, F, C, R> GeneticAlgorithm<E, F, C, R>
where
    E: Entity,
    F: FitnessFn<E>,
    C: EntityFactory<E>,
    R: Rng,
{
    /// Creates an engine drawing from a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`] if `config` fails validation.
    pub fn with_rng(factory: C, fitness: F, config: GaConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(factory, fitness, config, rng))
    }

    fn assemble(factory: C, fitness: F, config: GaConfig, rng: R) -> Self {
        Self {
            population: Population::new(),
            fitness,
            factory,
            rng,
            generation: 1,
            config,
        }
    }

    // ---- Population ----

    /// Inserts one entity. O(log n).
    pub fn add_entity(&mut self, entity: E) {
        self.population.push(entity, &self.fitness);
    }

    /// Inserts every entity from `entities`.
    pub fn add_entities<I: IntoIterator<Item = E>>(&mut self, entities: I) {
        self.population.extend(entities, &self.fitness);
    }

    /// Gives every stored entity a fresh chromosome of `size_dna` genes,
    /// each drawn as `u · (|left| + |right|) + left` with `u` uniform in
    /// `[0, 1)`.
    ///
    /// The formula stays within `[left, right]` only when the interval
    /// contains zero (e.g. the default `[-1, 1]`). Cached fitness values
    /// are recomputed afterwards.
    ///
    /// # Errors
    /// [`GaError::InvalidInterval`] if `left > right`,
    /// [`GaError::InvalidDnaSize`] if `size_dna == 0`. The population is
    /// untouched on error.
    pub fn initialize(&mut self, size_dna: usize, left: f64, right: f64) -> Result<()> {
        if left > right {
            return Err(GaError::InvalidInterval { left, right });
        }
        if size_dna == 0 {
            return Err(GaError::InvalidDnaSize);
        }

        let span = left.abs() + right.abs();
        let rng = &mut self.rng;
        self.population.update_all(&self.fitness, |entity| {
            let dna = (0..size_dna)
                .map(|_| rng.random::<f64>() * span + left)
                .collect();
            entity.set_chromosome(dna);
        });

        debug!(
            "initialized {} entities with {size_dna} genes in [{left}, {right}]",
            self.population.len()
        );
        Ok(())
    }

    /// [`initialize`](Self::initialize) over the configured interval,
    /// `[-1, 1]` by default.
    pub fn initialize_default(&mut self, size_dna: usize) -> Result<()> {
        let (left, right) = self.config.init_interval;
        self.initialize(size_dna, left, right)
    }

    /// Recomputes cached fitness after stored entities changed externally.
    pub fn rescore(&mut self) {
        self.population.rescore(&self.fitness);
    }

    // ---- Operators ----

    /// Returns copies of the `count` fittest entities, best first, leaving
    /// the population unchanged.
    pub fn select(&mut self, count: usize) -> Result<Vec<E>>
    where
        E: Clone,
    {
        selection::select_and_restore(&mut self.population, count)
    }

    /// Removes and returns the `count` fittest entities, best first.
    pub fn select_and_remove(&mut self, count: usize) -> Result<Vec<E>> {
        selection::select_and_remove(&mut self.population, count)
    }

    /// Recombines `parents` into `child_count` new entities.
    ///
    /// See [`crossover::crossover`] for the methods and errors.
    pub fn crossover(
        &mut self,
        method: CrossoverMethod,
        child_count: usize,
        parents: &[E],
    ) -> Result<Vec<E>> {
        crossover::crossover(
            method,
            child_count,
            parents,
            &self.fitness,
            &self.factory,
            &mut self.rng,
        )
    }

    /// Mutates `entity` in place, shrinking by the current generation when
    /// `shrink` is set.
    pub fn mutate(
        &mut self,
        method: MutationMethod,
        randomizer: Randomizer,
        shrink: bool,
        entity: &mut E,
        params: &MutationParams,
    ) {
        mutation::mutate(
            method,
            randomizer,
            shrink,
            self.generation,
            entity,
            params,
            &mut self.rng,
        );
    }

    /// Default pipeline: select the top parents (restoring them), cross
    /// them into `child_count` children, and mutate each child with the
    /// configured randomizer (normal by default, no shrink).
    ///
    /// Children are returned, not inserted. The generation counter only
    /// advances under [`GenerationPolicy::AutoAdvance`].
    pub fn run_default(
        &mut self,
        child_count: usize,
        crossover_method: CrossoverMethod,
        mutation_method: MutationMethod,
        mutation_probability: f64,
    ) -> Result<Vec<E>>
    where
        E: Clone,
    {
        if child_count == 0 {
            return Err(GaError::InvalidCount { name: "children" });
        }

        let parents = self.select(self.config.pipeline_parents)?;
        let mut children = self.crossover(crossover_method, child_count, &parents)?;

        let params = MutationParams::default().with_probability(mutation_probability);
        let randomizer = self.config.pipeline_randomizer;
        let shrink = self.config.pipeline_shrink;
        for child in &mut children {
            self.mutate(mutation_method, randomizer, shrink, child, &params);
        }

        if self.config.generation_policy == GenerationPolicy::AutoAdvance {
            self.next_generation();
        }

        debug!(
            "generation {}: produced {} children via {crossover_method:?}/{mutation_method:?}",
            self.generation,
            children.len()
        );
        Ok(children)
    }

    // ---- Generation ----

    /// Current generation, starting at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the generation counter and returns the new value.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        debug!("advanced to generation {}", self.generation);
        self.generation
    }

    /// Sets the generation counter.
    ///
    /// # Errors
    /// [`GaError::InvalidCount`] if `generation == 0`.
    pub fn set_generation(&mut self, generation: u64) -> Result<()> {
        if generation == 0 {
            return Err(GaError::InvalidCount { name: "generation" });
        }
        self.generation = generation;
        Ok(())
    }

    // ---- Accessors ----

    /// The population store.
    pub fn population(&self) -> &Population<E> {
        &self.population
    }

    /// The fittest entity and its cached fitness.
    pub fn best(&self) -> Option<(&E, f64)> {
        self.population.peek_best()
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.population.len()
    }

    /// Returns `true` if the population is empty.
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// The active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Evaluates `entity` with the engine's fitness function.
    pub fn fitness_of(&self, entity: &E) -> f64 {
        self.fitness.fitness(entity)
    }

    /// Consumes the engine, returning its population.
    pub fn into_population(self) -> Population<E> {
        self.population
    }
}

// ============================================================================
// Tests
// ============================================================================
