//! Real-valued genetic algorithm engine.
//!
//! Candidate solutions are encoded as vectors of `f64` genes. The engine
//! keeps them in a fitness-ordered population, selects the fittest as
//! parents, recombines them with one of four crossover strategies and
//! perturbs the offspring with per-gene mutation whose amplitude can be
//! annealed by generation.
//!
//! - [`ga`]: the engine, its operators and configuration
//! - [`error`]: the crate's error type
//!
//! One call of [`GeneticAlgorithm::run_default`](ga::GeneticAlgorithm::run_default)
//! produces one batch of children. Looping, reinsertion and termination are
//! up to the caller.

pub mod error;
pub mod ga;

pub use error::{GaError, Result};
