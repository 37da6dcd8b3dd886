//! Real-valued genetic algorithm.
//!
//! A generic engine over any candidate type that carries a
//! [`Chromosome`]. Users implement [`Entity`] for their type and supply a
//! fitness function (higher is better) plus a factory for fresh children.
//!
//! # Key Types
//!
//! - [`GeneticAlgorithm`]: owns the population, RNG and generation counter
//! - [`Population`]: max-fitness-ordered store with cached scores
//! - [`GaConfig`]: seed, default interval, default-pipeline settings
//!
//! # Operators
//!
//! - [`selection`]: truncation selection, restoring or removing parents
//! - [`crossover`]: uniform, fitness-proportional and mean recombination
//! - [`mutation`]: new-value / additive perturbation with optional shrink
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*

mod chromosome;
mod config;
pub mod crossover;
mod engine;
pub mod mutation;
mod population;
pub mod selection;
mod types;

pub use chromosome::Chromosome;
pub use config::{GaConfig, GenerationPolicy};
pub use crossover::CrossoverMethod;
pub use engine::GeneticAlgorithm;
pub use mutation::{MutationMethod, MutationParams, Randomizer};
pub use population::Population;
pub use selection::SelectionMode;
pub use types::{Entity, EntityFactory, FitnessFn};
