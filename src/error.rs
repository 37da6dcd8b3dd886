//! Error types for realga.
//!
//! Every fallible engine operation reports a [`GaError`] before it touches
//! the population, so a failed call leaves the engine exactly as it was.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;

/// Errors raised by the genetic algorithm engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// Chromosome length requested for initialization was zero.
    #[error("chromosome size must be positive")]
    InvalidDnaSize,

    /// Interval bounds are out of order.
    #[error("left interval ({left}) must be less than or equal to right interval ({right})")]
    InvalidInterval { left: f64, right: f64 },

    /// A count argument (parents to select, children to produce) was zero.
    #[error("{name} must be positive")]
    InvalidCount { name: &'static str },

    /// More entities were requested than the population holds.
    #[error("requested {requested} entities but the population holds {available}")]
    InsufficientPopulation { requested: usize, available: usize },

    /// Crossover was invoked without any parent.
    #[error("crossover requires at least one parent")]
    EmptyParents,

    /// Fitness-proportional weighting over parents whose fitness sums to zero
    /// (or to a non-finite value).
    #[error("fitness-proportional weights are undefined for total fitness {total}")]
    DegenerateFitness { total: f64 },

    /// Configuration rejected by [`GaConfig::validate`](crate::ga::GaConfig::validate).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
