//! GA configuration.
//!
//! [`GaConfig`] holds the engine-wide parameters: random seed, the default
//! initialization interval, and how [`run_default`] picks parents, mutates
//! children and treats the generation counter.
//!
//! [`run_default`]: crate::ga::GeneticAlgorithm::run_default

use super::mutation::Randomizer;
use crate::error::{GaError, Result};

/// Whether the default pipeline advances the generation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationPolicy {
    /// The counter only moves when the caller calls
    /// [`next_generation`](crate::ga::GeneticAlgorithm::next_generation).
    #[default]
    Manual,

    /// Every successful `run_default` call ends by advancing the counter.
    AutoAdvance,
}

/// Configuration for the genetic algorithm engine.
///
/// # Defaults
///
/// ```
/// use realga::ga::{GaConfig, GenerationPolicy, Randomizer};
///
/// let config = GaConfig::default();
/// assert_eq!(config.init_interval, (-1.0, 1.0));
/// assert_eq!(config.pipeline_parents, 2);
/// assert_eq!(config.pipeline_randomizer, Randomizer::Normal);
/// assert!(!config.pipeline_shrink);
/// assert_eq!(config.generation_policy, GenerationPolicy::Manual);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use realga::ga::{GaConfig, GenerationPolicy};
///
/// let config = GaConfig::default()
///     .with_seed(42)
///     .with_init_interval(-5.0, 5.0)
///     .with_pipeline_shrink(true)
///     .with_generation_policy(GenerationPolicy::AutoAdvance);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Interval used by
    /// [`initialize_default`](crate::ga::GeneticAlgorithm::initialize_default).
    pub init_interval: (f64, f64),

    /// Number of parents the default pipeline selects (restoring them).
    pub pipeline_parents: usize,

    /// Distribution used when the default pipeline mutates children.
    pub pipeline_randomizer: Randomizer,

    /// Whether the default pipeline applies the `1 / generation` shrink.
    pub pipeline_shrink: bool,

    /// Generation counter behavior of the default pipeline.
    pub generation_policy: GenerationPolicy,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            seed: None,
            init_interval: (-1.0, 1.0),
            pipeline_parents: 2,
            pipeline_randomizer: Randomizer::Normal,
            pipeline_shrink: false,
            generation_policy: GenerationPolicy::Manual,
        }
    }
}

impl GaConfig {
    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the default initialization interval.
    pub fn with_init_interval(mut self, left: f64, right: f64) -> Self {
        self.init_interval = (left, right);
        self
    }

    /// Sets how many parents the default pipeline selects.
    pub fn with_pipeline_parents(mut self, n: usize) -> Self {
        self.pipeline_parents = n;
        self
    }

    /// Sets the default pipeline's mutation distribution.
    pub fn with_pipeline_randomizer(mut self, randomizer: Randomizer) -> Self {
        self.pipeline_randomizer = randomizer;
        self
    }

    /// Enables or disables shrinking in the default pipeline.
    pub fn with_pipeline_shrink(mut self, shrink: bool) -> Self {
        self.pipeline_shrink = shrink;
        self
    }

    /// Sets the generation policy.
    pub fn with_generation_policy(mut self, policy: GenerationPolicy) -> Self {
        self.generation_policy = policy;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::InvalidConfig`] describing the first bad field.
    pub fn validate(&self) -> Result<()> {
        let (left, right) = self.init_interval;
        if !(left.is_finite() && right.is_finite()) {
            return Err(GaError::InvalidConfig(
                "init_interval bounds must be finite".into(),
            ));
        }
        if left > right {
            return Err(GaError::InvalidConfig(
                "init_interval left bound exceeds right bound".into(),
            ));
        }
        if self.pipeline_parents == 0 {
            return Err(GaError::InvalidConfig(
                "pipeline_parents must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
