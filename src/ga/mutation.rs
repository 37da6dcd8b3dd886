//! Per-gene mutation with an optional annealing ("shrink") schedule.
//!
//! Each gene mutates independently with probability `p` (default `1/L` for
//! a chromosome of length `L`). A mutating gene draws a random value `r`
//! and then either takes it ([`MutationMethod::NewValue`]) or adds it
//! ([`MutationMethod::Boundary`]).
//!
//! With bounds `(lo, hi)` the draw is `x · (|lo| + |hi|) + lo`, where `x` is
//! uniform in `[0, 1)` or standard normal depending on the [`Randomizer`].
//! Without bounds it is `x · 2 - 1`. For a uniform `x` and an interval of
//! mixed sign this lands in `[lo, hi)`; for intervals that do not straddle
//! zero it overshoots `hi`.
//!
//! When shrinking, the mutated gene is finally multiplied by
//! `1 / generation`, so late generations make ever smaller moves.

use log::trace;
use rand::Rng;
use rand_distr::StandardNormal;

use super::types::Entity;

/// What happens to a gene selected for mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationMethod {
    /// Replace the gene with a fresh random draw.
    #[default]
    NewValue,

    /// Add a fresh random draw to the gene. Does not clamp to the bounds.
    Boundary,
}

/// Distribution of the base random variate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Randomizer {
    /// Uniform in `[0, 1)`.
    Uniform,

    /// Standard normal, `N(0, 1)`.
    #[default]
    Normal,
}

impl Randomizer {
    /// Draws one base variate.
    pub fn sample<R: Rng>(self, rng: &mut R) -> f64 {
        match self {
            Randomizer::Uniform => rng.random::<f64>(),
            Randomizer::Normal => rng.sample(StandardNormal),
        }
    }
}

/// Optional tuning for a single mutation call.
///
/// # Examples
///
/// ```
/// use realga::ga::MutationParams;
///
/// let params = MutationParams::default()
///     .with_probability(0.2)
///     .with_bounds(-5.0, 5.0);
/// assert_eq!(params.probability_for(10), 0.2);
/// assert_eq!(MutationParams::default().probability_for(10), 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationParams {
    /// Per-gene mutation probability. `None` means `1 / chromosome length`.
    pub probability: Option<f64>,

    /// `(lower, upper)` scaling for the random draw. `None` means the
    /// unbounded `x · 2 - 1` form.
    pub bounds: Option<(f64, f64)>,
}

impl MutationParams {
    /// Sets the per-gene probability.
    pub fn with_probability(mut self, p: f64) -> Self {
        self.probability = Some(p);
        self
    }

    /// Sets the draw bounds.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = Some((lower, upper));
        self
    }

    /// Effective per-gene probability for a chromosome of `len` genes.
    pub fn probability_for(&self, len: usize) -> f64 {
        self.probability.unwrap_or(1.0 / len as f64)
    }
}

/// Draws the value that is written into (or added to) a mutating gene.
pub fn draw<R: Rng>(randomizer: Randomizer, bounds: Option<(f64, f64)>, rng: &mut R) -> f64 {
    let x = randomizer.sample(rng);
    match bounds {
        Some((lo, hi)) => x * (lo.abs() + hi.abs()) + lo,
        None => x * 2.0 - 1.0,
    }
}

/// Mutates `entity`'s chromosome in place.
///
/// `generation` only matters when `shrink` is set.
///
/// # Panics
/// If `generation` is 0.
pub fn mutate<E, R>(
    method: MutationMethod,
    randomizer: Randomizer,
    shrink: bool,
    generation: u64,
    entity: &mut E,
    params: &MutationParams,
    rng: &mut R,
) where
    E: Entity,
    R: Rng,
{
    assert!(generation >= 1, "generation must be at least 1");
    let genes = entity.chromosome_mut().genes_mut();
    let p = params.probability_for(genes.len());
    let scale = 1.0 / generation as f64;

    let mut hits = 0usize;
    for gene in genes.iter_mut() {
        if rng.random::<f64>() >= p {
            continue;
        }
        let r = draw(randomizer, params.bounds, rng);
        match method {
            MutationMethod::NewValue => *gene = r,
            MutationMethod::Boundary => *gene += r,
        }
        if shrink {
            *gene *= scale;
        }
        hits += 1;
    }

    trace!(
        "{method:?}/{randomizer:?} mutation: {hits}/{} genes changed (p = {p}, shrink = {shrink})",
        genes.len()
    );
}
