//! Core trait definitions for the GA engine.
//!
//! [`Entity`] is the only contract between the engine and a
//! domain-specific candidate type. Fitness is supplied separately as a
//! plain function so the same entity type can be optimized against
//! different objectives.

use super::chromosome::Chromosome;

/// A chromosome-bearing candidate solution.
///
/// The engine reads and writes the chromosome; everything else on the type
/// (phenotype values, cached scores, labels) is opaque payload that the
/// engine never inspects or copies.
///
/// # Implementing
///
/// ```
/// use realga::ga::{Chromosome, Entity};
///
/// #[derive(Clone, Default)]
/// struct Animal {
///     value: f64,
///     dna: Chromosome,
/// }
///
/// impl Entity for Animal {
///     fn chromosome(&self) -> &Chromosome { &self.dna }
///     fn chromosome_mut(&mut self) -> &mut Chromosome { &mut self.dna }
/// }
/// ```
pub trait Entity {
    /// Returns this entity's chromosome.
    fn chromosome(&self) -> &Chromosome;

    /// Returns this entity's chromosome for in-place editing.
    fn chromosome_mut(&mut self) -> &mut Chromosome;

    /// Replaces the chromosome wholesale.
    fn set_chromosome(&mut self, chromosome: Chromosome) {
        *self.chromosome_mut() = chromosome;
    }
}

/// Scores an entity. Higher is better.
///
/// Must be deterministic for a given entity state: the population caches
/// the score at insertion and the proportional crossover methods evaluate
/// it again on the selected parents. Implemented for every
/// `Fn(&E) -> f64`.
pub trait FitnessFn<E> {
    /// Computes the fitness of `entity`.
    fn fitness(&self, entity: &E) -> f64;
}

impl<E, F> FitnessFn<E> for F
where
    F: Fn(&E) -> f64,
{
    fn fitness(&self, entity: &E) -> f64 {
        self(entity)
    }
}

/// Produces fresh entities with an unset chromosome.
///
/// Used by crossover to materialize each child. Implemented for every
/// `Fn() -> E`, so `Animal::default` works directly.
pub trait EntityFactory<E> {
    /// Creates a new entity.
    fn create(&self) -> E;
}

impl<E, F> EntityFactory<E> for F
where
    F: Fn() -> E,
{
    fn create(&self) -> E {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Critter {
        weight: f64,
        dna: Chromosome,
    }

    impl Entity for Critter {
        fn chromosome(&self) -> &Chromosome {
            &self.dna
        }
        fn chromosome_mut(&mut self) -> &mut Chromosome {
            &mut self.dna
        }
    }

    #[test]
    fn test_set_chromosome_default_impl() {
        let mut critter = Critter::default();
        critter.set_chromosome(Chromosome::from(vec![1.0, 2.0]));
        assert_eq!(critter.chromosome().genes(), &[1.0, 2.0]);
    }

    #[test]
    fn test_closures_as_collaborators() {
        let fitness = |p: &Critter| p.weight * 10.0;
        let factory = Critter::default;

        let mut critter = factory.create();
        assert!(critter.chromosome().is_empty());
        critter.weight = 3.0;
        assert_eq!(fitness.fitness(&critter), 30.0);
    }
}
