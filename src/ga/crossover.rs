//! Multi-parent crossover for real-valued chromosomes.
//!
//! Every method assigns each parent a weight, then builds a child gene by
//! gene:
//!
//! - [`CrossoverMethod::Uniform`] / [`CrossoverMethod::Proportional`]:
//!   each gene is copied from one parent drawn by roulette over the weights.
//!   Siblings are sampled independently and generally differ.
//! - [`CrossoverMethod::Mean`] / [`CrossoverMethod::MeanProportional`]:
//!   each gene is the weighted mean of the parents' genes. No randomness is
//!   involved, so every child of one call carries the same chromosome.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Eiben, Raué & Ruttkay (1994), "Genetic algorithms with multi-parent
//!   recombination"

use log::debug;
use rand::Rng;

use super::chromosome::Chromosome;
use super::types::{Entity, EntityFactory, FitnessFn};
use crate::error::{GaError, Result};

/// Recombination strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverMethod {
    /// Per-gene parent draw, all parents equally likely.
    #[default]
    Uniform,

    /// Per-gene parent draw, parents weighted by `fitness / Σ fitness`.
    Proportional,

    /// Per-gene arithmetic mean of all parents.
    Mean,

    /// Per-gene fitness-weighted mean of all parents.
    MeanProportional,
}

impl CrossoverMethod {
    /// Returns `true` for the methods whose weights come from fitness.
    pub fn is_proportional(self) -> bool {
        matches!(
            self,
            CrossoverMethod::Proportional | CrossoverMethod::MeanProportional
        )
    }

    /// Returns `true` for the deterministic averaging methods.
    pub fn is_mean(self) -> bool {
        matches!(self, CrossoverMethod::Mean | CrossoverMethod::MeanProportional)
    }
}

/// Computes the per-parent weights used by `method`. Weights sum to 1.
///
/// # Errors
/// [`GaError::EmptyParents`] if `parents` is empty;
/// [`GaError::DegenerateFitness`] for a proportional method whose parents'
/// fitness sums to zero or to a non-finite value. Keeping that sum away
/// from zero is the caller's responsibility.
pub fn parent_weights<E, F>(method: CrossoverMethod, parents: &[E], fitness: &F) -> Result<Vec<f64>>
where
    F: FitnessFn<E>,
{
    if parents.is_empty() {
        return Err(GaError::EmptyParents);
    }

    if !method.is_proportional() {
        let w = 1.0 / parents.len() as f64;
        return Ok(vec![w; parents.len()]);
    }

    let raw: Vec<f64> = parents.iter().map(|p| fitness.fitness(p)).collect();
    let total: f64 = raw.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return Err(GaError::DegenerateFitness { total });
    }
    Ok(raw.into_iter().map(|f| f / total).collect())
}

/// Roulette pick: walks the cumulative weights and returns the first index
/// whose running sum exceeds `u`.
///
/// Falls back to the last index when rounding leaves the total just below
/// `u`.
pub fn roulette_index(weights: &[f64], u: f64) -> usize {
    let mut acc = 0.0;
    for (i, w) in weights.iter().enumerate() {
        acc += w;
        if u < acc {
            return i;
        }
    }
    weights.len().saturating_sub(1)
}

/// Recombines `parents` into `child_count` fresh entities.
///
/// Children come from `factory`; only their chromosome is assigned, any
/// payload stays at the factory default.
///
/// # Errors
/// [`GaError::InvalidCount`] if `child_count == 0`, plus the errors of
/// [`parent_weights`]. Nothing is produced on error.
///
/// # Panics
/// Panics if the parents' chromosomes differ in length.
pub fn crossover<E, F, C, R>(
    method: CrossoverMethod,
    child_count: usize,
    parents: &[E],
    fitness: &F,
    factory: &C,
    rng: &mut R,
) -> Result<Vec<E>>
where
    E: Entity,
    F: FitnessFn<E>,
    C: EntityFactory<E>,
    R: Rng,
{
    if child_count == 0 {
        return Err(GaError::InvalidCount { name: "children" });
    }
    let weights = parent_weights(method, parents, fitness)?;

    let len = parents[0].chromosome().len();
    for p in parents {
        assert_eq!(
            p.chromosome().len(),
            len,
            "parents must have equal chromosome length"
        );
    }

    let children: Vec<E> = if method.is_mean() {
        let dna = weighted_mean(parents, &weights, len);
        (0..child_count)
            .map(|_| spawn(factory, dna.clone()))
            .collect()
    } else {
        (0..child_count)
            .map(|_| {
                let dna: Chromosome = (0..len)
                    .map(|i| {
                        let k = roulette_index(&weights, rng.random::<f64>());
                        parents[k].chromosome()[i]
                    })
                    .collect();
                spawn(factory, dna)
            })
            .collect()
    };

    debug!(
        "{method:?} crossover: {} parents -> {child_count} children of length {len}",
        parents.len()
    );
    Ok(children)
}

fn weighted_mean<E: Entity>(parents: &[E], weights: &[f64], len: usize) -> Chromosome {
    (0..len)
        .map(|i| {
            parents
                .iter()
                .zip(weights)
                .map(|(p, w)| p.chromosome()[i] * w)
                .sum::<f64>()
        })
        .collect()
}

fn spawn<E: Entity, C: EntityFactory<E>>(factory: &C, dna: Chromosome) -> E {
    let mut child = factory.create();
    child.set_chromosome(dna);
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Animal {
        value: f64,
        dna: Chromosome,
    }

    impl Entity for Animal {
        fn chromosome(&self) -> &Chromosome {
            &self.dna
        }
        fn chromosome_mut(&mut self) -> &mut Chromosome {
            &mut self.dna
        }
    }

    fn animal(value: f64, genes: &[f64]) -> Animal {
        Animal {
            value,
            dna: Chromosome::from(genes.to_vec()),
        }
    }

    fn value(a: &Animal) -> f64 {
        a.value
    }

    fn parents() -> Vec<Animal> {
        vec![
            animal(3.0, &[1.0, 2.0, 3.0, 4.0]),
            animal(1.0, &[-1.0, -2.0, -3.0, -4.0]),
        ]
    }

    // ---- Weights ----

    #[test]
    fn test_uniform_weights() {
        let w = parent_weights(CrossoverMethod::Uniform, &parents(), &value).unwrap();
        assert_eq!(w, vec![0.5, 0.5]);
    }

    #[test]
    fn test_proportional_weights() {
        let w = parent_weights(CrossoverMethod::Proportional, &parents(), &value).unwrap();
        assert!((w[0] - 0.75).abs() < 1e-12);
        assert!((w[1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_fitness_rejected() {
        let ps = vec![animal(1.0, &[0.0]), animal(-1.0, &[0.0])];
        let err = parent_weights(CrossoverMethod::MeanProportional, &ps, &value).unwrap_err();
        assert_eq!(err, GaError::DegenerateFitness { total: 0.0 });
    }

    #[test]
    fn test_roulette_index() {
        let w = [0.25, 0.25, 0.5];
        assert_eq!(roulette_index(&w, 0.0), 0);
        assert_eq!(roulette_index(&w, 0.3), 1);
        assert_eq!(roulette_index(&w, 0.99), 2);
        // running sum never exceeds u
        assert_eq!(roulette_index(&[0.3, 0.3], 0.9), 1);
    }

    // ---- Methods ----

    #[test]
    fn test_mean_is_arithmetic_mean() {
        let mut rng = StdRng::seed_from_u64(42);
        let ps = vec![
            animal(1.0, &[1.0, 0.0]),
            animal(1.0, &[2.0, 3.0]),
            animal(1.0, &[3.0, -6.0]),
        ];
        let kids = crossover(CrossoverMethod::Mean, 3, &ps, &value, &Animal::default, &mut rng)
            .unwrap();

        assert_eq!(kids.len(), 3);
        for kid in &kids {
            assert!((kid.dna[0] - 2.0).abs() < 1e-12);
            assert!((kid.dna[1] + 1.0).abs() < 1e-12);
            assert_eq!(kid.value, 0.0, "payload stays at factory default");
        }
    }

    #[test]
    fn test_mean_proportional_weights_genes() {
        let mut rng = StdRng::seed_from_u64(42);
        let kids = crossover(
            CrossoverMethod::MeanProportional,
            1,
            &parents(),
            &value,
            &Animal::default,
            &mut rng,
        )
        .unwrap();
        // 0.75 * g - 0.25 * g = 0.5 * g
        assert_eq!(kids[0].dna.genes(), &[0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_sampling_methods_copy_parent_genes() {
        let ps = parents();
        for method in [CrossoverMethod::Uniform, CrossoverMethod::Proportional] {
            let mut rng = StdRng::seed_from_u64(7);
            let kids = crossover(method, 10, &ps, &value, &Animal::default, &mut rng).unwrap();

            assert_eq!(kids.len(), 10);
            for kid in &kids {
                assert_eq!(kid.dna.len(), 4);
                for (i, g) in kid.dna.iter().enumerate() {
                    assert!(
                        ps.iter().any(|p| p.dna[i] == *g),
                        "{method:?}: gene {i} = {g} not inherited"
                    );
                }
            }
        }
    }

    #[test]
    fn test_uniform_siblings_differ() {
        let mut rng = StdRng::seed_from_u64(1);
        let ps = vec![animal(1.0, &[0.0; 32]), animal(1.0, &[1.0; 32])];
        let factory = Animal::default;
        let kids = crossover(CrossoverMethod::Uniform, 2, &ps, &value, &factory, &mut rng).unwrap();
        assert_ne!(kids[0].dna, kids[1].dna);
    }

    #[test]
    fn test_proportional_favors_fitter_parent() {
        let mut rng = StdRng::seed_from_u64(3);
        let ps = vec![animal(9.0, &[1.0; 1000]), animal(1.0, &[0.0; 1000])];
        let kids = crossover(
            CrossoverMethod::Proportional,
            1,
            &ps,
            &value,
            &Animal::default,
            &mut rng,
        )
        .unwrap();
        let share: f64 = kids[0].dna.iter().sum::<f64>() / 1000.0;
        assert!(share > 0.8, "expected ~0.9 from the fitter parent, got {share}");
    }

    // ---- Preconditions ----

    #[test]
    fn test_zero_children_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = crossover(
            CrossoverMethod::Uniform,
            0,
            &parents(),
            &value,
            &Animal::default,
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, GaError::InvalidCount { name: "children" });
    }

    #[test]
    fn test_no_parents_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = crossover(
            CrossoverMethod::Mean,
            1,
            &Vec::<Animal>::new(),
            &value,
            &Animal::default,
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, GaError::EmptyParents);
    }

    #[test]
    #[should_panic(expected = "equal chromosome length")]
    fn test_length_mismatch_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        let ps = vec![animal(1.0, &[1.0, 2.0]), animal(1.0, &[1.0])];
        let _ = crossover(CrossoverMethod::Uniform, 1, &ps, &value, &Animal::default, &mut rng);
    }
}
