//! Truncation selection over the population store.
//!
//! Both modes take the `count` fittest entities. [`SelectionMode::Restore`]
//! hands back copies and leaves the store untouched; [`SelectionMode::Remove`]
//! consumes the selected parents.
//!
//! # Complexity
//! O(count · log n) for either mode.

use log::debug;

use super::population::Population;
use crate::error::{GaError, Result};

/// How selected parents relate to the population afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    /// Parents are copied out; store membership is unchanged.
    #[default]
    Restore,

    /// Parents are popped and not reinserted; the store shrinks by `count`.
    Remove,
}

impl SelectionMode {
    /// Selects the `count` best entities using this mode.
    pub fn select<E: Clone>(self, population: &mut Population<E>, count: usize) -> Result<Vec<E>> {
        match self {
            SelectionMode::Restore => select_and_restore(population, count),
            SelectionMode::Remove => select_and_remove(population, count),
        }
    }
}

fn check_count<E>(population: &Population<E>, count: usize) -> Result<()> {
    if count == 0 {
        return Err(GaError::InvalidCount { name: "count" });
    }
    if count > population.len() {
        return Err(GaError::InsufficientPopulation {
            requested: count,
            available: population.len(),
        });
    }
    Ok(())
}

/// Returns copies of the `count` fittest entities, best first, and leaves
/// the population's membership unchanged.
///
/// # Errors
/// [`GaError::InvalidCount`] if `count == 0`,
/// [`GaError::InsufficientPopulation`] if `count` exceeds the store size.
pub fn select_and_restore<E: Clone>(
    population: &mut Population<E>,
    count: usize,
) -> Result<Vec<E>> {
    check_count(population, count)?;

    let mut popped = Vec::with_capacity(count);
    while popped.len() < count {
        match population.pop_best_scored() {
            Some(item) => popped.push(item),
            None => break,
        }
    }

    let selected: Vec<E> = popped.iter().map(|(e, _)| e.clone()).collect();
    for (entity, slot) in popped {
        population.restore_scored(entity, slot);
    }

    debug!("selected {count} parents (restored), population size {}", population.len());
    Ok(selected)
}

/// Pops the `count` fittest entities, best first, without reinserting them.
///
/// # Errors
/// Same as [`select_and_restore`].
pub fn select_and_remove<E>(population: &mut Population<E>, count: usize) -> Result<Vec<E>> {
    check_count(population, count)?;

    let selected: Vec<E> = std::iter::from_fn(|| population.pop_best())
        .take(count)
        .collect();

    debug!("selected {count} parents (removed), population size {}", population.len());
    Ok(selected)
}
