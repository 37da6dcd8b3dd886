//! Fitness-ordered population store.
//!
//! [`Population`] is a max-heap of entities keyed by fitness. The score is
//! computed once when an entity enters the store and cached alongside it,
//! so the fitness function runs O(1) times per insertion instead of once
//! per heap comparison. Callers that change an entity's fitness-relevant
//! state while it is stored must call [`Population::rescore`].
//!
//! A NaN score ranks below every other score, including `-inf`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::types::FitnessFn;

/// Cached fitness and insertion stamp of an entity taken out of the store.
///
/// Handing it back to [`Population::restore_scored`] puts the entity in
/// exactly the position it held before.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Slot {
    fitness: f64,
    seq: u64,
}

/// A stored entity with its cached fitness.
#[derive(Debug, Clone)]
struct Scored<E> {
    fitness: f64,
    /// Insertion stamp; among equal fitness the earlier insertion wins.
    seq: u64,
    entity: E,
}

impl<E> PartialEq for Scored<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E> Eq for Scored<E> {}

impl<E> PartialOrd for Scored<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Scored<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fitness
            .is_nan()
            .cmp(&self.fitness.is_nan())
            .then_with(|| self.fitness.total_cmp(&other.fitness))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Max-fitness-ordered multiset of entities.
///
/// # Complexity
/// `push`/`pop_best` are O(log n), `peek_best` is O(1), `rescore` is O(n).
#[derive(Debug, Clone)]
pub struct Population<E> {
    heap: BinaryHeap<Scored<E>>,
    next_seq: u64,
}

impl<E> Default for Population<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Population<E> {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the population holds no entities.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts an entity, scoring it with `fitness`.
    pub fn push<F: FitnessFn<E>>(&mut self, entity: E, fitness: &F) {
        let score = fitness.fitness(&entity);
        self.push_scored(entity, score);
    }

    /// Inserts every entity from `entities`.
    pub fn extend<F, I>(&mut self, entities: I, fitness: &F)
    where
        F: FitnessFn<E>,
        I: IntoIterator<Item = E>,
    {
        for entity in entities {
            self.push(entity, fitness);
        }
    }

    fn push_scored(&mut self, entity: E, fitness: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scored {
            fitness,
            seq,
            entity,
        });
    }

    /// Returns the best entity and its fitness without removing it.
    pub fn peek_best(&self) -> Option<(&E, f64)> {
        self.heap.peek().map(|s| (&s.entity, s.fitness))
    }

    /// Removes and returns the best entity.
    pub fn pop_best(&mut self) -> Option<E> {
        self.pop_best_scored().map(|(e, _)| e)
    }

    /// Removes and returns the best entity together with its slot.
    pub(crate) fn pop_best_scored(&mut self) -> Option<(E, Slot)> {
        self.heap.pop().map(|s| {
            let slot = Slot {
                fitness: s.fitness,
                seq: s.seq,
            };
            (s.entity, slot)
        })
    }

    /// Reinserts an entity popped by [`pop_best_scored`](Self::pop_best_scored),
    /// keeping its cached fitness and its place among equal-fitness entities.
    pub(crate) fn restore_scored(&mut self, entity: E, slot: Slot) {
        self.heap.push(Scored {
            fitness: slot.fitness,
            seq: slot.seq,
            entity,
        });
    }

    /// Iterates over every stored entity exactly once, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.heap.iter().map(|s| &s.entity)
    }

    /// Applies `f` to every stored entity, then recomputes all cached
    /// fitness values and restores the heap order.
    pub fn update_all<F, U>(&mut self, fitness: &F, mut f: U)
    where
        F: FitnessFn<E>,
        U: FnMut(&mut E),
    {
        let mut items = std::mem::take(&mut self.heap).into_vec();
        for item in &mut items {
            f(&mut item.entity);
            item.fitness = fitness.fitness(&item.entity);
        }
        self.heap = BinaryHeap::from(items);
    }

    /// Recomputes every cached fitness value.
    ///
    /// Needed after the fitness function's inputs changed outside the store.
    pub fn rescore<F: FitnessFn<E>>(&mut self, fitness: &F) {
        self.update_all(fitness, |_| {});
    }

    /// Drains the population, best first.
    pub fn into_vec(self) -> Vec<E> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(|s| s.entity)
            .collect()
    }
}
