//! Real-valued chromosome container.

use std::fmt;
use std::ops::{Index, IndexMut};

/// An ordered, fixed-length sequence of real-valued genes.
///
/// A chromosome is empty until the engine (or the caller) assigns genes to
/// it; [`initialize`](crate::ga::GeneticAlgorithm::initialize) and
/// [`crossover`](crate::ga::GeneticAlgorithm::crossover) are the usual
/// producers. Chromosomes recombined together must share one length.
///
/// # Examples
///
/// ```
/// use realga::ga::Chromosome;
///
/// let mut dna = Chromosome::from(vec![0.5, -0.25]);
/// dna.add_to_dna(1, 0.75);
/// assert_eq!(dna.genes(), &[0.5, 0.75]);
/// assert_eq!(dna.to_string(), "0.5   0.75   ");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<f64>,
}

impl Chromosome {
    /// Creates an empty (unset) chromosome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chromosome of `len` genes, all zero.
    pub fn zeros(len: usize) -> Self {
        Self {
            genes: vec![0.0; len],
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if no genes have been assigned.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene values in order.
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Mutable access to the gene values. Length cannot change through this.
    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    /// Returns the gene at `pos`, or `None` if out of range.
    pub fn gene(&self, pos: usize) -> Option<f64> {
        self.genes.get(pos).copied()
    }

    /// Overwrites the gene at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of range.
    pub fn add_to_dna(&mut self, pos: usize, value: f64) {
        self.genes[pos] = value;
    }

    /// Iterates over the gene values.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.genes.iter()
    }

    /// Consumes the chromosome, returning the raw genes.
    pub fn into_genes(self) -> Vec<f64> {
        self.genes
    }
}

impl From<Vec<f64>> for Chromosome {
    fn from(genes: Vec<f64>) -> Self {
        Self { genes }
    }
}

impl FromIterator<f64> for Chromosome {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            genes: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Chromosome {
    type Output = f64;

    fn index(&self, pos: usize) -> &f64 {
        &self.genes[pos]
    }
}

impl IndexMut<usize> for Chromosome {
    fn index_mut(&mut self, pos: usize) -> &mut f64 {
        &mut self.genes[pos]
    }
}

impl<'a> IntoIterator for &'a Chromosome {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

/// Genes separated by three spaces, or `Null` when unset.
impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.genes.is_empty() {
            return f.write_str("Null");
        }
        for gene in &self.genes {
            write!(f, "{gene}   ")?;
        }
        Ok(())
    }
}
