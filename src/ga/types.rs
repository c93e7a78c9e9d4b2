//! Chromosome and population types.
//!
//! A [`Chromosome`] is a walk over point indices; a [`Population`] is an
//! ordered set of chromosomes. Operators never mutate a population in place:
//! each stage takes its inputs by reference and returns a fresh snapshot.

use crate::error::{PathGaError, Result};
use crate::ga::config::PathGaConfig;

/// A candidate visiting order: a fixed-length sequence of point indices.
///
/// Gene 0 is the start node. Repeated indices are allowed; a chromosome is a
/// walk, not necessarily a Hamiltonian path.
///
/// # Examples
///
/// ```
/// use u_pathga::ga::Chromosome;
///
/// let c = Chromosome::new(vec![0, 2, 1, 4]);
/// assert_eq!(c.start(), Some(0));
/// assert_eq!(c.hops().collect::<Vec<_>>(), vec![(0, 2), (2, 1), (1, 4)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<usize>,
}

impl Chromosome {
    /// Creates a chromosome from its genes.
    pub fn new(genes: Vec<usize>) -> Self {
        Self { genes }
    }

    /// Returns the genes.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns true if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The reserved start node, if any.
    pub fn start(&self) -> Option<usize> {
        self.genes.first().copied()
    }

    /// Consecutive gene pairs `(g[j], g[j + 1])`.
    pub fn hops(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.genes.windows(2).map(|w| (w[0], w[1]))
    }

    /// Builds a child from `self[..point]` followed by `other[point..]`.
    pub(crate) fn splice(&self, other: &Chromosome, point: usize) -> Chromosome {
        let mut genes = Vec::with_capacity(self.genes.len());
        genes.extend_from_slice(&self.genes[..point]);
        genes.extend_from_slice(&other.genes[point..]);
        Chromosome { genes }
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.genes
    }
}

impl From<Vec<usize>> for Chromosome {
    fn from(genes: Vec<usize>) -> Self {
        Self::new(genes)
    }
}

/// An ordered collection of chromosomes.
///
/// Row order carries meaning (fitness vectors and best-fit indices are
/// positions into it), but no row carries identity across generations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    rows: Vec<Chromosome>,
}

impl Population {
    /// Creates a population from chromosomes.
    pub fn new(rows: Vec<Chromosome>) -> Self {
        Self { rows }
    }

    /// Creates a population from raw gene rows.
    ///
    /// ```
    /// use u_pathga::ga::Population;
    ///
    /// let pop = Population::from_rows(vec![vec![0, 1], vec![0, 2]]);
    /// assert_eq!(pop.len(), 2);
    /// assert_eq!(pop.row(1).genes(), &[0, 2]);
    /// ```
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Self {
        Self {
            rows: rows.into_iter().map(Chromosome::new).collect(),
        }
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the population has no chromosomes.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All chromosomes in row order.
    pub fn rows(&self) -> &[Chromosome] {
        &self.rows
    }

    /// The chromosome at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> &Chromosome {
        &self.rows[index]
    }

    /// The chromosome at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.rows.get(index)
    }

    /// Iterates over chromosomes in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.rows.iter()
    }

    /// Consumes the population, returning its chromosomes.
    pub fn into_rows(self) -> Vec<Chromosome> {
        self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Chromosome] {
        &mut self.rows
    }

    /// Checks that the population is exactly
    /// `population_size × chromosome_length`.
    ///
    /// `name` identifies the snapshot (`"prior"`, `"ranked"`, ...) in the error.
    pub fn check_shape(&self, config: &PathGaConfig, name: &'static str) -> Result<()> {
        let expected_rows = config.population_size;
        let expected_cols = config.chromosome_length;
        let bad_row = self.rows.iter().find(|c| c.len() != expected_cols);

        if self.rows.len() != expected_rows || bad_row.is_some() {
            return Err(PathGaError::ShapeMismatch {
                population: name,
                rows: self.rows.len(),
                cols: bad_row.map_or(expected_cols, Chromosome::len),
                expected_rows,
                expected_cols,
            });
        }
        Ok(())
    }
}

impl FromIterator<Chromosome> for Population {
    fn from_iter<T: IntoIterator<Item = Chromosome>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
