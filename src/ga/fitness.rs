//! Fitness evaluation.
//!
//! Fitness combines two signals of different scale into one maximized score:
//!
//! ```text
//! fitness = 10 / total_distance  +  valid_hops / (chromosome_length - 1)
//! ```
//!
//! The distance term rewards short walks, the connectivity term rewards
//! walks whose consecutive hops follow the adjacency relation.
//!
//! # Pipeline
//!
//! 1. [`FitnessEvaluator::pairwise_distances`]: per-hop distances
//! 2. [`distance_fitness`]: `10 / sum(row)`
//! 3. [`FitnessEvaluator::connection_counts`]: connected hops per row
//! 4. [`connectivity_fitness`]: fraction of connected hops
//! 5. [`total_fitness`]: elementwise sum
//! 6. [`best_fit_indices`]: elite positions

use super::config::PathGaConfig;
use super::oracle::{AdjacencyOracle, DistanceOracle};
use super::selection::{best_fit_indices, ELITE_COUNT};
use super::types::Population;
use crate::error::{PathGaError, Result};
use tracing::{debug, instrument, trace};

/// Scale of the distance term.
pub const DISTANCE_SCALE: f64 = 10.0;

/// Result of evaluating one population.
///
/// Every intermediate array is kept, aligned 1:1 with population rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// `population_size × (chromosome_length - 1)` hop distances.
    pub distances: Vec<Vec<f64>>,
    /// `10 / total distance` per row.
    pub distance_fitness: Vec<f64>,
    /// Number of connected hops per row.
    pub connection_counts: Vec<usize>,
    /// Fraction of connected hops per row, in `[0, 1]`.
    pub connectivity_fitness: Vec<f64>,
    /// `distance_fitness + connectivity_fitness` per row.
    pub fitness: Vec<f64>,
    /// Best positions, best first. At least three entries.
    pub best_fit_indices: Vec<usize>,
}

impl Evaluation {
    /// The elite positions actually carried over (the first three).
    pub fn elites(&self) -> &[usize] {
        let n = self.best_fit_indices.len().min(ELITE_COUNT);
        &self.best_fit_indices[..n]
    }

    /// Highest fitness in the population.
    pub fn best_fitness(&self) -> Option<f64> {
        self.best_fit_indices.first().map(|&i| self.fitness[i])
    }

    /// Splits into `(fitness, best_fit_indices)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<usize>) {
        (self.fitness, self.best_fit_indices)
    }
}

/// Scores populations against a pair of oracles.
///
/// The evaluator is a pure function of its inputs: evaluating the same
/// population twice gives identical results.
///
/// # Examples
///
/// ```
/// use u_pathga::ga::{FitnessEvaluator, LinkTable, PathGaConfig, PointTable, Population};
///
/// let config = PathGaConfig::default()
///     .with_population_size(3)
///     .with_chromosome_length(3)
///     .with_point_count(3);
/// let points = PointTable::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let links = LinkTable::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// let evaluator = FitnessEvaluator::new(&config, &points, &links).unwrap();
///
/// let pop = Population::from_rows(vec![vec![0, 1, 2], vec![0, 2, 1], vec![0, 2, 2]]);
/// let eval = evaluator.evaluate(&pop).unwrap();
/// assert_eq!(eval.best_fit_indices[0], 0);
/// assert!((eval.fitness[0] - 6.0).abs() < 1e-12); // 10/2 + 2/2
/// ```
#[derive(Debug)]
pub struct FitnessEvaluator<'a, D, A> {
    config: &'a PathGaConfig,
    distance: &'a D,
    adjacency: &'a A,
}

impl<'a, D: DistanceOracle, A: AdjacencyOracle> FitnessEvaluator<'a, D, A> {
    /// Creates an evaluator, validating the configuration first.
    pub fn new(config: &'a PathGaConfig, distance: &'a D, adjacency: &'a A) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            distance,
            adjacency,
        })
    }

    pub fn config(&self) -> &PathGaConfig {
        self.config
    }

    /// Evaluates a population.
    ///
    /// # Errors
    /// - [`PathGaError::ShapeMismatch`] if the population is not
    ///   `population_size × chromosome_length`
    /// - [`PathGaError::GeneOutOfRange`] for the first gene outside
    ///   `0..point_count`
    /// - [`PathGaError::InvalidDistance`] if the distance oracle returns a
    ///   negative or NaN value
    /// - [`PathGaError::Oracle`] if an oracle cannot answer
    #[instrument(
        level = "debug",
        skip(self, population),
        fields(population = population.len(), chromosome_length = self.config.chromosome_length)
    )]
    pub fn evaluate(&self, population: &Population) -> Result<Evaluation> {
        self.check(population)?;

        let distances = self.distances_of(population)?;
        let dist_fit = distance_fitness(&distances);
        let connection_counts = self.connections_of(population)?;
        let conn_fit = connectivity_fitness(&connection_counts, self.config.hops());
        let fitness = total_fitness(&dist_fit, &conn_fit);
        let best = best_fit_indices(&fitness);

        debug!(
            best_index = best.first().copied(),
            best_fitness = best.first().map(|&i| fitness[i]),
            "population evaluated"
        );

        Ok(Evaluation {
            distances,
            distance_fitness: dist_fit,
            connection_counts,
            connectivity_fitness: conn_fit,
            fitness,
            best_fit_indices: best,
        })
    }

    /// Hop distances for every row: a `population_size × (chromosome_length - 1)`
    /// matrix.
    pub fn pairwise_distances(&self, population: &Population) -> Result<Vec<Vec<f64>>> {
        self.check(population)?;
        self.distances_of(population)
    }

    /// Number of connected hops for every row.
    pub fn connection_counts(&self, population: &Population) -> Result<Vec<usize>> {
        self.check(population)?;
        self.connections_of(population)
    }

    fn check(&self, population: &Population) -> Result<()> {
        population.check_shape(self.config, "evaluated")?;
        check_genes(population, self.config.point_count)
    }

    fn distances_of(&self, population: &Population) -> Result<Vec<Vec<f64>>> {
        population
            .iter()
            .map(|chromosome| {
                chromosome
                    .hops()
                    .map(|(from, to)| {
                        let d = self.distance.distance(from, to)?;
                        if d.is_nan() || d < 0.0 {
                            return Err(PathGaError::InvalidDistance { from, to, value: d });
                        }
                        Ok(d)
                    })
                    .collect::<Result<Vec<f64>>>()
            })
            .collect()
    }

    fn connections_of(&self, population: &Population) -> Result<Vec<usize>> {
        let mut counts = Vec::with_capacity(population.len());
        for (row, chromosome) in population.iter().enumerate() {
            let mut count = 0;
            for (from, to) in chromosome.hops() {
                if self.adjacency.connected(from, to)? {
                    count += 1;
                }
            }
            trace!(row, count, "connected hops");
            counts.push(count);
        }
        Ok(counts)
    }
}

/// Fails on the first gene outside `0..point_count`.
pub fn check_genes(population: &Population, point_count: usize) -> Result<()> {
    for (chromosome, c) in population.iter().enumerate() {
        if let Some((gene, &value)) = c
            .genes()
            .iter()
            .enumerate()
            .find(|(_, &v)| v >= point_count)
        {
            return Err(PathGaError::GeneOutOfRange {
                chromosome,
                gene,
                value,
                npts: point_count,
            });
        }
    }
    Ok(())
}

/// `10 / sum(row)` for each row of hop distances.
///
/// A row of total length zero scores `f64::INFINITY`.
pub fn distance_fitness(distances: &[Vec<f64>]) -> Vec<f64> {
    distances
        .iter()
        .map(|row| DISTANCE_SCALE / row.iter().sum::<f64>())
        .collect()
}

/// `count / hops` for each row.
pub fn connectivity_fitness(counts: &[usize], hops: usize) -> Vec<f64> {
    counts.iter().map(|&c| c as f64 / hops as f64).collect()
}

/// Elementwise sum of the distance and connectivity terms.
pub fn total_fitness(distance_fitness: &[f64], connectivity_fitness: &[f64]) -> Vec<f64> {
    distance_fitness
        .iter()
        .zip(connectivity_fitness)
        .map(|(d, c)| d + c)
        .collect()
}
