//! Crossover and mutation for walk-encoded chromosomes.
//!
//! Both operators read their inputs by reference and return a fresh
//! population. Rows `0..3` of every produced population are the elites and
//! are never recombined or mutated.
//!
//! # Crossover
//!
//! [`crossover`] builds the next population in three bands:
//!
//! | Rows                         | Content                                     |
//! |------------------------------|---------------------------------------------|
//! | `0..3`                       | prior rows at the first three best indices  |
//! | `3..` while `5 * row < size` | single-point offspring pairs                |
//! | remaining                    | ranked rows, position for position          |
//!
//! # Mutation
//!
//! [`mutate`] runs an independent Bernoulli trial per gene of every
//! non-elite row. Gene 0 (the start node) is exempt, and replacements are
//! drawn from `1..=point_count - 2` so the two boundary points are never
//! introduced.

use super::config::PathGaConfig;
use super::selection::ELITE_COUNT;
use super::types::{Chromosome, Population};
use crate::error::{PathGaError, Result};
use rand::Rng;
use tracing::{debug, instrument};

// ============================================================================
// Crossover
// ============================================================================

/// Record of one offspring pair produced by [`crossover_traced`].
///
/// Row `row` holds `ranked[parent_a][..joining_point] ++ ranked[parent_b][joining_point..]`
/// and row `row + 1` holds the complementary child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recombination {
    /// Row of the first child; the second child is at `row + 1`.
    pub row: usize,
    /// Ranked-population row of the first parent.
    pub parent_a: usize,
    /// Ranked-population row of the second parent.
    pub parent_b: usize,
    /// Genes before this index come from the child's own parent.
    pub joining_point: usize,
}

/// Produces the next population from the ranked and prior populations.
///
/// See [`crossover_traced`] for details and errors.
pub fn crossover<R: Rng>(
    config: &PathGaConfig,
    ranked: &Population,
    best_fit_indices: &[usize],
    prior: &Population,
    rng: &mut R,
) -> Result<Population> {
    crossover_traced(config, ranked, best_fit_indices, prior, rng).map(|(next, _)| next)
}

/// Produces the next population and records every offspring pair.
///
/// `best_fit_indices` are positions in `prior` (the unranked population
/// they were computed against), not in `ranked`.
///
/// For each offspring pair, two parent rows are drawn independently from
/// `0..config.parent_sampling.bound(config)` and a joining point from
/// `0..chromosome_length - 1`.
///
/// # Errors
/// - [`PathGaError::Config`] for an invalid configuration
/// - [`PathGaError::ShapeMismatch`] if `ranked` or `prior` has the wrong shape
/// - [`PathGaError::TooFewElites`] if fewer than three best indices are given
/// - [`PathGaError::EliteIndexOutOfRange`] if an elite index is not a row of `prior`
/// - [`PathGaError::ParentBoundExceedsPopulation`] if offspring are due and the
///   parent range reaches past the last row of `ranked`
#[instrument(
    level = "debug",
    skip(config, ranked, best_fit_indices, prior, rng),
    fields(population = config.population_size, sampling = ?config.parent_sampling)
)]
pub fn crossover_traced<R: Rng>(
    config: &PathGaConfig,
    ranked: &Population,
    best_fit_indices: &[usize],
    prior: &Population,
    rng: &mut R,
) -> Result<(Population, Vec<Recombination>)> {
    config.validate()?;
    ranked.check_shape(config, "ranked")?;
    prior.check_shape(config, "prior")?;

    let elites = best_fit_indices
        .get(..ELITE_COUNT)
        .ok_or(PathGaError::TooFewElites(best_fit_indices.len()))?;

    let size = config.population_size;
    let mut rows: Vec<Chromosome> = Vec::with_capacity(size);
    for &index in elites {
        let elite = prior.get(index).ok_or(PathGaError::EliteIndexOutOfRange {
            index,
            population_size: size,
        })?;
        rows.push(elite.clone());
    }

    let parent_bound = config.parent_sampling.bound(config);
    let point_bound = config.hops();
    let draws_parents = ELITE_COUNT * 5 < size;
    if draws_parents && parent_bound > size {
        return Err(PathGaError::ParentBoundExceedsPopulation {
            bound: parent_bound,
            population_size: size,
        });
    }
    let mut pairs = Vec::new();

    // 5 * row < size implies row + 1 < size for row >= 3.
    let mut row = ELITE_COUNT;
    while row * 5 < size {
        let parent_a = rng.random_range(0..parent_bound);
        let parent_b = rng.random_range(0..parent_bound);
        let joining_point = rng.random_range(0..point_bound);

        let a = ranked.row(parent_a);
        let b = ranked.row(parent_b);
        rows.push(a.splice(b, joining_point));
        rows.push(b.splice(a, joining_point));

        pairs.push(Recombination {
            row,
            parent_a,
            parent_b,
            joining_point,
        });
        row += 2;
    }

    rows.extend(ranked.rows()[row..].iter().cloned());

    debug!(
        elites = ?elites,
        offspring_pairs = pairs.len(),
        carried = size - row,
        "crossover complete"
    );
    Ok((Population::new(rows), pairs))
}

// ============================================================================
// Mutation
// ============================================================================

/// Returns a mutated copy of `population`.
///
/// See [`mutate_counted`] for details and errors.
pub fn mutate<R: Rng>(
    config: &PathGaConfig,
    population: &Population,
    rng: &mut R,
) -> Result<Population> {
    mutate_counted(config, population, rng).map(|(mutated, _)| mutated)
}

/// Returns a mutated copy of `population` and the number of genes replaced.
///
/// Every gene of rows `3..population_size` gets one uniform draw in `[0, 1)`;
/// when the draw is below `mutation_rate` and the gene is not gene 0, it is
/// replaced by a uniform integer in `1..=point_count - 2`. The input is not
/// modified.
///
/// # Errors
/// - [`PathGaError::Config`] for an invalid configuration
/// - [`PathGaError::ShapeMismatch`] if `population` has the wrong shape
#[instrument(
    level = "debug",
    skip(config, population, rng),
    fields(population = population.len(), rate = config.mutation_rate)
)]
pub fn mutate_counted<R: Rng>(
    config: &PathGaConfig,
    population: &Population,
    rng: &mut R,
) -> Result<(Population, usize)> {
    config.validate()?;
    population.check_shape(config, "mutated")?;

    let max_gene = config.point_count - 2;
    let mut mutated = population.clone();
    let mut count = 0;

    for chromosome in mutated.rows_mut().iter_mut().skip(ELITE_COUNT) {
        for (k, gene) in chromosome.genes_mut().iter_mut().enumerate() {
            let draw: f64 = rng.random();
            if draw < config.mutation_rate && k != 0 {
                *gene = rng.random_range(1..=max_gene);
                count += 1;
            }
        }
    }

    debug!(mutated_genes = count, "mutation complete");
    Ok((mutated, count))
}

// ============================================================================
// Tests
// ============================================================================
