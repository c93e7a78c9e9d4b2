//! One generational reproduction step: crossover, then mutation.

use super::config::PathGaConfig;
use super::operators::{crossover_traced, mutate_counted, Recombination};
use super::types::Population;
use crate::error::{PathGaError, Result};
use rand::Rng;
use tracing::{debug, instrument};

/// Everything produced by [`reproduce_traced`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reproduction {
    /// The next-generation population.
    pub population: Population,
    /// Offspring pairs created by crossover, before mutation.
    pub recombinations: Vec<Recombination>,
    /// Number of genes replaced by mutation.
    pub mutated_genes: usize,
}

/// Produces the next generation from the current one.
///
/// Runs [`crossover`](super::crossover) on `ranked`, `best_fit_indices` and
/// `prior`, then [`mutate`](super::mutate) on the result.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_pathga::ga::{reproduce, PathGaConfig, Population};
///
/// let config = PathGaConfig::default()
///     .with_population_size(4)
///     .with_chromosome_length(3)
///     .with_point_count(5)
///     .with_mutation_rate(0.0);
/// let prior = Population::from_rows(vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 1], vec![0, 1, 1]]);
/// let fitness = [1.0, 3.0, 2.0, 0.5];
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let next = reproduce(&config, &fitness, &prior, &[1, 2, 0], &prior, &mut rng).unwrap();
/// assert_eq!(next.row(0), prior.row(1));
/// assert_eq!(next.row(3), prior.row(3));
/// ```
pub fn reproduce<R: Rng>(
    config: &PathGaConfig,
    fitness: &[f64],
    ranked: &Population,
    best_fit_indices: &[usize],
    prior: &Population,
    rng: &mut R,
) -> Result<Population> {
    reproduce_traced(config, fitness, ranked, best_fit_indices, prior, rng)
        .map(|step| step.population)
}

/// Like [`reproduce`], also returning the crossover trace and mutation count.
///
/// `fitness` must be aligned with `prior`; it is checked for length only.
#[instrument(
    level = "debug",
    skip(config, fitness, ranked, best_fit_indices, prior, rng),
    fields(population = config.population_size)
)]
pub fn reproduce_traced<R: Rng>(
    config: &PathGaConfig,
    fitness: &[f64],
    ranked: &Population,
    best_fit_indices: &[usize],
    prior: &Population,
    rng: &mut R,
) -> Result<Reproduction> {
    if fitness.len() != config.population_size {
        return Err(PathGaError::ShapeMismatch {
            population: "fitness",
            rows: fitness.len(),
            cols: 1,
            expected_rows: config.population_size,
            expected_cols: 1,
        });
    }

    let (crossed, recombinations) =
        crossover_traced(config, ranked, best_fit_indices, prior, rng)?;
    let (population, mutated_genes) = mutate_counted(config, &crossed, rng)?;

    debug!(
        offspring_pairs = recombinations.len(),
        mutated_genes, "generation reproduced"
    );
    Ok(Reproduction {
        population,
        recombinations,
        mutated_genes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{crossover, mutate, Chromosome};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (PathGaConfig, Population, Population, Vec<f64>) {
        let config = PathGaConfig::default()
            .with_population_size(30)
            .with_chromosome_length(6)
            .with_point_count(9)
            .with_mutation_rate(0.2);
        let prior: Population = (0..30)
            .map(|i| Chromosome::new(vec![0, i % 9, (i + 1) % 9, (i + 2) % 9, (i + 3) % 9, 8]))
            .collect();
        let ranked: Population = prior.iter().rev().cloned().collect();
        let fitness: Vec<f64> = (0..30).map(|i| i as f64 / 10.0).collect();
        (config, prior, ranked, fitness)
    }

    #[test]
    fn test_reproduce_is_crossover_then_mutation() {
        let (config, prior, ranked, fitness) = setup();
        let best = [29, 28, 27];

        let composed = reproduce(
            &config,
            &fitness,
            &ranked,
            &best,
            &prior,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let crossed = crossover(&config, &ranked, &best, &prior, &mut rng).unwrap();
        let manual = mutate(&config, &crossed, &mut rng).unwrap();

        assert_eq!(composed, manual);
    }

    #[test]
    fn test_reproduce_keeps_elites() {
        let (config, prior, ranked, fitness) = setup();
        let mut rng = StdRng::seed_from_u64(3);

        let step = reproduce_traced(&config, &fitness, &ranked, &[29, 28, 27], &prior, &mut rng)
            .unwrap();
        assert_eq!(step.population.len(), 30);
        assert_eq!(step.population.row(0), prior.row(29));
        assert_eq!(step.population.row(1), prior.row(28));
        assert_eq!(step.population.row(2), prior.row(27));
        // 5 * 5 < 30, 5 * 7 >= 30
        assert_eq!(step.recombinations.len(), 2);
    }

    #[test]
    fn test_reproduce_rejects_misaligned_fitness() {
        let (config, prior, ranked, _) = setup();
        let mut rng = StdRng::seed_from_u64(3);
        let err = reproduce(&config, &[1.0; 29], &ranked, &[0, 1, 2], &prior, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            PathGaError::ShapeMismatch {
                population: "fitness",
                rows: 29,
                ..
            }
        ));
    }

    #[test]
    fn test_reproduce_propagates_config_error() {
        let (config, prior, ranked, fitness) = setup();
        let config = config.with_mutation_rate(-1.0);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            reproduce(&config, &fitness, &ranked, &[0, 1, 2], &prior, &mut rng),
            Err(PathGaError::Config(_))
        ));
    }
}
