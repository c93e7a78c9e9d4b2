//! Elitist selection by repeated maximum elimination.
//!
//! Fitness here is **maximized**: higher is better.

use tracing::{debug, instrument};

/// Number of elite chromosomes carried verbatim into the next generation.
pub const ELITE_COUNT: usize = 3;

/// Returns the positions of the best chromosomes, best first.
///
/// Each round takes every remaining position whose fitness equals the
/// current maximum, appends them in ascending position order and removes
/// them from the working set. Rounds repeat until at least
/// [`ELITE_COUNT`] positions are collected, so a tie can yield more than
/// three entries. Callers only rely on the first three.
///
/// A position is never appended twice. If the fitness vector has fewer than
/// [`ELITE_COUNT`] comparable entries the result is shorter than three;
/// a validated configuration never produces such a vector.
///
/// # Examples
///
/// ```
/// use u_pathga::ga::best_fit_indices;
///
/// assert_eq!(best_fit_indices(&[1.0, 4.0, 2.0, 3.0]), vec![1, 3, 2]);
/// // Ties at the top are taken together.
/// assert_eq!(best_fit_indices(&[5.0, 1.0, 5.0, 5.0, 5.0]), vec![0, 2, 3, 4]);
/// ```
#[instrument(level = "debug", skip(fitness), fields(population = fitness.len()))]
pub fn best_fit_indices(fitness: &[f64]) -> Vec<usize> {
    let n = fitness.len();
    let mut taken = vec![false; n];
    let mut best = Vec::with_capacity(ELITE_COUNT);

    while best.len() < ELITE_COUNT {
        let max = fitness
            .iter()
            .zip(&taken)
            .filter(|(_, t)| !**t)
            .map(|(&f, _)| f)
            .fold(f64::NEG_INFINITY, f64::max);

        let round_start = best.len();
        best.extend((0..n).filter(|&i| !taken[i] && fitness[i] == max));
        if best.len() == round_start {
            // Nothing comparable left (exhausted, or only NaN remains).
            break;
        }
        for &i in &best[round_start..] {
            taken[i] = true;
        }
    }

    debug!(selected = best.len(), "best-fit indices collected");
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_maximum_needs_three_rounds() {
        let fitness = [0.5, 2.0, 1.5, 3.0, 1.0];
        assert_eq!(best_fit_indices(&fitness), vec![3, 1, 2]);
    }

    #[test]
    fn test_tie_at_top_overshoots() {
        let fitness = [4.0, 4.0, 4.0, 4.0, 1.0];
        assert_eq!(best_fit_indices(&fitness), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_tie_at_second_level() {
        // 9 alone, then the three-way tie at 7 is appended in one round.
        let fitness = [7.0, 9.0, 1.0, 7.0, 7.0];
        assert_eq!(best_fit_indices(&fitness), vec![1, 0, 3, 4]);
    }

    #[test]
    fn test_exactly_three() {
        assert_eq!(best_fit_indices(&[1.0, 1.0, 1.0]), vec![0, 1, 2]);
        assert_eq!(best_fit_indices(&[1.0, 2.0, 3.0]), vec![2, 1, 0]);
    }

    #[test]
    fn test_zero_fitness_positions_are_not_repeated() {
        let fitness = [0.0, 3.0, 0.0, 0.0];
        assert_eq!(best_fit_indices(&fitness), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_infinite_fitness_ranks_first() {
        let fitness = [1.0, f64::INFINITY, 2.0, 0.5];
        assert_eq!(best_fit_indices(&fitness), vec![1, 2, 0]);
    }

    #[test]
    fn test_short_vector_terminates() {
        assert_eq!(best_fit_indices(&[1.0, 2.0]), vec![1, 0]);
        assert!(best_fit_indices(&[]).is_empty());
    }

    #[test]
    fn test_nan_is_never_selected() {
        let fitness = [f64::NAN, 1.0, 2.0, f64::NAN];
        assert_eq!(best_fit_indices(&fitness), vec![2, 1]);
    }

    #[test]
    fn test_is_deterministic() {
        let fitness = [0.3, 0.9, 0.9, 0.1, 0.7, 0.7];
        assert_eq!(best_fit_indices(&fitness), best_fit_indices(&fitness));
    }
}
