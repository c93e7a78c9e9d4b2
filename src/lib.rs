//! Evolutionary search core for adjacency-constrained path planning.
//!
//! Given a fixed table of points and an adjacency relation between them,
//! the operators in [`ga`] evolve a population of candidate visiting orders
//! toward walks that are both short and valid:
//!
//! - **Fitness evaluation**: inverse total distance plus the fraction of
//!   hops that are direct connections.
//! - **Elitist selection**: the three best chromosomes survive unchanged.
//! - **Reproduction**: single-point crossover over a ranked population,
//!   followed by per-gene mutation that never touches the start node.
//!
//! # Architecture
//!
//! The crate holds no global state. Configuration ([`ga::PathGaConfig`]),
//! oracles ([`ga::DistanceOracle`], [`ga::AdjacencyOracle`]) and the random
//! generator are all passed explicitly. Points, links, population ranking
//! and the generational loop belong to the caller.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use u_pathga::ga::{reproduce, FitnessEvaluator, LinkTable, PathGaConfig, PointTable, Population};
//!
//! let config = PathGaConfig::default()
//!     .with_population_size(5)
//!     .with_chromosome_length(3)
//!     .with_point_count(4)
//!     .with_mutation_rate(0.1);
//! let points = PointTable::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! let links = LinkTable::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
//! let evaluator = FitnessEvaluator::new(&config, &points, &links)?;
//!
//! let prior = Population::from_rows(vec![
//!     vec![0, 1, 2],
//!     vec![0, 2, 1],
//!     vec![0, 3, 2],
//!     vec![0, 1, 1],
//!     vec![0, 2, 2],
//! ]);
//! let eval = evaluator.evaluate(&prior)?;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let next = reproduce(&config, &eval.fitness, &prior, &eval.best_fit_indices, &prior, &mut rng)?;
//! assert_eq!(next.len(), 5);
//! # Ok::<(), u_pathga::PathGaError>(())
//! ```

pub mod error;
pub mod ga;

pub use error::{ConfigError, OracleError, PathGaError, Result};
