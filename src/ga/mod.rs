//! Path-planning genetic algorithm core.
//!
//! Chromosomes are walks over a fixed point table. Fitness rewards walks
//! that are short and whose consecutive hops follow an adjacency relation.
//! The outer generational loop (ranking, termination, bookkeeping) is left
//! to the caller; this module provides the per-generation operators.
//!
//! # Core Traits
//!
//! - [`DistanceOracle`]: distance between two points
//! - [`AdjacencyOracle`]: whether a hop is a direct connection
//!
//! # Key Types
//!
//! - [`PathGaConfig`]: population size, chromosome length, point count, mutation rate
//! - [`Chromosome`] / [`Population`]: walk encoding
//! - [`FitnessEvaluator`] / [`Evaluation`]: scoring and elite selection
//!
//! # Generation Step
//!
//! ```text
//! evaluate(prior) -> (fitness, best)      ranking (external) -> ranked
//!                 \                      /
//!                  reproduce(fitness, ranked, best, prior) -> next
//! ```
//!
//! [`reproduce`] is [`crossover`] followed by [`mutate`]. Every random
//! operator takes the generator as an argument, so a seeded generator gives
//! reproducible generations.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
mod operators;
mod oracle;
mod reproduction;
mod selection;
mod types;

pub use config::{ParentSampling, PathGaConfig};
pub use fitness::{
    check_genes, connectivity_fitness, distance_fitness, total_fitness, Evaluation,
    FitnessEvaluator, DISTANCE_SCALE,
};
pub use operators::{crossover, crossover_traced, mutate, mutate_counted, Recombination};
pub use oracle::{AdjacencyOracle, DistanceOracle, LinkTable, Point, PointTable};
pub use reproduction::{reproduce, reproduce_traced, Reproduction};
pub use selection::{best_fit_indices, ELITE_COUNT};
pub use types::{Chromosome, Population};
