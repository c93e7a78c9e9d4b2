//! Error types.
//!
//! Configuration problems are reported as [`ConfigError`] before any
//! population is touched. Everything that can go wrong while evaluating or
//! reproducing a population is a [`PathGaError`].

/// Invalid [`PathGaConfig`](crate::ga::PathGaConfig) parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 3, got {0}")]
    PopulationTooSmall(usize),

    #[error("chromosome_length must be at least 2, got {0}")]
    ChromosomeTooShort(usize),

    #[error("point_count must be at least 3, got {0}")]
    TooFewPoints(usize),

    #[error("mutation_rate must be between 0.0 and 1.0, got {0}")]
    MutationRateOutOfRange(f64),
}

/// Failure reported by a distance or adjacency oracle.
///
/// Oracles are supplied by the caller; the core never interprets this error,
/// it only hands it back.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("oracle cannot answer for ({from}, {to}): {reason}")]
pub struct OracleError {
    pub from: usize,
    pub to: usize,
    pub reason: String,
}

impl OracleError {
    pub fn new(from: usize, to: usize, reason: impl Into<String>) -> Self {
        Self {
            from,
            to,
            reason: reason.into(),
        }
    }
}

/// Errors raised by the evaluation and reproduction operators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathGaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{population} population has shape {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        population: &'static str,
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error("chromosome {chromosome} gene {gene} has value {value}, outside 0..{npts}")]
    GeneOutOfRange {
        chromosome: usize,
        gene: usize,
        value: usize,
        npts: usize,
    },

    #[error("best-fit index list has {0} entries, at least 3 are required")]
    TooFewElites(usize),

    #[error("best-fit index {index} is outside the prior population of {population_size}")]
    EliteIndexOutOfRange { index: usize, population_size: usize },

    #[error("parent sampling bound {bound} exceeds population_size {population_size}")]
    ParentBoundExceedsPopulation { bound: usize, population_size: usize },

    #[error("distance between {from} and {to} is {value}, expected a non-negative number")]
    InvalidDistance { from: usize, to: usize, value: f64 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PathGaError>;
