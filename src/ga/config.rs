//! Path GA configuration.
//!
//! [`PathGaConfig`] holds every parameter the operators read. It is passed
//! explicitly to each operator; nothing is read from process-wide state.

use crate::error::ConfigError;

/// Upper bound (exclusive) for drawing crossover parent rows from the
/// ranked population.
///
/// The default samples parents from `0..chromosome_length - 1`, which ties
/// the mating pool to the chromosome length rather than to the population
/// size. [`ParentSampling::PopulationSize`] samples from the whole ranked
/// population instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParentSampling {
    /// Parents drawn from `0..chromosome_length - 1`.
    #[default]
    ChromosomeLength,

    /// Parents drawn from `0..population_size`.
    PopulationSize,
}

impl ParentSampling {
    /// Exclusive upper bound of the parent row range for `config`.
    pub fn bound(self, config: &PathGaConfig) -> usize {
        match self {
            ParentSampling::ChromosomeLength => config.chromosome_length.saturating_sub(1),
            ParentSampling::PopulationSize => config.population_size,
        }
    }
}

/// Configuration for the path GA operators.
///
/// # Defaults
///
/// ```
/// use u_pathga::ga::PathGaConfig;
///
/// let config = PathGaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.chromosome_length, 16);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pathga::ga::{ParentSampling, PathGaConfig};
///
/// let config = PathGaConfig::default()
///     .with_population_size(50)
///     .with_chromosome_length(8)
///     .with_point_count(12)
///     .with_mutation_rate(0.05)
///     .with_parent_sampling(ParentSampling::PopulationSize);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathGaConfig {
    /// Number of chromosomes in every population (`pop_max`). At least 3.
    pub population_size: usize,

    /// Number of genes per chromosome (`chr_len`). At least 2.
    pub chromosome_length: usize,

    /// Number of valid point indices (`npts`). At least 3.
    ///
    /// Indices `0` and `npts - 1` are reserved and never produced by mutation.
    pub point_count: usize,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Range used to draw crossover parents.
    pub parent_sampling: ParentSampling,
}

impl Default for PathGaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            chromosome_length: 16,
            point_count: 16,
            mutation_rate: 0.01,
            parent_sampling: ParentSampling::default(),
        }
    }
}

impl PathGaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the number of points.
    pub fn with_point_count(mut self, n: usize) -> Self {
        self.point_count = n;
        self
    }

    /// Sets the per-gene mutation rate.
    ///
    /// The value is not clamped; [`validate`](Self::validate) rejects rates
    /// outside `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the parent sampling range.
    pub fn with_parent_sampling(mut self, sampling: ParentSampling) -> Self {
        self.parent_sampling = sampling;
        self
    }

    /// Number of hops (consecutive gene pairs) per chromosome.
    pub fn hops(&self) -> usize {
        self.chromosome_length.saturating_sub(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 3 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.chromosome_length < 2 {
            return Err(ConfigError::ChromosomeTooShort(self.chromosome_length));
        }
        if self.point_count < 3 {
            return Err(ConfigError::TooFewPoints(self.point_count));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        Ok(())
    }
}
