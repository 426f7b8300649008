//! Builder utilities for configuring SI simulations.
//!
//! Validates infection probability and round cap before constructing
//! [`SiSimulation`] instances.

use std::num::NonZeroUsize;

use crate::{Result, diffusion::SiSimulation, error::SpreadError};

/// Infection probability used when none is supplied.
pub const DEFAULT_INFECTION_PROBABILITY: f64 = 0.8;

/// Round cap used when none is supplied.
pub const DEFAULT_MAX_ROUNDS: usize = 12;

/// Validated parameters shared by every run of an [`SiSimulation`].
///
/// # Examples
/// ```
/// use spreadsim_core::SimulationConfig;
///
/// let config = SimulationConfig::new(0.5, 10)?;
/// assert_eq!(config.infection_probability(), 0.5);
/// assert_eq!(config.max_rounds().get(), 10);
/// # Ok::<(), spreadsim_core::SpreadError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    infection_probability: f64,
    max_rounds: NonZeroUsize,
}

impl SimulationConfig {
    /// Validates and stores the simulation parameters.
    ///
    /// # Errors
    /// Returns [`SpreadError::InvalidProbability`] when `infection_probability`
    /// is NaN or outside `[0, 1]`, and [`SpreadError::InvalidMaxRounds`] when
    /// `max_rounds` is zero.
    pub fn new(infection_probability: f64, max_rounds: usize) -> Result<Self> {
        if !(0.0..=1.0).contains(&infection_probability) {
            return Err(SpreadError::InvalidProbability {
                got: infection_probability,
            });
        }
        let rounds =
            NonZeroUsize::new(max_rounds).ok_or(SpreadError::InvalidMaxRounds { got: max_rounds })?;
        Ok(Self {
            infection_probability,
            max_rounds: rounds,
        })
    }

    /// Probability that a single exposure infects a susceptible neighbour.
    #[must_use]
    pub const fn infection_probability(&self) -> f64 {
        self.infection_probability
    }

    /// Maximum number of rounds a run may take.
    #[must_use]
    pub const fn max_rounds(&self) -> NonZeroUsize {
        self.max_rounds
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            infection_probability: DEFAULT_INFECTION_PROBABILITY,
            max_rounds: NonZeroUsize::MIN.saturating_add(DEFAULT_MAX_ROUNDS - 1),
        }
    }
}

/// Configures and constructs [`SiSimulation`] instances.
///
/// # Examples
/// ```
/// use spreadsim_core::SimulationBuilder;
///
/// let simulation = SimulationBuilder::new()
///     .with_infection_probability(0.3)
///     .with_max_rounds(8)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(simulation.config().infection_probability(), 0.3);
/// assert_eq!(simulation.config().max_rounds().get(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    infection_probability: f64,
    max_rounds: usize,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            infection_probability: DEFAULT_INFECTION_PROBABILITY,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl SimulationBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use spreadsim_core::SimulationBuilder;
    ///
    /// let builder = SimulationBuilder::new();
    /// assert_eq!(builder.infection_probability(), 0.8);
    /// assert_eq!(builder.max_rounds(), 12);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the infection probability.
    #[must_use]
    pub const fn with_infection_probability(mut self, probability: f64) -> Self {
        self.infection_probability = probability;
        self
    }

    /// Returns the configured infection probability.
    #[must_use]
    pub const fn infection_probability(&self) -> f64 {
        self.infection_probability
    }

    /// Overrides the round cap.
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Returns the configured round cap.
    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Validates the configuration and constructs an [`SiSimulation`].
    ///
    /// # Errors
    /// Returns [`SpreadError::InvalidProbability`] or
    /// [`SpreadError::InvalidMaxRounds`] when validation fails.
    ///
    /// # Examples
    /// ```
    /// use spreadsim_core::{SimulationBuilder, SpreadError};
    ///
    /// let err = SimulationBuilder::new()
    ///     .with_max_rounds(0)
    ///     .build()
    ///     .expect_err("zero rounds is rejected");
    /// assert_eq!(err, SpreadError::InvalidMaxRounds { got: 0 });
    /// ```
    pub fn build(self) -> Result<SiSimulation> {
        let config = SimulationConfig::new(self.infection_probability, self.max_rounds)?;
        Ok(SiSimulation::new(config))
    }
}
