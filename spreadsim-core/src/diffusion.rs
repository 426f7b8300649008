//! Discrete-round Susceptible-Infected diffusion engine.
//!
//! Each run owns a private simulation state that starts with the seed
//! infected and advances synchronously one round at a time. During a round
//! only the nodes infected in the previous round (the frontier) expose their
//! susceptible neighbours, and each exposure is an independent Bernoulli
//! trial drawn from the caller's RNG. Older infected nodes never retry, so a
//! neighbour that survived its exposures stays susceptible unless a later
//! frontier reaches it.

use std::{collections::HashSet, hash::Hash};

use rand::{Rng, distributions::Standard};
use tracing::{debug, info, instrument, warn};

use crate::{
    Result, config::SimulationConfig, error::SpreadError, graph::Graph, result::SimulationResult,
};

/// A validated SI simulation ready to run against any [`Graph`].
///
/// Construct one with [`crate::SimulationBuilder`] or
/// [`SiSimulation::new`]. The value holds configuration only and can be
/// reused across graphs and seeds.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spreadsim_core::{AdjacencyList, SimulationBuilder};
///
/// let path = AdjacencyList::from_edges(3, &[(0, 1), (1, 2)])?;
/// let simulation = SimulationBuilder::new()
///     .with_infection_probability(1.0)
///     .with_max_rounds(10)
///     .build()?;
/// let mut rng = SmallRng::seed_from_u64(9);
/// let result = simulation.run(&path, &0, &mut rng)?;
/// assert_eq!(result.history(), [1, 2, 3, 3]);
/// # Ok::<(), spreadsim_core::SpreadError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiSimulation {
    config: SimulationConfig,
}

impl SiSimulation {
    /// Wraps an already validated configuration.
    #[must_use]
    pub const fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by every run.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the SI process on `graph` starting from `start`.
    ///
    /// # Errors
    /// Returns [`SpreadError::UnknownStartNode`] when `start` is not a
    /// member of `graph`.
    #[instrument(
        name = "core.simulate",
        err,
        skip(self, graph, start, rng),
        fields(
            nodes = graph.node_count(),
            start = ?start,
            p = self.config.infection_probability(),
            max_rounds = self.config.max_rounds().get(),
        ),
    )]
    pub fn run<G, R>(
        &self,
        graph: &G,
        start: &G::Node,
        rng: &mut R,
    ) -> Result<SimulationResult<G::Node>>
    where
        G: Graph,
        R: Rng + ?Sized,
    {
        if !graph.contains(start) {
            warn!(start = ?start, "start node is not a member of the graph");
            return Err(SpreadError::unknown_start_node(start));
        }

        let mut state = SimulationState::seeded(start.clone());
        let max_rounds = self.config.max_rounds().get();
        let mut stalled_at = None;

        for round in 1..=max_rounds {
            let newly_infected = state.expose(graph, self.config.infection_probability(), rng);
            if newly_infected.is_empty() {
                state.record();
                stalled_at = Some(round);
                info!(round, infected = state.infected.len(), "diffusion stalled");
                break;
            }
            let fresh = newly_infected.len();
            state.advance(newly_infected);
            debug!(
                round,
                newly_infected = fresh,
                infected = state.infected.len(),
                "round completed"
            );
        }

        let stall_round = stalled_at.unwrap_or_else(|| {
            info!(
                rounds = max_rounds,
                infected = state.infected.len(),
                "round cap reached"
            );
            state.last_round()
        });
        let result = state.finish(graph.node_count(), stall_round);
        record_metrics(&result);
        Ok(result)
    }
}

/// Runs a single SI simulation with the given parameters.
///
/// Convenience wrapper that validates `infection_probability` and
/// `max_rounds` on every call before delegating to [`SiSimulation::run`].
///
/// # Errors
/// Returns [`SpreadError::InvalidProbability`],
/// [`SpreadError::InvalidMaxRounds`], or [`SpreadError::UnknownStartNode`]
/// when the corresponding argument is invalid.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spreadsim_core::{AdjacencyList, simulate_si};
///
/// let lonely = AdjacencyList::with_nodes(1);
/// let mut rng = SmallRng::seed_from_u64(1);
/// let result = simulate_si(&lonely, &0, 0.5, 3, &mut rng)?;
/// assert_eq!(result.history(), [1, 1]);
/// assert_eq!(result.stall_round(), 1);
/// assert_eq!(result.half_saturation_round(), Some(0));
/// # Ok::<(), spreadsim_core::SpreadError>(())
/// ```
pub fn simulate_si<G, R>(
    graph: &G,
    start: &G::Node,
    infection_probability: f64,
    max_rounds: usize,
    rng: &mut R,
) -> Result<SimulationResult<G::Node>>
where
    G: Graph,
    R: Rng + ?Sized,
{
    let config = SimulationConfig::new(infection_probability, max_rounds)?;
    SiSimulation::new(config).run(graph, start, rng)
}

/// Mutable state owned by exactly one run.
///
/// The frontier is kept in first-infection order, so the exposure sequence
/// depends only on the graph and the generator.
struct SimulationState<N> {
    start: N,
    infected: HashSet<N>,
    frontier: Vec<N>,
    history: Vec<usize>,
}

impl<N: Clone + Eq + Hash> SimulationState<N> {
    fn seeded(start: N) -> Self {
        Self {
            infected: HashSet::from([start.clone()]),
            frontier: vec![start.clone()],
            start,
            history: vec![1],
        }
    }

    /// Lets every frontier node expose each of its susceptible neighbours
    /// once. A neighbour shared by several frontier nodes gets one trial per
    /// exposure and is infected if any of them succeeds.
    fn expose<G, R>(&self, graph: &G, probability: f64, rng: &mut R) -> Vec<N>
    where
        G: Graph<Node = N>,
        R: Rng + ?Sized,
    {
        let mut seen = HashSet::new();
        let mut newly_infected = Vec::new();
        for node in &self.frontier {
            for neighbour in graph.neighbours(node) {
                if self.infected.contains(&neighbour) {
                    continue;
                }
                let draw: f64 = rng.sample(Standard);
                if draw < probability && seen.insert(neighbour.clone()) {
                    newly_infected.push(neighbour);
                }
            }
        }
        newly_infected
    }

    fn advance(&mut self, newly_infected: Vec<N>) {
        self.infected.extend(newly_infected.iter().cloned());
        self.frontier = newly_infected;
        self.record();
    }

    fn record(&mut self) {
        self.history.push(self.infected.len());
    }

    fn last_round(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    fn finish(self, node_count: usize, stall_round: usize) -> SimulationResult<N> {
        SimulationResult::new(
            self.start,
            node_count,
            self.history,
            stall_round,
            self.infected,
        )
    }
}

#[cfg(feature = "metrics")]
fn record_metrics<N: Eq + Hash>(result: &SimulationResult<N>) {
    metrics::counter!("diffusion_runs_total").increment(1);
    metrics::counter!("diffusion_rounds_total").increment(result.stall_round() as u64);
    metrics::histogram!("diffusion_reach").record(result.total_reach() as f64);
}

#[cfg(not(feature = "metrics"))]
fn record_metrics<N: Eq + Hash>(_result: &SimulationResult<N>) {}
