//! Experiment runner comparing seeding strategies across several graphs.
//!
//! An [`Experiment`] owns named graphs and an ordered list of
//! [`SeedStrategy`] values. Running it selects a seed and executes one SI
//! run per `(graph, strategy)` combination, graph-major then
//! strategy-minor, and collects every outcome into [`ExperimentResults`].

use std::{hash::Hash, slice};

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    Result,
    diffusion::SiSimulation,
    graph::Graph,
    result::SimulationResult,
    seed::{SeedStrategy, select_seed},
};

/// A batch of SI runs over named graphs and seeding strategies.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spreadsim_core::{AdjacencyList, Experiment, SeedStrategy, SimulationBuilder};
///
/// let star = AdjacencyList::from_edges(4, &[(0, 1), (0, 2), (0, 3)])?;
/// let simulation = SimulationBuilder::new().with_infection_probability(1.0).build()?;
/// let experiment = Experiment::new(simulation)
///     .with_graph("star", star)
///     .with_strategy(SeedStrategy::Hub);
/// let mut rng = SmallRng::seed_from_u64(4);
/// let results = experiment.run(&mut rng)?;
/// let hub = results.get("star", SeedStrategy::Hub).expect("combination ran");
/// assert_eq!(*hub.start_node(), 0);
/// assert_eq!(hub.history(), [1, 4, 4]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Experiment<G> {
    simulation: SiSimulation,
    graphs: Vec<(String, G)>,
    strategies: Vec<SeedStrategy>,
}

impl<G: Graph> Experiment<G> {
    /// Creates an experiment with no graphs and no strategies.
    #[must_use]
    pub const fn new(simulation: SiSimulation) -> Self {
        Self {
            simulation,
            graphs: Vec::new(),
            strategies: Vec::new(),
        }
    }

    /// Appends a named graph. Graphs run in insertion order.
    #[must_use]
    pub fn with_graph(mut self, name: impl Into<String>, graph: G) -> Self {
        self.graphs.push((name.into(), graph));
        self
    }

    /// Appends a seeding strategy. Strategies run in insertion order.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SeedStrategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Appends every strategy yielded by `strategies`.
    #[must_use]
    pub fn with_strategies(mut self, strategies: impl IntoIterator<Item = SeedStrategy>) -> Self {
        self.strategies.extend(strategies);
        self
    }

    /// Simulation shared by every combination.
    #[must_use]
    pub const fn simulation(&self) -> &SiSimulation {
        &self.simulation
    }

    /// Names of the registered graphs, in run order.
    #[must_use]
    pub fn graph_names(&self) -> impl Iterator<Item = &str> {
        self.graphs.iter().map(|(name, _)| name.as_str())
    }

    /// Registered strategies, in run order.
    #[must_use]
    pub fn strategies(&self) -> &[SeedStrategy] {
        &self.strategies
    }

    /// Runs every `(graph, strategy)` combination against `rng`.
    ///
    /// # Errors
    /// Returns the first [`crate::SpreadError`] raised by seed selection or
    /// by a simulation run. Later combinations are not attempted.
    #[instrument(
        name = "core.experiment",
        err,
        skip(self, rng),
        fields(graphs = self.graphs.len(), strategies = self.strategies.len()),
    )]
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ExperimentResults<G::Node>> {
        let mut records = Vec::with_capacity(self.graphs.len() * self.strategies.len());
        for (name, graph) in &self.graphs {
            for &strategy in &self.strategies {
                let start = select_seed(graph, strategy, rng)?;
                let result = self.simulation.run(graph, &start, rng)?;
                debug!(
                    graph = %name,
                    strategy = %strategy,
                    reach = result.total_reach(),
                    stall_round = result.stall_round(),
                    "combination completed"
                );
                records.push(ExperimentRecord {
                    graph: name.clone(),
                    strategy,
                    result,
                });
            }
        }
        Ok(ExperimentResults { records })
    }
}

/// Outcome of one `(graph, strategy)` combination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExperimentRecord<N: Eq + Hash> {
    graph: String,
    strategy: SeedStrategy,
    result: SimulationResult<N>,
}

impl<N: Eq + Hash> ExperimentRecord<N> {
    /// Name the graph was registered under.
    #[must_use]
    pub fn graph(&self) -> &str {
        &self.graph
    }

    /// Strategy that picked the start node.
    #[must_use]
    pub const fn strategy(&self) -> SeedStrategy {
        self.strategy
    }

    /// Outcome of the simulation run.
    #[must_use]
    pub const fn result(&self) -> &SimulationResult<N> {
        &self.result
    }
}

/// Records produced by [`Experiment::run`], in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ExperimentResults<N: Eq + Hash> {
    records: Vec<ExperimentRecord<N>>,
}

impl<N: Eq + Hash> ExperimentResults<N> {
    /// Looks up the run for `graph` seeded with `strategy`.
    #[must_use]
    pub fn get(&self, graph: &str, strategy: SeedStrategy) -> Option<&SimulationResult<N>> {
        self.records
            .iter()
            .find(|record| record.graph == graph && record.strategy == strategy)
            .map(|record| &record.result)
    }

    /// All records in run order.
    #[must_use]
    pub fn records(&self) -> &[ExperimentRecord<N>] {
        &self.records
    }

    /// Iterates over the records in run order.
    #[must_use]
    pub fn iter(&self) -> slice::Iter<'_, ExperimentRecord<N>> {
        self.records.iter()
    }

    /// Number of combinations that ran.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no combination ran.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, N: Eq + Hash> IntoIterator for &'a ExperimentResults<N> {
    type Item = &'a ExperimentRecord<N>;
    type IntoIter = slice::Iter<'a, ExperimentRecord<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<N: Eq + Hash> IntoIterator for ExperimentResults<N> {
    type Item = ExperimentRecord<N>;
    type IntoIter = std::vec::IntoIter<ExperimentRecord<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::{fixture, rstest};

    use crate::{config::SimulationBuilder, error::SpreadError, graph::AdjacencyList};

    #[fixture]
    fn certain() -> SiSimulation {
        SimulationBuilder::new()
            .with_infection_probability(1.0)
            .with_max_rounds(10)
            .build()
            .expect("configuration is valid")
    }

    fn star(leaves: usize) -> AdjacencyList {
        let edges: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
        AdjacencyList::from_edges(leaves + 1, &edges).expect("edges are in bounds")
    }

    fn path(nodes: usize) -> AdjacencyList {
        let edges: Vec<_> = (1..nodes).map(|node| (node - 1, node)).collect();
        AdjacencyList::from_edges(nodes, &edges).expect("edges are in bounds")
    }

    #[rstest]
    fn runs_graph_major_then_strategy_minor(certain: SiSimulation) {
        let experiment = Experiment::new(certain)
            .with_graph("star", star(3))
            .with_graph("path", path(4))
            .with_strategies([SeedStrategy::Random, SeedStrategy::Hub]);
        let mut rng = SmallRng::seed_from_u64(11);
        let results = experiment.run(&mut rng).expect("experiment must succeed");

        let order: Vec<(&str, SeedStrategy)> = results
            .iter()
            .map(|record| (record.graph(), record.strategy()))
            .collect();
        assert_eq!(
            order,
            [
                ("star", SeedStrategy::Random),
                ("star", SeedStrategy::Hub),
                ("path", SeedStrategy::Random),
                ("path", SeedStrategy::Hub),
            ]
        );
    }

    #[rstest]
    fn lookup_finds_each_combination(certain: SiSimulation) {
        let experiment = Experiment::new(certain)
            .with_graph("star", star(4))
            .with_graph("path", path(3))
            .with_strategy(SeedStrategy::Hub);
        let mut rng = SmallRng::seed_from_u64(2);
        let results = experiment.run(&mut rng).expect("experiment must succeed");

        let star_hub = results.get("star", SeedStrategy::Hub).expect("star ran");
        assert_eq!(*star_hub.start_node(), 0);
        assert_eq!(star_hub.history(), [1, 5, 5]);

        let path_hub = results.get("path", SeedStrategy::Hub).expect("path ran");
        assert_eq!(*path_hub.start_node(), 1);
        assert_eq!(path_hub.history(), [1, 3, 3]);

        assert!(results.get("path", SeedStrategy::Random).is_none());
        assert!(results.get("ring", SeedStrategy::Hub).is_none());
        assert_eq!(results.len(), 2);
    }

    #[rstest]
    fn empty_graph_aborts_the_run(certain: SiSimulation) {
        let experiment = Experiment::new(certain)
            .with_graph("empty", AdjacencyList::with_nodes(0))
            .with_graph("star", star(2))
            .with_strategy(SeedStrategy::Random);
        let mut rng = SmallRng::seed_from_u64(0);
        let err = experiment.run(&mut rng).expect_err("empty graph must fail");
        assert_eq!(err, SpreadError::EmptyGraph);
    }

    #[rstest]
    fn no_strategies_yield_no_records(certain: SiSimulation) {
        let experiment = Experiment::new(certain).with_graph("star", star(2));
        let mut rng = SmallRng::seed_from_u64(0);
        let results = experiment.run(&mut rng).expect("experiment must succeed");
        assert!(results.is_empty());
        assert_eq!(experiment.graph_names().collect::<Vec<_>>(), ["star"]);
    }

    #[rstest]
    fn seeded_runs_are_reproducible() {
        let simulation = SimulationBuilder::new()
            .with_infection_probability(0.4)
            .build()
            .expect("configuration is valid");
        let experiment = Experiment::new(simulation)
            .with_graph("path", path(12))
            .with_graph("star", star(9))
            .with_strategies(SeedStrategy::ALL);
        let run = || {
            let mut rng = SmallRng::seed_from_u64(77);
            experiment.run(&mut rng).expect("experiment must succeed")
        };
        assert_eq!(run(), run());
    }
}
