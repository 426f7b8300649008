//! Random graph topologies compared by the experiment runner.
//!
//! Provides Erdős–Rényi, Barabási–Albert, and Watts–Strogatz generators,
//! each returning an [`AdjacencyList`] built from a caller-supplied RNG so
//! seeded runs reproduce the same graphs.

mod generators;

use std::fmt;

use rand::Rng;
use tracing::{debug, instrument};

use crate::{error::GeneratorError, graph::AdjacencyList};

pub use self::generators::{barabasi_albert, erdos_renyi, watts_strogatz};

/// Network families supported by [`TopologyParams::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Topology {
    /// Uniform random graph `G(n, p)`.
    ErdosRenyi,
    /// Scale-free graph grown by preferential attachment.
    BarabasiAlbert,
    /// Small-world ring lattice with random rewiring.
    WattsStrogatz,
}

impl Topology {
    /// Every topology, in reporting order.
    pub const ALL: [Self; 3] = [Self::ErdosRenyi, Self::BarabasiAlbert, Self::WattsStrogatz];

    /// Human-readable name used in reports.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ErdosRenyi => "Erdős-Rényi",
            Self::BarabasiAlbert => "Barabási-Albert",
            Self::WattsStrogatz => "Watts-Strogatz",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parameters for the three topology generators.
///
/// Defaults describe 50-node networks: `G(50, 0.08)`, preferential
/// attachment with two edges per new node, and a six-neighbour ring rewired
/// with probability `0.2`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spreadsim_core::{Graph, Topology, TopologyParams};
///
/// let params = TopologyParams::default();
/// let mut rng = SmallRng::seed_from_u64(42);
/// let graphs = params.generate_all(&mut rng)?;
/// assert_eq!(graphs.len(), 3);
/// assert_eq!(graphs[0].0, Topology::ErdosRenyi);
/// assert!(graphs.iter().all(|(_, graph)| graph.node_count() == 50));
/// # Ok::<(), spreadsim_core::GeneratorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopologyParams {
    /// Node count shared by every topology.
    pub nodes: usize,
    /// Edge probability for Erdős–Rényi graphs.
    pub er_probability: f64,
    /// Edges attached per new node for Barabási–Albert graphs.
    pub ba_edges: usize,
    /// Ring neighbours per node for Watts–Strogatz graphs.
    pub ws_neighbours: usize,
    /// Rewiring probability for Watts–Strogatz graphs.
    pub ws_rewire: f64,
}

impl Default for TopologyParams {
    fn default() -> Self {
        Self {
            nodes: 50,
            er_probability: 0.08,
            ba_edges: 2,
            ws_neighbours: 6,
            ws_rewire: 0.2,
        }
    }
}

impl TopologyParams {
    /// Generates one graph of the requested family.
    ///
    /// # Errors
    /// Returns [`GeneratorError`] when the parameters for `topology` are
    /// invalid.
    #[instrument(
        name = "core.generate",
        err,
        skip_all,
        fields(topology = %topology, nodes = self.nodes),
    )]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        topology: Topology,
        rng: &mut R,
    ) -> Result<AdjacencyList, GeneratorError> {
        let graph = match topology {
            Topology::ErdosRenyi => erdos_renyi(self.nodes, self.er_probability, rng)?,
            Topology::BarabasiAlbert => barabasi_albert(self.nodes, self.ba_edges, rng)?,
            Topology::WattsStrogatz => {
                watts_strogatz(self.nodes, self.ws_neighbours, self.ws_rewire, rng)?
            }
        };
        debug!(edges = graph.edge_count(), "topology generated");
        Ok(graph)
    }

    /// Generates every topology in [`Topology::ALL`] order.
    ///
    /// # Errors
    /// Returns the first [`GeneratorError`] raised by a generator.
    pub fn generate_all<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<(Topology, AdjacencyList)>, GeneratorError> {
        Topology::ALL
            .into_iter()
            .map(|topology| Ok((topology, self.generate(topology, rng)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests;
