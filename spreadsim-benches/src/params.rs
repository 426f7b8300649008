//! Benchmark parameter types.

use std::fmt;

use spreadsim_core::Topology;

/// Parameters for a single diffusion or generator benchmark case.
#[derive(Clone, Copy, Debug)]
pub struct DiffusionBenchParams {
    /// Network family to generate.
    pub topology: Topology,
    /// Number of nodes in the generated graph.
    pub node_count: usize,
}

impl fmt::Display for DiffusionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.topology {
            Topology::ErdosRenyi => "er",
            Topology::BarabasiAlbert => "ba",
            Topology::WattsStrogatz => "ws",
        };
        write!(f, "{label},n={}", self.node_count)
    }
}
