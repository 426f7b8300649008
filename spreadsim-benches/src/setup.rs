//! Graph and simulation fixtures for the benchmarks.
//!
//! Every helper is seeded so repeated benchmark runs measure identical
//! graphs.

use rand::{SeedableRng, rngs::SmallRng};
use spreadsim_core::{AdjacencyList, SeedStrategy, TopologyParams, select_seed};

use crate::{error::BenchSetupError, params::DiffusionBenchParams};

/// Mean degree targeted by the Erdős-Rényi benchmark graphs.
const TARGET_MEAN_DEGREE: u32 = 4;

/// Topology parameters scaled to `params.node_count`.
///
/// Keeps the Erdős-Rényi mean degree near four at every size so larger
/// graphs are not disproportionately dense.
#[must_use]
pub fn topology_params(params: &DiffusionBenchParams) -> TopologyParams {
    let defaults = TopologyParams::default();
    let nodes = params.node_count;
    let er_probability = u32::try_from(nodes.saturating_sub(1))
        .ok()
        .filter(|&others| others > 0)
        .map_or(0.0, |others| {
            (f64::from(TARGET_MEAN_DEGREE) / f64::from(others)).min(1.0)
        });
    TopologyParams {
        nodes,
        er_probability,
        ..defaults
    }
}

/// Generates the benchmark graph for `params` from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when the scaled parameters are
/// invalid for the requested topology.
pub fn build_graph(
    params: &DiffusionBenchParams,
    seed: u64,
) -> Result<AdjacencyList, BenchSetupError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok(topology_params(params).generate(params.topology, &mut rng)?)
}

/// Picks the start node for `strategy` on `graph` from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::Spread`] when `graph` is empty.
pub fn start_node(
    graph: &AdjacencyList,
    strategy: SeedStrategy,
    seed: u64,
) -> Result<usize, BenchSetupError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok(select_seed(graph, strategy, &mut rng)?)
}
