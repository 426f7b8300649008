//! Generators for the three network families.

use std::collections::BTreeSet;

use rand::{Rng, distributions::Standard};

use crate::{
    error::GeneratorError,
    graph::{AdjacencyList, Graph},
};

fn ensure_nodes(nodes: usize) -> Result<(), GeneratorError> {
    if nodes == 0 {
        return Err(GeneratorError::TooFewNodes {
            minimum: 1,
            got: nodes,
        });
    }
    Ok(())
}

fn ensure_probability(parameter: &'static str, value: f64) -> Result<(), GeneratorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidProbability {
            parameter,
            got: value,
        })
    }
}

/// Generates an Erdős–Rényi graph `G(nodes, probability)`.
///
/// Each unordered pair of distinct nodes is joined independently with
/// `probability`.
///
/// # Errors
/// Returns [`GeneratorError::TooFewNodes`] for an empty graph and
/// [`GeneratorError::InvalidProbability`] when `probability` is outside
/// `[0, 1]`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spreadsim_core::erdos_renyi;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let complete = erdos_renyi(5, 1.0, &mut rng)?;
/// assert_eq!(complete.edge_count(), 10);
/// let empty = erdos_renyi(5, 0.0, &mut rng)?;
/// assert_eq!(empty.edge_count(), 0);
/// # Ok::<(), spreadsim_core::GeneratorError>(())
/// ```
pub fn erdos_renyi<R: Rng + ?Sized>(
    nodes: usize,
    probability: f64,
    rng: &mut R,
) -> Result<AdjacencyList, GeneratorError> {
    ensure_nodes(nodes)?;
    ensure_probability("edge probability", probability)?;
    let mut graph = AdjacencyList::with_nodes(nodes);
    for a in 0..nodes {
        for b in (a + 1)..nodes {
            let draw: f64 = rng.sample(Standard);
            if draw < probability {
                graph.link(a, b);
            }
        }
    }
    Ok(graph)
}

/// Generates a Barabási–Albert graph by preferential attachment.
///
/// Growth starts from a star on nodes `0..=edges` centred on node `0`. Every
/// later node attaches to `edges` distinct existing nodes picked with
/// probability proportional to their degree, which yields exactly
/// `edges + (nodes - edges - 1) * edges` edges.
///
/// # Errors
/// Returns [`GeneratorError::InvalidAttachment`] unless `1 <= edges < nodes`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spreadsim_core::barabasi_albert;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = barabasi_albert(50, 2, &mut rng)?;
/// assert_eq!(graph.edge_count(), 2 + 47 * 2);
/// # Ok::<(), spreadsim_core::GeneratorError>(())
/// ```
pub fn barabasi_albert<R: Rng + ?Sized>(
    nodes: usize,
    edges: usize,
    rng: &mut R,
) -> Result<AdjacencyList, GeneratorError> {
    if edges == 0 || edges >= nodes {
        return Err(GeneratorError::InvalidAttachment { edges, nodes });
    }
    let mut graph = AdjacencyList::with_nodes(nodes);
    // Each node appears once per incident edge, so a uniform pick from this
    // pool is a degree-proportional pick from the graph.
    let mut pool = Vec::with_capacity(edges.saturating_mul(nodes).saturating_mul(2));
    for leaf in 1..=edges {
        graph.link(0, leaf);
        pool.extend([0, leaf]);
    }

    for source in (edges + 1)..nodes {
        let mut targets = BTreeSet::new();
        while targets.len() < edges {
            let index = rng.gen_range(0..pool.len());
            if let Some(&target) = pool.get(index) {
                targets.insert(target);
            }
        }
        for &target in &targets {
            graph.link(source, target);
            pool.extend([target, source]);
        }
    }
    Ok(graph)
}

/// Generates a Watts–Strogatz small-world graph.
///
/// Builds a ring lattice joining each node to its `neighbours / 2` nearest
/// nodes on either side, then rewires each lattice edge `(u, u + j)` with
/// probability `rewire` to a uniformly chosen node that is neither `u` nor
/// already adjacent to it. Nodes already adjacent to every other node keep
/// their edge. Rewiring preserves the edge count of `nodes * (neighbours / 2)`.
///
/// # Errors
/// Returns [`GeneratorError::TooFewNodes`] for an empty graph,
/// [`GeneratorError::InvalidNeighbourhood`] unless `neighbours < nodes`, and
/// [`GeneratorError::InvalidProbability`] when `rewire` is outside `[0, 1]`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spreadsim_core::{Graph, watts_strogatz};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let ring = watts_strogatz(10, 4, 0.0, &mut rng)?;
/// assert_eq!(ring.edge_count(), 20);
/// assert!((0..10).all(|node| ring.degree(&node) == 4));
/// # Ok::<(), spreadsim_core::GeneratorError>(())
/// ```
pub fn watts_strogatz<R: Rng + ?Sized>(
    nodes: usize,
    neighbours: usize,
    rewire: f64,
    rng: &mut R,
) -> Result<AdjacencyList, GeneratorError> {
    ensure_nodes(nodes)?;
    if neighbours >= nodes {
        return Err(GeneratorError::InvalidNeighbourhood { neighbours, nodes });
    }
    ensure_probability("rewiring probability", rewire)?;

    let half = neighbours / 2;
    let mut graph = AdjacencyList::with_nodes(nodes);
    for offset in 1..=half {
        for u in 0..nodes {
            graph.link(u, (u + offset) % nodes);
        }
    }

    for offset in 1..=half {
        for u in 0..nodes {
            let draw: f64 = rng.sample(Standard);
            if draw >= rewire || graph.degree(&u) >= nodes - 1 {
                continue;
            }
            let w = loop {
                let candidate = rng.gen_range(0..nodes);
                if candidate != u && !graph.has_edge(u, candidate) {
                    break candidate;
                }
            };
            if graph.remove_edge(u, (u + offset) % nodes) {
                graph.link(u, w);
            }
        }
    }
    Ok(graph)
}
