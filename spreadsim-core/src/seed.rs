//! Seed selection: picking the node where an outbreak starts.

use std::{fmt, str::FromStr, sync::Arc};

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument, warn};

use crate::{Result, error::SpreadError, graph::Graph};

/// How [`select_seed`] chooses the starting node.
///
/// Strategies parse from their lowercase tags. The original Portuguese tag
/// `aleatorio` is accepted as an alias of `random`.
///
/// # Examples
/// ```
/// use spreadsim_core::{SeedStrategy, SpreadError};
///
/// assert_eq!("hub".parse::<SeedStrategy>()?, SeedStrategy::Hub);
/// assert_eq!("aleatorio".parse::<SeedStrategy>()?, SeedStrategy::Random);
/// assert!("busiest".parse::<SeedStrategy>().is_err());
/// # Ok::<(), SpreadError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum SeedStrategy {
    /// Draw a node uniformly at random.
    Random,
    /// Pick a node of maximum degree.
    Hub,
}

impl SeedStrategy {
    /// Every strategy, in reporting order.
    pub const ALL: [Self; 2] = [Self::Random, Self::Hub];

    /// Returns the canonical tag for this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Hub => "hub",
        }
    }
}

impl fmt::Display for SeedStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedStrategy {
    type Err = SpreadError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "random" | "aleatorio" => Ok(Self::Random),
            "hub" => Ok(Self::Hub),
            _ => {
                warn!(tag = raw, "unknown seeding strategy");
                Err(SpreadError::UnknownStrategy {
                    tag: Arc::from(raw),
                })
            }
        }
    }
}

/// Picks exactly one starting node from `graph` according to `strategy`.
///
/// [`SeedStrategy::Hub`] returns the first node, in the graph's enumeration
/// order, whose degree is maximal. Repeated calls on the same graph value
/// therefore return the same node. [`SeedStrategy::Random`] makes one
/// independent uniform draw from `rng` per call.
///
/// # Errors
/// Returns [`SpreadError::EmptyGraph`] when the graph has no nodes.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spreadsim_core::{AdjacencyList, SeedStrategy, select_seed};
///
/// let star = AdjacencyList::from_edges(4, &[(2, 0), (2, 1), (2, 3)])?;
/// let mut rng = SmallRng::seed_from_u64(7);
/// assert_eq!(select_seed(&star, SeedStrategy::Hub, &mut rng)?, 2);
/// assert!(select_seed(&star, SeedStrategy::Random, &mut rng)? < 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.select_seed",
    err,
    skip_all,
    fields(strategy = %strategy, nodes = graph.node_count()),
)]
pub fn select_seed<G, R>(graph: &G, strategy: SeedStrategy, rng: &mut R) -> Result<G::Node>
where
    G: Graph,
    R: Rng + ?Sized,
{
    if graph.is_empty() {
        warn!("cannot select a seed from an empty graph");
        return Err(SpreadError::EmptyGraph);
    }
    let seed = match strategy {
        SeedStrategy::Random => {
            let nodes: Vec<G::Node> = graph.nodes().collect();
            nodes.choose(rng).cloned()
        }
        SeedStrategy::Hub => highest_degree(graph),
    };
    let node = seed.ok_or(SpreadError::EmptyGraph)?;
    debug!(seed = ?node, degree = graph.degree(&node), "seed selected");
    Ok(node)
}

fn highest_degree<G: Graph>(graph: &G) -> Option<G::Node> {
    let mut best: Option<(G::Node, usize)> = None;
    for node in graph.nodes() {
        let degree = graph.degree(&node);
        if best.as_ref().is_none_or(|&(_, top)| degree > top) {
            best = Some((node, degree));
        }
    }
    best.map(|(node, _)| node)
}
