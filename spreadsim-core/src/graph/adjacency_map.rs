//! Hash-map adjacency for arbitrary node identifiers.

use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use super::Graph;

/// Undirected graph keyed by any hashable identifier.
///
/// Edges are always inserted in both directions and endpoints are added to
/// the node set on demand, so the symmetry and membership invariants hold by
/// construction.
///
/// Node enumeration follows the underlying [`HashMap`] iteration order. That
/// order is arbitrary but does not change while the graph is left untouched.
///
/// # Examples
/// ```
/// use spreadsim_core::{AdjacencyMap, Graph};
///
/// let mut graph = AdjacencyMap::new();
/// graph.add_edge("alice", "bob");
/// graph.add_edge("bob", "carol");
/// graph.add_node("dave");
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.degree(&"bob"), 2);
/// assert_eq!(graph.degree(&"dave"), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMap<N: Eq + Hash> {
    adjacency: HashMap<N, HashSet<N>>,
}

impl<N: Eq + Hash> Default for AdjacencyMap<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> AdjacencyMap<N> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an undirected edge list.
    #[must_use]
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N)>) -> Self {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    /// Adds `node` to the node set, returning `false` if it was present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashSet::new());
        true
    }

    /// Inserts the undirected edge `{a, b}`, adding missing endpoints. Returns
    /// `false` for self-loops and edges that already exist.
    pub fn add_edge(&mut self, a: N, b: N) -> bool {
        if a == b {
            self.add_node(a);
            return false;
        }
        let inserted = self
            .adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        inserted
    }
}

impl<N: Clone + Eq + Hash + Debug> Graph for AdjacencyMap<N> {
    type Node = N;

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.adjacency.keys().cloned()
    }

    fn neighbours(&self, node: &N) -> impl Iterator<Item = N> + '_ {
        self.adjacency.get(node).into_iter().flatten().cloned()
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, HashSet::len)
    }
}
