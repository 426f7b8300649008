//! Graph capability consumed by seed selection and the diffusion engine.
//!
//! The engine never touches a concrete container. Anything able to enumerate
//! its nodes and the neighbours of a node can host a simulation, so each
//! storage layout ships as a small adapter implementing [`Graph`].

mod adjacency_list;
mod adjacency_map;
mod adjacency_matrix;

use std::{fmt::Debug, hash::Hash};

pub use self::{
    adjacency_list::AdjacencyList, adjacency_map::AdjacencyMap, adjacency_matrix::AdjacencyMatrix,
};

/// Read-only view of an undirected graph.
///
/// Implementations must keep the adjacency relation symmetric and must only
/// yield neighbours that are themselves members of the node set. Neighbour
/// lists are not expected to contain duplicates.
///
/// # Examples
/// ```
/// use spreadsim_core::{AdjacencyList, Graph};
///
/// let graph = AdjacencyList::from_edges(3, &[(0, 1), (1, 2)])?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.degree(&1), 2);
/// assert!(graph.contains(&2));
/// assert!(!graph.contains(&3));
/// # Ok::<(), spreadsim_core::GraphError>(())
/// ```
pub trait Graph {
    /// Opaque node identifier.
    type Node: Clone + Eq + Hash + Debug;

    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns whether the graph has no nodes.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Enumerates every node. Order is adapter-defined but stable for a
    /// given graph value.
    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_;

    /// Enumerates the neighbours of `node`. Unknown nodes yield nothing.
    fn neighbours(&self, node: &Self::Node) -> impl Iterator<Item = Self::Node> + '_;

    /// Returns whether `node` is a member of the node set.
    fn contains(&self, node: &Self::Node) -> bool;

    /// Returns the neighbour count of `node`.
    fn degree(&self, node: &Self::Node) -> usize {
        self.neighbours(node).count()
    }
}
