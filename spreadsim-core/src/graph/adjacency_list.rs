//! Index-addressed adjacency lists.

use crate::error::GraphError;

use super::Graph;

/// Undirected graph over the dense identifiers `0..node_count`, storing one
/// sorted neighbour list per node.
///
/// This is the representation produced by the topology generators.
///
/// # Examples
/// ```
/// use spreadsim_core::{AdjacencyList, Graph};
///
/// let graph = AdjacencyList::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
/// let neighbours: Vec<usize> = graph.neighbours(&0).collect();
/// assert_eq!(neighbours, [1, 3]);
/// assert_eq!(graph.edge_count(), 4);
/// # Ok::<(), spreadsim_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Creates a graph with `node_count` isolated nodes.
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Builds a graph from an undirected edge list.
    ///
    /// Each pair is inserted in both directions. Duplicate pairs collapse to a
    /// single edge and self-loops are ignored.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] when an endpoint is not below
    /// `node_count`.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut graph = Self::with_nodes(node_count);
        for &(a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Builds a graph from explicit neighbour lists, validating that every
    /// neighbour exists and that the relation is symmetric.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] for neighbours outside the node
    /// set and [`GraphError::AsymmetricAdjacency`] when a reverse entry is
    /// missing.
    ///
    /// # Examples
    /// ```
    /// use spreadsim_core::{AdjacencyList, GraphError};
    ///
    /// let err = AdjacencyList::from_neighbour_lists(vec![vec![1], vec![]])
    ///     .expect_err("missing reverse edge");
    /// assert_eq!(err, GraphError::AsymmetricAdjacency { from: 0, to: 1 });
    /// ```
    pub fn from_neighbour_lists(lists: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let node_count = lists.len();
        let mut adjacency = lists;
        for neighbours in &mut adjacency {
            neighbours.sort_unstable();
            neighbours.dedup();
        }
        for (from, neighbours) in adjacency.iter().enumerate() {
            for &to in neighbours {
                let reverse = adjacency
                    .get(to)
                    .ok_or(GraphError::NodeOutOfBounds { node: to, node_count })?;
                if reverse.binary_search(&from).is_err() {
                    return Err(GraphError::AsymmetricAdjacency { from, to });
                }
            }
        }
        Ok(Self { adjacency })
    }

    /// Inserts the undirected edge `{a, b}`. Returns `false` when the edge was
    /// already present or is a self-loop.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] when either endpoint is not a
    /// member of the graph.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<bool, GraphError> {
        let node_count = self.adjacency.len();
        for node in [a, b] {
            if node >= node_count {
                return Err(GraphError::NodeOutOfBounds { node, node_count });
            }
        }
        if a == b || self.has_edge(a, b) {
            return Ok(false);
        }
        self.insert_half(a, b);
        self.insert_half(b, a);
        Ok(true)
    }

    /// Removes the undirected edge `{a, b}`, returning whether it existed.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> bool {
        let removed = self.remove_half(a, b);
        if removed {
            self.remove_half(b, a);
        }
        removed
    }

    /// Returns whether `a` and `b` are adjacent.
    #[must_use]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbours| neighbours.binary_search(&b).is_ok())
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the sorted neighbour slice for `node`, or an empty slice when
    /// the node is unknown.
    #[must_use]
    pub fn neighbour_slice(&self, node: usize) -> &[usize] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Inserts `{a, b}` for endpoints the caller allocated itself.
    pub(crate) fn link(&mut self, a: usize, b: usize) {
        if a != b {
            self.insert_half(a, b);
            self.insert_half(b, a);
        }
    }

    fn insert_half(&mut self, from: usize, to: usize) {
        if let Some(neighbours) = self.adjacency.get_mut(from) {
            if let Err(position) = neighbours.binary_search(&to) {
                neighbours.insert(position, to);
            }
        }
    }

    fn remove_half(&mut self, from: usize, to: usize) -> bool {
        let Some(neighbours) = self.adjacency.get_mut(from) else {
            return false;
        };
        match neighbours.binary_search(&to) {
            Ok(position) => {
                neighbours.remove(position);
                true
            }
            Err(_) => false,
        }
    }
}

impl Graph for AdjacencyList {
    type Node = usize;

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.adjacency.len()
    }

    fn neighbours(&self, node: &usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbour_slice(*node).iter().copied()
    }

    fn contains(&self, node: &usize) -> bool {
        *node < self.adjacency.len()
    }

    fn degree(&self, node: &usize) -> usize {
        self.neighbour_slice(*node).len()
    }
}
