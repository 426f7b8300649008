//! Dense boolean adjacency matrices.

use crate::error::GraphError;

use super::Graph;

/// Undirected graph stored as a row-major `node_count × node_count` boolean
/// matrix over the identifiers `0..node_count`.
///
/// # Examples
/// ```
/// use spreadsim_core::{AdjacencyMatrix, Graph};
///
/// let graph = AdjacencyMatrix::from_cells(3, vec![
///     false, true, false,
///     true, false, true,
///     false, true, false,
/// ])?;
/// assert_eq!(graph.degree(&1), 2);
/// assert_eq!(graph.neighbours(&0).collect::<Vec<_>>(), [1]);
/// # Ok::<(), spreadsim_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    node_count: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Wraps a flat row-major matrix, checking that it is square and
    /// symmetric. Diagonal entries are cleared.
    ///
    /// # Errors
    /// Returns [`GraphError::DimensionMismatch`] when `cells` does not hold
    /// `node_count²` entries and [`GraphError::AsymmetricAdjacency`] when
    /// `cells[i][j] != cells[j][i]`.
    pub fn from_cells(node_count: usize, cells: Vec<bool>) -> Result<Self, GraphError> {
        let expected = node_count.checked_mul(node_count);
        if expected != Some(cells.len()) {
            return Err(GraphError::DimensionMismatch {
                cells: cells.len(),
                node_count,
            });
        }
        let mut matrix = Self { node_count, cells };
        for node in 0..node_count {
            if let Some(cell) = matrix.cell_mut(node, node) {
                *cell = false;
            }
        }
        for from in 0..node_count {
            for to in (from + 1)..node_count {
                if matrix.is_set(from, to) != matrix.is_set(to, from) {
                    let (from_side, to_side) = if matrix.is_set(from, to) {
                        (from, to)
                    } else {
                        (to, from)
                    };
                    return Err(GraphError::AsymmetricAdjacency {
                        from: from_side,
                        to: to_side,
                    });
                }
            }
        }
        Ok(matrix)
    }

    /// Builds a matrix from an undirected edge list, ignoring self-loops.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] when an endpoint is not below
    /// `node_count`.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let cells = node_count
            .checked_mul(node_count)
            .ok_or(GraphError::DimensionMismatch {
                cells: usize::MAX,
                node_count,
            })?;
        let mut matrix = Self {
            node_count,
            cells: vec![false; cells],
        };
        for &(a, b) in edges {
            for node in [a, b] {
                if node >= node_count {
                    return Err(GraphError::NodeOutOfBounds { node, node_count });
                }
            }
            if a == b {
                continue;
            }
            for (from, to) in [(a, b), (b, a)] {
                if let Some(cell) = matrix.cell_mut(from, to) {
                    *cell = true;
                }
            }
        }
        Ok(matrix)
    }

    fn row(&self, node: usize) -> &[bool] {
        if node >= self.node_count {
            return &[];
        }
        self.cells
            .chunks_exact(self.node_count)
            .nth(node)
            .unwrap_or_default()
    }

    fn is_set(&self, from: usize, to: usize) -> bool {
        self.row(from).get(to).copied().unwrap_or(false)
    }

    fn cell_mut(&mut self, from: usize, to: usize) -> Option<&mut bool> {
        if from >= self.node_count || to >= self.node_count {
            return None;
        }
        let index = from.checked_mul(self.node_count)?.checked_add(to)?;
        self.cells.get_mut(index)
    }
}

impl Graph for AdjacencyMatrix {
    type Node = usize;

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.node_count
    }

    fn neighbours(&self, node: &usize) -> impl Iterator<Item = usize> + '_ {
        self.row(*node)
            .iter()
            .enumerate()
            .filter_map(|(index, &set)| set.then_some(index))
    }

    fn contains(&self, node: &usize) -> bool {
        *node < self.node_count
    }
}
