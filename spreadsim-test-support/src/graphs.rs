//! Small deterministic graphs with hand-checkable diffusion outcomes.

use spreadsim_core::AdjacencyList;

fn build(node_count: usize, edges: &[(usize, usize)]) -> AdjacencyList {
    AdjacencyList::from_edges(node_count, edges).expect("fixture edges must be in bounds")
}

/// Ring `0 - 1 - ... - (n-1) - 0`.
///
/// # Examples
/// ```
/// use spreadsim_core::Graph;
/// use spreadsim_test_support::graphs::cycle;
///
/// let ring = cycle(4);
/// assert!((0..4).all(|node| ring.degree(&node) == 2));
/// ```
#[must_use]
pub fn cycle(nodes: usize) -> AdjacencyList {
    let edges: Vec<_> = (0..nodes).map(|node| (node, (node + 1) % nodes)).collect();
    build(nodes, &edges)
}

/// Line `0 - 1 - ... - (n-1)`.
#[must_use]
pub fn path(nodes: usize) -> AdjacencyList {
    let edges: Vec<_> = (1..nodes).map(|node| (node - 1, node)).collect();
    build(nodes, &edges)
}

/// Node `0` joined to each of `leaves` outer nodes.
#[must_use]
pub fn star(leaves: usize) -> AdjacencyList {
    let edges: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    build(leaves + 1, &edges)
}

/// `nodes` nodes and no edges.
#[must_use]
pub fn isolated(nodes: usize) -> AdjacencyList {
    AdjacencyList::with_nodes(nodes)
}

/// A path on `0..left` next to a disjoint path on `left..left + right`.
#[must_use]
pub fn two_components(left: usize, right: usize) -> AdjacencyList {
    let edges: Vec<_> = (1..left)
        .map(|node| (node - 1, node))
        .chain((left + 1..left + right).map(|node| (node - 1, node)))
        .collect();
    build(left + right, &edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use spreadsim_core::Graph;

    #[rstest]
    #[case::cycle(cycle(5), 5, 5)]
    #[case::path(path(5), 5, 4)]
    #[case::star(star(3), 4, 3)]
    #[case::isolated(isolated(3), 3, 0)]
    #[case::two_components(two_components(3, 2), 5, 3)]
    fn fixtures_have_expected_shape(
        #[case] graph: AdjacencyList,
        #[case] nodes: usize,
        #[case] edges: usize,
    ) {
        assert_eq!(graph.node_count(), nodes);
        assert_eq!(graph.edge_count(), edges);
    }

    #[rstest]
    fn two_components_are_disjoint() {
        let graph = two_components(3, 2);
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 3));
        assert!(graph.has_edge(3, 4));
    }
}
