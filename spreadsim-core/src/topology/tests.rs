//! Unit tests for the topology generators.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;

use super::{Topology, TopologyParams, barabasi_albert, erdos_renyi, watts_strogatz};
use crate::{
    error::GeneratorError,
    graph::{AdjacencyList, Graph},
    test_utils::suite_proptest_config,
};

/// Asserts the adjacency is symmetric, loop-free, and stays in bounds.
fn assert_well_formed(graph: &AdjacencyList) {
    let node_count = graph.node_count();
    for node in graph.nodes() {
        for neighbour in graph.neighbours(&node) {
            assert_ne!(node, neighbour, "self-loop at {node}");
            assert!(neighbour < node_count, "neighbour {neighbour} out of bounds");
            assert!(graph.has_edge(neighbour, node), "{node} -> {neighbour} is one-way");
        }
    }
}

#[rstest]
#[case::erdos_renyi(Topology::ErdosRenyi, "Erdős-Rényi")]
#[case::barabasi_albert(Topology::BarabasiAlbert, "Barabási-Albert")]
#[case::watts_strogatz(Topology::WattsStrogatz, "Watts-Strogatz")]
fn display_names_match_reports(#[case] topology: Topology, #[case] expected: &str) {
    assert_eq!(topology.to_string(), expected);
}

#[rstest]
fn default_params_generate_fifty_node_graphs() {
    let mut rng = SmallRng::seed_from_u64(42);
    let graphs = TopologyParams::default()
        .generate_all(&mut rng)
        .expect("defaults are valid");
    let order: Vec<Topology> = graphs.iter().map(|(topology, _)| *topology).collect();
    assert_eq!(order, Topology::ALL);
    for (_, graph) in &graphs {
        assert_eq!(graph.node_count(), 50);
        assert_well_formed(graph);
    }
}

#[rstest]
fn generation_is_reproducible_for_a_seed() {
    let params = TopologyParams::default();
    let build = || {
        let mut rng = SmallRng::seed_from_u64(2024);
        params.generate_all(&mut rng).expect("defaults are valid")
    };
    assert_eq!(build(), build());
}

#[rstest]
fn barabasi_albert_starts_from_a_star() {
    let mut rng = SmallRng::seed_from_u64(1);
    let graph = barabasi_albert(4, 3, &mut rng).expect("1 <= m < n");
    assert_eq!(graph.neighbour_slice(0), [1, 2, 3]);
    assert_eq!(graph.edge_count(), 3);
}

#[rstest]
fn watts_strogatz_full_rewire_keeps_edge_count() {
    let mut rng = SmallRng::seed_from_u64(8);
    let graph = watts_strogatz(30, 6, 1.0, &mut rng).expect("parameters are valid");
    assert_eq!(graph.edge_count(), 90);
    assert_well_formed(&graph);
}

#[rstest]
fn watts_strogatz_odd_neighbourhood_rounds_down() {
    let mut rng = SmallRng::seed_from_u64(8);
    let graph = watts_strogatz(9, 5, 0.0, &mut rng).expect("parameters are valid");
    assert!((0..9).all(|node| graph.degree(&node) == 4));
}

#[rstest]
#[case::er_empty(erdos_renyi(0, 0.5, &mut SmallRng::seed_from_u64(0)), GeneratorError::TooFewNodes { minimum: 1, got: 0 })]
#[case::er_probability(
    erdos_renyi(5, 1.5, &mut SmallRng::seed_from_u64(0)),
    GeneratorError::InvalidProbability { parameter: "edge probability", got: 1.5 },
)]
#[case::ba_zero_edges(barabasi_albert(5, 0, &mut SmallRng::seed_from_u64(0)), GeneratorError::InvalidAttachment { edges: 0, nodes: 5 })]
#[case::ba_too_many_edges(barabasi_albert(5, 5, &mut SmallRng::seed_from_u64(0)), GeneratorError::InvalidAttachment { edges: 5, nodes: 5 })]
#[case::ws_neighbourhood(
    watts_strogatz(6, 6, 0.1, &mut SmallRng::seed_from_u64(0)),
    GeneratorError::InvalidNeighbourhood { neighbours: 6, nodes: 6 },
)]
#[case::ws_probability(
    watts_strogatz(6, 2, -0.1, &mut SmallRng::seed_from_u64(0)),
    GeneratorError::InvalidProbability { parameter: "rewiring probability", got: -0.1 },
)]
fn invalid_parameters_are_rejected(
    #[case] outcome: Result<AdjacencyList, GeneratorError>,
    #[case] expected: GeneratorError,
) {
    assert_eq!(outcome.expect_err("parameters are invalid"), expected);
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn barabasi_albert_edge_count_is_exact(
        seed in any::<u64>(),
        nodes in 2_usize..80,
        edges in 1_usize..6,
    ) {
        prop_assume!(edges < nodes);
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = barabasi_albert(nodes, edges, &mut rng).expect("1 <= m < n");
        prop_assert_eq!(graph.edge_count(), edges + (nodes - edges - 1) * edges);
        prop_assert!(graph.nodes().all(|node| graph.degree(&node) >= 1));
        assert_well_formed(&graph);
    }

    #[test]
    fn watts_strogatz_preserves_lattice_edge_count(
        seed in any::<u64>(),
        nodes in 3_usize..60,
        neighbours in 0_usize..8,
        rewire in 0.0_f64..=1.0,
    ) {
        prop_assume!(neighbours < nodes);
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = watts_strogatz(nodes, neighbours, rewire, &mut rng).expect("k < n");
        prop_assert_eq!(graph.edge_count(), nodes * (neighbours / 2));
        assert_well_formed(&graph);
    }

    #[test]
    fn erdos_renyi_is_well_formed(
        seed in any::<u64>(),
        nodes in 1_usize..60,
        probability in 0.0_f64..=1.0,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = erdos_renyi(nodes, probability, &mut rng).expect("parameters are valid");
        prop_assert_eq!(graph.node_count(), nodes);
        prop_assert!(graph.edge_count() <= nodes * (nodes - 1) / 2);
        assert_well_formed(&graph);
    }
}
