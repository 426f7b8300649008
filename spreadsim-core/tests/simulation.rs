//! End-to-end diffusion runs over the shared graph fixtures.

use std::collections::HashSet;

use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};
use spreadsim_core::{
    AdjacencyMatrix, Graph, SeedStrategy, SiSimulation, SimulationBuilder, SpreadError,
    erdos_renyi, select_seed, simulate_si,
};
use spreadsim_test_support::{
    graphs::{cycle, isolated, path, star, two_components},
    tracing::RecordingLayer,
};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn certain() -> SiSimulation {
    SimulationBuilder::new()
        .with_infection_probability(1.0)
        .with_max_rounds(5)
        .build()
        .expect("configuration is valid")
}

#[fixture]
fn rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

#[rstest]
fn builder_defaults() {
    let builder = SimulationBuilder::new();
    assert!((builder.infection_probability() - 0.8).abs() < f64::EPSILON);
    assert_eq!(builder.max_rounds(), 12);
    let simulation = builder.build().expect("defaults are valid");
    assert_eq!(simulation.config().max_rounds().get(), 12);
}

#[rstest]
fn cycle_saturates_in_two_rounds(certain: SiSimulation, mut rng: SmallRng) {
    let result = certain.run(&cycle(4), &0, &mut rng).expect("run must succeed");
    assert_eq!(result.history(), [1, 3, 4]);
    assert_eq!(result.total_reach(), 4);
    assert_eq!(result.stall_round(), 3);
    assert_eq!(result.half_saturation_round(), Some(1));
}

#[rstest]
fn isolated_node_stalls_immediately(mut rng: SmallRng) {
    let result = simulate_si(&isolated(1), &0, 0.8, 3, &mut rng).expect("run must succeed");
    assert_eq!(result.history(), [1, 1]);
    assert_eq!(result.stall_round(), 1);
    assert_eq!(result.total_reach(), 1);
    assert_eq!(result.half_saturation_round(), Some(0));
}

#[rstest]
fn other_component_is_never_reached(certain: SiSimulation, mut rng: SmallRng) {
    let result = certain
        .run(&two_components(4, 3), &0, &mut rng)
        .expect("run must succeed");
    assert_eq!(result.history(), [1, 2, 3, 4, 4]);
    assert!(result.infected().iter().all(|&node| node < 4));
    assert_eq!(result.half_saturation_round(), Some(3));
}

#[rstest]
fn hub_seed_on_star_saturates_in_one_round(certain: SiSimulation, mut rng: SmallRng) {
    let graph = star(6);
    let hub = select_seed(&graph, SeedStrategy::Hub, &mut rng).expect("non-empty graph");
    assert_eq!(hub, 0);
    let result = certain.run(&graph, &hub, &mut rng).expect("run must succeed");
    assert_eq!(result.history(), [1, 7, 7]);
}

#[rstest]
fn matrix_and_list_adapters_agree(certain: SiSimulation) {
    let edges = [(0, 1), (1, 2), (2, 3), (3, 4)];
    let matrix = AdjacencyMatrix::from_edges(5, &edges).expect("edges are in bounds");
    let list = path(5);
    assert_eq!(matrix.node_count(), list.node_count());

    let from_matrix = certain
        .run(&matrix, &2, &mut SmallRng::seed_from_u64(1))
        .expect("run must succeed");
    let from_list = certain
        .run(&list, &2, &mut SmallRng::seed_from_u64(1))
        .expect("run must succeed");
    assert_eq!(from_matrix.history(), from_list.history());
    assert_eq!(from_matrix.history(), [1, 3, 5, 5]);
}

#[rstest]
fn seeded_runs_repeat_on_random_graphs() {
    // Many frontier nodes share neighbours here, so exposure order matters.
    let graph =
        erdos_renyi(50, 0.08, &mut SmallRng::seed_from_u64(1)).expect("parameters are valid");
    let histories: HashSet<Vec<usize>> = (0..20)
        .map(|_| {
            simulate_si(&graph, &0, 0.5, 12, &mut SmallRng::seed_from_u64(42))
                .expect("run must succeed")
                .history()
                .to_vec()
        })
        .collect();
    assert_eq!(histories.len(), 1, "histories diverged: {histories:?}");
}

#[rstest]
fn run_emits_span_and_round_events(certain: SiSimulation, mut rng: SmallRng) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || certain.run(&cycle(4), &0, &mut rng))
        .expect("run must succeed");

    let span = layer
        .span_named("core.simulate")
        .expect("core.simulate span must exist");
    assert_eq!(span.field("nodes"), Some("4"));
    assert_eq!(span.field("start"), Some("0"));
    assert_eq!(span.field("p"), Some("1"));
    assert_eq!(span.field("max_rounds"), Some("5"));

    let rounds = layer.events_with_message("round completed");
    assert_eq!(rounds.len(), 2);
    assert!(rounds.iter().all(|event| event.level == Level::DEBUG));
    assert_eq!(rounds[1].field("infected"), Some("4"));

    let stalled = layer.events_with_message("diffusion stalled");
    assert_eq!(stalled.len(), 1);
    assert_eq!(stalled[0].level, Level::INFO);
    assert_eq!(stalled[0].field("round"), Some("3"));
}

#[rstest]
fn round_cap_is_logged(mut rng: SmallRng) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let result = tracing::subscriber::with_default(subscriber, || {
        simulate_si(&path(6), &0, 1.0, 2, &mut rng)
    })
    .expect("run must succeed");
    assert_eq!(result.history(), [1, 2, 3]);
    assert_eq!(result.stall_round(), 2);

    let capped = layer.events_with_message("round cap reached");
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].field("rounds"), Some("2"));
    assert!(layer.events_with_message("diffusion stalled").is_empty());
}

#[rstest]
fn unknown_start_is_logged_and_rejected(certain: SiSimulation, mut rng: SmallRng) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || {
        certain.run(&path(3), &3, &mut rng)
    })
    .expect_err("start outside the graph must fail");
    assert!(matches!(err, SpreadError::UnknownStartNode { .. }));

    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.level == Level::WARN
            && event.message() == Some("start node is not a member of the graph")
    }));
    assert!(events.iter().any(|event| {
        event.level == Level::ERROR
            && event
                .field("error")
                .is_some_and(|error| error.contains("not a member"))
    }));
}

#[rstest]
fn seed_selection_is_instrumented(mut rng: SmallRng) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let seed = tracing::subscriber::with_default(subscriber, || {
        select_seed(&star(3), SeedStrategy::Hub, &mut rng)
    })
    .expect("non-empty graph");
    assert_eq!(seed, 0);

    let span = layer
        .span_named("core.select_seed")
        .expect("core.select_seed span must exist");
    assert_eq!(span.field("strategy"), Some("hub"));
    assert_eq!(span.field("nodes"), Some("4"));
    let selected = layer.events_with_message("seed selected");
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].field("degree"), Some("3"));
}
