//! JSON shape of the serialisable result types.
#![cfg(feature = "serde")]

use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use serde_json::json;
use spreadsim_core::{Experiment, SeedStrategy, SimulationBuilder, Topology, simulate_si};
use spreadsim_test_support::graphs::{path, star};

#[rstest]
fn simulation_result_serialises_metrics() {
    let mut rng = SmallRng::seed_from_u64(3);
    let result = simulate_si(&path(3), &0, 1.0, 5, &mut rng).expect("run must succeed");
    let value = serde_json::to_value(&result).expect("result serialises");

    assert_eq!(value["start_node"], json!(0));
    assert_eq!(value["node_count"], json!(3));
    assert_eq!(value["history"], json!([1, 2, 3, 3]));
    assert_eq!(value["stall_round"], json!(3));
    assert_eq!(value["half_saturation_round"], json!(1));
    let mut infected: Vec<u64> = value["infected"]
        .as_array()
        .expect("infected is an array")
        .iter()
        .filter_map(serde_json::Value::as_u64)
        .collect();
    infected.sort_unstable();
    assert_eq!(infected, [0, 1, 2]);
}

#[rstest]
fn unreached_half_saturation_serialises_as_null() {
    let mut rng = SmallRng::seed_from_u64(3);
    let result = simulate_si(&path(6), &0, 0.0, 5, &mut rng).expect("run must succeed");
    let value = serde_json::to_value(&result).expect("result serialises");
    assert_eq!(value["half_saturation_round"], serde_json::Value::Null);
}

#[rstest]
#[case(SeedStrategy::Random, "random")]
#[case(SeedStrategy::Hub, "hub")]
fn strategies_serialise_as_tags(#[case] strategy: SeedStrategy, #[case] tag: &str) {
    assert_eq!(serde_json::to_value(strategy).expect("serialises"), json!(tag));
}

#[rstest]
fn topologies_serialise_as_variant_names() {
    let value = serde_json::to_value(Topology::WattsStrogatz).expect("serialises");
    assert_eq!(value, json!("WattsStrogatz"));
}

#[rstest]
fn experiment_results_serialise_as_a_list() {
    let simulation = SimulationBuilder::new()
        .with_infection_probability(1.0)
        .build()
        .expect("configuration is valid");
    let results = Experiment::new(simulation)
        .with_graph("star", star(2))
        .with_strategy(SeedStrategy::Hub)
        .run(&mut SmallRng::seed_from_u64(0))
        .expect("experiment must succeed");
    let value = serde_json::to_value(&results).expect("results serialise");
    let records = value.as_array().expect("results are a list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["graph"], json!("star"));
    assert_eq!(records[0]["strategy"], json!("hub"));
    assert_eq!(records[0]["result"]["history"], json!([1, 3, 3]));
}
