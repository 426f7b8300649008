//! Spreadsim core library.
//!
//! Discrete-round Susceptible-Infected diffusion over undirected graphs,
//! with seed selection strategies, random topology generators, and an
//! experiment runner comparing them.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod diffusion;
mod error;
mod experiment;
mod graph;
mod result;
mod seed;
mod topology;

#[cfg(test)]
mod test_utils;

pub use crate::{
    config::{
        DEFAULT_INFECTION_PROBABILITY, DEFAULT_MAX_ROUNDS, SimulationBuilder, SimulationConfig,
    },
    diffusion::{SiSimulation, simulate_si},
    error::{
        GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode, Result, SpreadError,
        SpreadErrorCode,
    },
    experiment::{Experiment, ExperimentRecord, ExperimentResults},
    graph::{AdjacencyList, AdjacencyMap, AdjacencyMatrix, Graph},
    result::SimulationResult,
    seed::{SeedStrategy, select_seed},
    topology::{Topology, TopologyParams, barabasi_albert, erdos_renyi, watts_strogatz},
};
