//! Benchmark support crate for spreadsim.
//!
//! Provides parameter types and graph setup helpers shared by the Criterion
//! benchmarks for topology generation and SI diffusion.

pub mod error;
pub mod params;
pub mod setup;
