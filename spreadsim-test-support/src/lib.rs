//! Shared test utilities used across spreadsim crates.

pub mod graphs;
pub mod proptest;
pub mod tracing;
