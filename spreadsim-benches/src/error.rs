//! Benchmark setup error type.
//!
//! Lets setup helpers propagate generator and simulation failures with `?`
//! instead of calling `.expect()` inside library code.

use spreadsim_core::{GeneratorError, SpreadError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A topology generator rejected the benchmark parameters.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
    /// Seed selection or simulation configuration failed.
    #[error("simulation setup failed: {0}")]
    Spread(#[from] SpreadError),
}
