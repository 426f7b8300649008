//! Command-line interface orchestration for spreadsim.
//!
//! The `run` command generates the requested topologies, compares the
//! requested seeding strategies on each of them, and renders one summary
//! block per combination.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, OutputFormat, RunCommand, TopologyArg,
    render_summary, run_cli,
};
