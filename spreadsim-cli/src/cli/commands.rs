//! Command implementations and argument parsing for the spreadsim CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::SmallRng};
use serde::Serialize;
use spreadsim_core::{
    DEFAULT_INFECTION_PROBABILITY, DEFAULT_MAX_ROUNDS, Experiment, ExperimentResults,
    SeedStrategy, SimulationBuilder, SpreadError, SpreadErrorCode, Topology, TopologyParams,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spreadsim",
    about = "Compare SI diffusion across network topologies and seeding strategies."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate graphs and compare seeding strategies on each of them.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of nodes in every generated graph.
    #[arg(long, default_value_t = TopologyParams::default().nodes)]
    pub nodes: usize,

    /// Edge probability for Erdős-Rényi graphs.
    #[arg(long, default_value_t = TopologyParams::default().er_probability)]
    pub er_probability: f64,

    /// Edges attached per new node for Barabási-Albert graphs.
    #[arg(long, default_value_t = TopologyParams::default().ba_edges)]
    pub ba_edges: usize,

    /// Ring neighbours per node for Watts-Strogatz graphs.
    #[arg(long, default_value_t = TopologyParams::default().ws_neighbours)]
    pub ws_neighbours: usize,

    /// Rewiring probability for Watts-Strogatz graphs.
    #[arg(long, default_value_t = TopologyParams::default().ws_rewire)]
    pub ws_rewire: f64,

    /// Per-exposure infection probability.
    #[arg(long, default_value_t = DEFAULT_INFECTION_PROBABILITY)]
    pub infection_probability: f64,

    /// Maximum number of diffusion rounds.
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: usize,

    /// Seed for graph generation and diffusion; drawn from entropy if absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seeding strategy to compare (repeatable; defaults to `random` and `hub`).
    #[arg(long = "strategy", value_parser = parse_strategy)]
    pub strategies: Vec<SeedStrategy>,

    /// Topology to generate (repeatable; defaults to all three).
    #[arg(long = "topology", value_enum)]
    pub topologies: Vec<TopologyArg>,

    /// Summary output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl RunCommand {
    fn selected_strategies(&self) -> Vec<SeedStrategy> {
        if self.strategies.is_empty() {
            SeedStrategy::ALL.to_vec()
        } else {
            self.strategies.clone()
        }
    }

    fn selected_topologies(&self) -> Vec<Topology> {
        if self.topologies.is_empty() {
            Topology::ALL.to_vec()
        } else {
            self.topologies.iter().map(|&arg| arg.into()).collect()
        }
    }

    const fn topology_params(&self) -> TopologyParams {
        TopologyParams {
            nodes: self.nodes,
            er_probability: self.er_probability,
            ba_edges: self.ba_edges,
            ws_neighbours: self.ws_neighbours,
            ws_rewire: self.ws_rewire,
        }
    }
}

fn parse_strategy(raw: &str) -> Result<SeedStrategy, SpreadError> {
    raw.parse()
}

/// Topologies selectable with `--topology`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TopologyArg {
    /// Uniform random graph.
    #[value(alias = "er")]
    ErdosRenyi,
    /// Preferential attachment graph.
    #[value(alias = "ba")]
    BarabasiAlbert,
    /// Rewired ring lattice.
    #[value(alias = "ws")]
    WattsStrogatz,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::ErdosRenyi => Self::ErdosRenyi,
            TopologyArg::BarabasiAlbert => Self::BarabasiAlbert,
            TopologyArg::WattsStrogatz => Self::WattsStrogatz,
        }
    }
}

/// Output formats supported by [`render_summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable block per combination.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Validation, generation, or simulation failed in the core library.
    #[error(transparent)]
    Core(#[from] SpreadError),
}

impl CliError {
    /// Stable code of the underlying core error.
    #[must_use]
    pub const fn code(&self) -> SpreadErrorCode {
        match self {
            Self::Core(error) => error.code(),
        }
    }

    /// Stable code of the graph or generator error wrapped by the core
    /// error, if any.
    #[must_use]
    pub fn detail_code(&self) -> Option<&'static str> {
        match self {
            Self::Core(error) => error
                .graph_code()
                .map(|code| code.as_str())
                .or_else(|| error.generator_code().map(|code| code.as_str())),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Seed the run was reproduced from.
    pub seed: u64,
    /// Format requested for rendering.
    pub format: OutputFormat,
    /// One record per `(topology, strategy)` combination, in run order.
    pub results: ExperimentResults<usize>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when a parameter is invalid or a run fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use spreadsim_cli::cli::{Cli, run_cli};
///
/// let cli = Cli::try_parse_from(["spreadsim", "run", "--seed", "7", "--nodes", "20"])?;
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.seed, 7);
/// assert_eq!(summary.results.len(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(&run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(nodes = command.nodes, seed = field::Empty, topologies = field::Empty),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    let simulation = SimulationBuilder::new()
        .with_infection_probability(command.infection_probability)
        .with_max_rounds(command.max_rounds)
        .build()?;

    let seed = command.seed.unwrap_or_else(rand::random);
    let span = Span::current();
    span.record("seed", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let params = command.topology_params();
    let topologies = command.selected_topologies();
    span.record("topologies", topologies.len());
    let mut experiment = Experiment::new(simulation).with_strategies(command.selected_strategies());
    for topology in topologies {
        let graph = params
            .generate(topology, &mut rng)
            .map_err(SpreadError::from)?;
        experiment = experiment.with_graph(topology.to_string(), graph);
    }
    let results = experiment.run(&mut rng)?;

    info!(seed, runs = results.len(), "command completed");
    Ok(ExecutionSummary {
        seed,
        format: command.format,
        results,
    })
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    seed: u64,
    runs: Vec<JsonRun<'a>>,
}

#[derive(Serialize)]
struct JsonRun<'a> {
    topology: &'a str,
    strategy: SeedStrategy,
    start_node: usize,
    history: &'a [usize],
    total_reach: usize,
    node_count: usize,
    stall_round: usize,
    half_saturation_round: Option<usize>,
}

/// Renders `summary` to `writer` in the format it requested.
///
/// Text output holds one block per combination, separated by blank lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use spreadsim_cli::cli::{Cli, render_summary, run_cli};
///
/// let cli = Cli::try_parse_from([
///     "spreadsim", "run", "--seed", "1", "--topology", "ba", "--strategy", "hub",
/// ])?;
/// let summary = run_cli(cli)?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("=== Barabási-Albert | start: hub ===\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => render_text(summary, writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &json_summary(summary))?;
            writeln!(writer)
        }
    }
}

fn render_text(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for (index, record) in summary.results.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        let result = record.result();
        writeln!(
            writer,
            "=== {} | start: {} ===",
            record.graph(),
            record.strategy()
        )?;
        writeln!(writer, "start node: {}", result.start_node())?;
        writeln!(writer, "infected per round: {:?}", result.history())?;
        writeln!(
            writer,
            "total reach: {} of {}",
            result.total_reach(),
            result.node_count()
        )?;
        writeln!(writer, "stalled at round: {}", result.stall_round())?;
        match result.half_saturation_round() {
            Some(round) => writeln!(writer, "half-saturation round: {round}")?,
            None => writeln!(writer, "half-saturation round: not reached")?,
        }
    }
    Ok(())
}

fn json_summary(summary: &ExecutionSummary) -> JsonSummary<'_> {
    let runs = summary
        .results
        .iter()
        .map(|record| {
            let result = record.result();
            JsonRun {
                topology: record.graph(),
                strategy: record.strategy(),
                start_node: *result.start_node(),
                history: result.history(),
                total_reach: result.total_reach(),
                node_count: result.node_count(),
                stall_round: result.stall_round(),
                half_saturation_round: result.half_saturation_round(),
            }
        })
        .collect();
    JsonSummary {
        seed: summary.seed,
        runs,
    }
}
