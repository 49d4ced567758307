//! Command trait and context for dispatching commands

use std::fs;
use std::time::Instant;

use super::trace_command;
use crate::cli::Cli;
use crate::commands::format::Payload;
use edgegraph_core::bail_usage;
use edgegraph_core::config::GraphOptions;
use edgegraph_core::error::Result;
use edgegraph_core::graph::{Graph, GraphDescriptor};

/// Read options from `--config` (if any), then apply flag overrides
pub fn resolve_options(cli: &Cli) -> Result<GraphOptions> {
    let mut options = match &cli.config {
        Some(path) => GraphOptions::load(path)?,
        None => GraphOptions::default(),
    };
    if let Some(storage) = cli.storage {
        options = options.with_storage(storage);
    }
    Ok(options)
}

/// Load the graph named by `--graph`
pub fn load_graph(cli: &Cli) -> Result<Graph<Payload>> {
    let Some(path) = &cli.graph else {
        bail_usage!("no graph file given (use --graph or EDGEGRAPH_GRAPH)")
    };

    let options = resolve_options(cli)?;
    let content = fs::read_to_string(path)?;
    let descriptor: GraphDescriptor<Payload> = serde_json::from_str(&content)?;
    Graph::from_descriptor(descriptor, options)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn load_graph(&self) -> Result<Graph<Payload>> {
        let graph = load_graph(self.cli)?;
        trace_command!(self.cli, self.start, "load_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("edgegraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Weighted multigraph queries from the command line.");
        println!();
        println!("Run `edgegraph --help` for usage information.");
        Ok(())
    }
}
