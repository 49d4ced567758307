//! CLI argument parsing for edgegraph
//!
//! Supports global flags: --graph, --config, --format, --quiet, --verbose

pub mod output;
pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use edgegraph_core::config::StorageKind;
use edgegraph_core::graph::TraversalOrder;
pub use output::OutputFormat;
use parse::{parse_storage_kind, parse_traversal_order};

/// Edgegraph - weighted multigraph queries from the command line
#[derive(Parser, Debug)]
#[command(name = "edgegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph descriptor file (JSON)
    #[arg(long, short, global = true, env = "EDGEGRAPH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Graph options file (TOML)
    #[arg(long, short, global = true, env = "EDGEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Adjacency storage, overriding the options file (list, matrix)
    #[arg(long, global = true, value_parser = parse_storage_kind)]
    pub storage: Option<StorageKind>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every node with its outgoing connections
    Show,

    /// Traverse the graph from a start node
    Walk(WalkArgs),

    /// Fewest hops between two nodes
    Steps(PairArgs),

    /// Shortest weighted distance between two nodes
    Distance(DistanceArgs),
}

#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Node to start from
    pub start: String,

    /// Traversal order (bfs, dfs)
    #[arg(long, short, default_value = "bfs", value_parser = parse_traversal_order)]
    pub order: TraversalOrder,
}

#[derive(Args, Debug)]
pub struct PairArgs {
    /// Source node
    pub from: String,

    /// Target node
    pub to: String,
}

#[derive(Args, Debug)]
pub struct DistanceArgs {
    #[command(flatten)]
    pub pair: PairArgs,

    /// Answer from the all-pairs table (Floyd-Warshall)
    #[arg(long)]
    pub all_pairs: bool,
}
