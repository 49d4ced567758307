//! `edgegraph distance` command - shortest weighted distance
//!
//! Without `--all-pairs` the graph picks Dijkstra or Bellman-Ford from its
//! negative-edge flag. With it, the Floyd-Warshall table is filled first
//! and the answer comes from there.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{describe_distance, distance_json, print_json, Payload};
use edgegraph_core::error::Result;
use edgegraph_core::graph::Graph;
use edgegraph_core::log_cache_stats;

/// Execute the distance command
pub fn execute(
    cli: &Cli,
    graph: &mut Graph<Payload>,
    from: &str,
    to: &str,
    all_pairs: bool,
) -> Result<()> {
    let algorithm = if all_pairs {
        graph.calculate_all_distances();
        "floyd-warshall"
    } else if graph.has_negative_edges() {
        "bellman-ford"
    } else {
        "dijkstra"
    };

    let distance = graph.get_min_distance(from, to)?;
    if cli.verbose {
        log_cache_stats!(graph.cache_stats(), "distance_command");
    }

    match cli.format {
        OutputFormat::Human => println!("{}", describe_distance(distance)),
        OutputFormat::Json => {
            print_json(&json!({
                "from": from,
                "to": to,
                "algorithm": algorithm,
                "distance": distance_json(distance),
                "reachable": distance.is_some_and(f64::is_finite),
                "negative_cycle": distance.is_none(),
            }))?;
        }
    }
    Ok(())
}
