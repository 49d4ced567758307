//! `edgegraph walk` command - list nodes in traversal order

use serde_json::{json, Value};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, Payload};
use edgegraph_core::error::Result;
use edgegraph_core::graph::{Graph, TraversalOrder};

/// Execute the walk command
pub fn execute(cli: &Cli, graph: &Graph<Payload>, start: &str, order: TraversalOrder) -> Result<()> {
    let visits = graph.visit_order(order, start)?;

    match cli.format {
        OutputFormat::Human => {
            for (name, step) in &visits {
                println!("{}\t{}", step, name);
            }
        }
        OutputFormat::Json => {
            let visits: Vec<Value> = visits
                .iter()
                .map(|(name, step)| json!({ "name": name, "step": step }))
                .collect();
            let order = match order {
                TraversalOrder::BreadthFirst => "bfs",
                TraversalOrder::DepthFirst => "dfs",
            };
            print_json(&json!({
                "start": start,
                "order": order,
                "visits": visits,
            }))?;
        }
    }
    Ok(())
}
