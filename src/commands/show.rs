//! `edgegraph show` command - print the whole graph

use serde_json::{json, Value};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, Payload};
use edgegraph_core::error::Result;
use edgegraph_core::graph::Graph;

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph<Payload>) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            print!("{}", graph.render_to_string());
        }
        OutputFormat::Json => {
            let nodes = graph
                .nodes()
                .map(|node| -> Result<Value> {
                    let connections: Vec<Value> = graph
                        .neighbors(node.name())?
                        .into_iter()
                        .map(|(to, stats)| {
                            json!({
                                "to": to,
                                "min": stats.min().weight(),
                                "max": stats.max().weight(),
                                "count": stats.count(),
                            })
                        })
                        .collect();

                    Ok(json!({
                        "name": node.name(),
                        "value": node.value(),
                        "connections": connections,
                    }))
                })
                .collect::<Result<Vec<Value>>>()?;

            print_json(&json!({
                "storage": graph.storage_kind(),
                "has_negative_edges": graph.has_negative_edges(),
                "nodes": nodes,
            }))?;
        }
    }
    Ok(())
}
