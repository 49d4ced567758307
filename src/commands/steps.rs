//! `edgegraph steps` command - fewest hops between two nodes

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, Payload};
use edgegraph_core::error::Result;
use edgegraph_core::graph::Graph;

/// Execute the steps command
pub fn execute(cli: &Cli, graph: &Graph<Payload>, from: &str, to: &str) -> Result<()> {
    let steps = graph.get_min_steps(from, to)?;

    match cli.format {
        OutputFormat::Human => match steps {
            Some(steps) => println!("{}", steps),
            None => println!("unreachable"),
        },
        OutputFormat::Json => {
            print_json(&json!({
                "from": from,
                "to": to,
                "steps": steps,
            }))?;
        }
    }
    Ok(())
}
