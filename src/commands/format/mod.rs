//! Shared output formatting helpers for commands

mod payload;

pub use payload::Payload;

use serde_json::{json, Value};

use edgegraph_core::error::Result;

/// Pretty-print a JSON document to stdout
pub fn print_json(output: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

/// Human text for a shortest-distance result
pub fn describe_distance(distance: Option<f64>) -> String {
    match distance {
        None => "negative cycle".to_string(),
        Some(d) if d.is_infinite() => "unreachable".to_string(),
        Some(d) => d.to_string(),
    }
}

/// JSON number for finite distances, `null` otherwise
pub fn distance_json(distance: Option<f64>) -> Value {
    match distance {
        Some(d) if d.is_finite() => json!(d),
        _ => Value::Null,
    }
}
