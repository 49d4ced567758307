//! Node payloads as read from a graph file

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arbitrary JSON node value.
///
/// Displays strings without quotes; everything else prints as compact JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Payload(pub Value);

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}
