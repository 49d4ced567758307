//! Weighted edges

use serde::Deserialize;

use crate::error::{GraphError, Result};
use crate::primitive::Primitive;

fn default_bidirectional() -> bool {
    true
}

/// A single weighted connection.
///
/// Edges are bidirectional unless built with [`Edge::directed`] or
/// deserialized with `"isBidirectional": false`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    weight: f64,
    #[serde(default = "default_bidirectional")]
    is_bidirectional: bool,
}

impl Edge {
    /// Bidirectional edge with the given weight
    pub fn new(weight: f64) -> Self {
        Self::with_direction(weight, true)
    }

    /// Edge that only connects `from -> to`
    pub fn directed(weight: f64) -> Self {
        Self::with_direction(weight, false)
    }

    pub fn with_direction(weight: f64, is_bidirectional: bool) -> Self {
        Self {
            weight,
            is_bidirectional,
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_bidirectional(&self) -> bool {
        self.is_bidirectional
    }
}

/// Edges read as their weight; they have no textual reading.
impl Primitive for Edge {
    fn to_text(&self) -> Result<String> {
        Err(GraphError::invalid_conversion("edge", "a string"))
    }

    fn to_number(&self) -> Result<f64> {
        Ok(self.weight)
    }
}

/// One edge or a list of edges, as accepted in connection descriptors
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EdgeInput {
    One(Edge),
    Many(Vec<Edge>),
}

impl EdgeInput {
    pub fn into_vec(self) -> Vec<Edge> {
        match self {
            EdgeInput::One(edge) => vec![edge],
            EdgeInput::Many(edges) => edges,
        }
    }
}

impl From<Edge> for EdgeInput {
    fn from(edge: Edge) -> Self {
        EdgeInput::One(edge)
    }
}

impl From<Vec<Edge>> for EdgeInput {
    fn from(edges: Vec<Edge>) -> Self {
        EdgeInput::Many(edges)
    }
}
