use indexmap::IndexMap;
use serde::Deserialize;

use crate::edge::{Edge, EdgeInput};
use crate::node::NodeDescriptor;

/// Aggregate over every edge inserted for one ordered pair of nodes.
///
/// `all` is never empty; `min` and `max` are the lightest and heaviest
/// members of `all`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStatistics {
    min: Edge,
    max: Edge,
    all: Vec<Edge>,
}

impl EdgeStatistics {
    /// Build statistics from a batch; `None` for an empty batch
    pub fn from_edges(edges: &[Edge]) -> Option<Self> {
        let (first, rest) = edges.split_first()?;
        let mut stats = EdgeStatistics {
            min: *first,
            max: *first,
            all: vec![*first],
        };
        stats.extend(rest);
        Some(stats)
    }

    /// Fold more edges in, keeping the first-seen edge on weight ties
    pub fn extend(&mut self, edges: &[Edge]) {
        for edge in edges {
            if edge.weight() < self.min.weight() {
                self.min = *edge;
            }
            if edge.weight() > self.max.weight() {
                self.max = *edge;
            }
            self.all.push(*edge);
        }
    }

    pub fn min(&self) -> &Edge {
        &self.min
    }

    pub fn max(&self) -> &Edge {
        &self.max
    }

    pub fn all(&self) -> &[Edge] {
        &self.all
    }

    pub fn count(&self) -> usize {
        self.all.len()
    }

    /// Weight used by the distance algorithms
    pub fn min_weight(&self) -> f64 {
        self.min.weight()
    }

    pub fn has_negative(&self) -> bool {
        self.min.weight() < 0.0
    }
}

/// Descriptor for inserting edges between two existing nodes
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionDescriptor {
    pub from: String,
    pub to: String,
    pub edges: Vec<Edge>,
}

impl ConnectionDescriptor {
    pub fn new(from: impl Into<String>, to: impl Into<String>, edge: Edge) -> Self {
        Self::many(from, to, vec![edge])
    }

    pub fn many(from: impl Into<String>, to: impl Into<String>, edges: Vec<Edge>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edges,
        }
    }
}

/// Deserializable construction input:
///
/// ```json
/// {
///   "nodes": [{ "name": "A", "value": 1 }, { "name": "B" }],
///   "connections": { "A": { "B": [{ "weight": 7, "isBidirectional": false }] } }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de> + Default"))]
pub struct GraphDescriptor<V> {
    pub nodes: Vec<NodeDescriptor<V>>,
    #[serde(default)]
    pub connections: IndexMap<String, IndexMap<String, EdgeInput>>,
}

impl<V> GraphDescriptor<V> {
    /// Flatten the nested connection map into descriptors, preserving order
    pub fn connection_descriptors(&self) -> Vec<ConnectionDescriptor> {
        self.connections
            .iter()
            .flat_map(|(from, targets)| {
                targets.iter().map(move |(to, input)| {
                    ConnectionDescriptor::many(from.clone(), to.clone(), input.clone().into_vec())
                })
            })
            .collect()
    }
}

/// What a traversal visitor asks for after seeing a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    #[default]
    Continue,
    /// End the traversal without expanding the current node
    Stop,
}

/// Visitors that return nothing keep the traversal going
impl From<()> for Visit {
    fn from(_: ()) -> Self {
        Visit::Continue
    }
}

impl From<bool> for Visit {
    /// `true` stops the traversal
    fn from(stop: bool) -> Self {
        if stop {
            Visit::Stop
        } else {
            Visit::Continue
        }
    }
}

/// Traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    #[default]
    BreadthFirst,
    DepthFirst,
}

impl std::str::FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(TraversalOrder::BreadthFirst),
            "dfs" | "depth-first" => Ok(TraversalOrder::DepthFirst),
            other => Err(format!("unknown order '{}' (expected: bfs, dfs)", other)),
        }
    }
}
