//! In-memory weighted multigraph
//!
//! Provides the [`Graph`] model and its operations:
//! - construction and mutation of nodes and connections
//! - BFS/DFS traversal with a visitor (`traversal`)
//! - single-pair and all-pairs shortest distances (`distance`, `algos`)
//! - debug rendering (`render`)

pub mod algos;
pub mod cache;
mod distance;
mod render;
pub mod storage;
mod traversal;
pub mod types;

pub use cache::{CacheStats, DistanceCache};
pub use storage::{Adjacency, Storage};
pub use types::{
    ConnectionDescriptor, EdgeStatistics, GraphDescriptor, TraversalOrder, Visit,
};

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::{GraphOptions, StorageKind};
use crate::edge::Edge;
use crate::ensure_node;
use crate::error::{GraphError, Result};
use crate::node::{Node, NodeDescriptor};

/// Whether the graph holds negative weights, and who decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NegativeEdges {
    /// Declared through options; never re-evaluated
    Declared(bool),
    /// Found by scanning the adjacency; refreshed after every mutation
    Detected(bool),
}

impl NegativeEdges {
    fn get(self) -> bool {
        match self {
            NegativeEdges::Declared(flag) | NegativeEdges::Detected(flag) => flag,
        }
    }
}

/// Directed graph of named nodes with aggregated multi-edges.
///
/// Nodes keep insertion order. Connections between an ordered pair are
/// aggregated into one [`EdgeStatistics`]. Any change to nodes or
/// connections invalidates the all-pairs distance cache.
#[derive(Debug)]
pub struct Graph<V> {
    nodes: IndexMap<String, Node<V>>,
    storage: Storage,
    negative_edges: NegativeEdges,
    cache: DistanceCache,
}

impl<V> Graph<V> {
    /// Build a graph from node and connection descriptors.
    ///
    /// Fails with `DuplicateNode`/`EmptyNodeName` for bad nodes and with
    /// `UnknownNode`/`NoEdgesProvided` for bad connections.
    pub fn new(
        nodes: impl IntoIterator<Item = NodeDescriptor<V>>,
        connections: impl IntoIterator<Item = ConnectionDescriptor>,
        options: GraphOptions,
    ) -> Result<Self> {
        let mut graph = Graph {
            nodes: IndexMap::new(),
            storage: Storage::new(options.storage),
            negative_edges: NegativeEdges::Detected(false),
            cache: DistanceCache::default(),
        };

        graph.insert_nodes(nodes.into_iter().collect())?;
        graph.insert_connections(connections.into_iter().collect())?;

        graph.negative_edges = match options.has_negative_edges {
            Some(flag) => NegativeEdges::Declared(flag),
            None => NegativeEdges::Detected(graph.storage.has_negative_edges()),
        };

        debug!(
            nodes = graph.nodes.len(),
            storage = ?graph.storage.kind(),
            has_negative_edges = graph.has_negative_edges(),
            "graph_built"
        );

        Ok(graph)
    }

    /// Build a graph from a deserialized descriptor
    pub fn from_descriptor(descriptor: GraphDescriptor<V>, options: GraphOptions) -> Result<Self> {
        let connections = descriptor.connection_descriptors();
        Self::new(descriptor.nodes, connections, options)
    }

    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = NodeDescriptor<V>>) -> Result<()> {
        self.insert_nodes(nodes.into_iter().collect())?;
        self.invalidate_distances();
        Ok(())
    }

    /// Remove nodes together with every connection touching them
    pub fn remove_nodes<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();

        let mut removed = HashSet::new();
        for name in &names {
            let name = name.as_ref();
            if !self.contains_node(name) || !removed.insert(name) {
                return Err(GraphError::unknown_node(name));
            }
        }

        for name in &names {
            let name = name.as_ref();
            self.nodes.shift_remove(name);
            self.storage.remove_node(name);
        }

        self.refresh_negative_edges();
        self.invalidate_distances();
        Ok(())
    }

    pub fn add_connections(
        &mut self,
        connections: impl IntoIterator<Item = ConnectionDescriptor>,
    ) -> Result<()> {
        self.insert_connections(connections.into_iter().collect())?;
        self.refresh_negative_edges();
        self.invalidate_distances();
        Ok(())
    }

    /// Delete `from -> to` and `to -> from`.
    ///
    /// Both directions go regardless of how the edges were inserted, so a
    /// directed-only pair also loses any independent reverse connection.
    pub fn remove_connections(&mut self, from: &str, to: &str) -> Result<()> {
        ensure_node!(self, from);
        ensure_node!(self, to);

        self.storage.remove_pair(from, to);
        self.storage.remove_pair(to, from);

        self.refresh_negative_edges();
        self.invalidate_distances();
        Ok(())
    }

    /// Deep copy sharing nothing with `self`
    pub fn copy(&self) -> Self
    where
        V: Clone,
    {
        Graph {
            nodes: self.nodes.clone(),
            storage: self.storage.clone(),
            negative_edges: self.negative_edges,
            cache: self.cache.clone(),
        }
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn node(&self, name: &str) -> Option<&Node<V>> {
        self.nodes.get(name)
    }

    pub fn node_mut(&mut self, name: &str) -> Option<&mut Node<V>> {
        self.nodes.get_mut(name)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node names in insertion order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<V>> {
        self.nodes.values()
    }

    pub fn statistics(&self, from: &str, to: &str) -> Option<&EdgeStatistics> {
        self.storage.statistics(from, to)
    }

    /// Outgoing connections of `from` in adjacency order
    pub fn neighbors(&self, from: &str) -> Result<Vec<(&str, &EdgeStatistics)>> {
        ensure_node!(self, from);
        Ok(self.storage.neighbors(from))
    }

    pub fn has_negative_edges(&self) -> bool {
        self.negative_edges.get()
    }

    pub fn storage_kind(&self) -> StorageKind {
        self.storage.kind()
    }

    pub fn is_distance_cache_valid(&self) -> bool {
        self.cache.is_valid()
    }

    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }

    /// Validate a batch of new nodes, then insert them with empty rows
    fn insert_nodes(&mut self, nodes: Vec<NodeDescriptor<V>>) -> Result<()> {
        let mut seen = HashSet::new();
        for desc in &nodes {
            if desc.name.is_empty() {
                return Err(GraphError::EmptyNodeName);
            }
            if self.contains_node(&desc.name) || !seen.insert(desc.name.as_str()) {
                return Err(GraphError::duplicate_node(&desc.name));
            }
        }

        for desc in nodes {
            let node = desc.into_node()?;
            self.storage.insert_node(node.name());
            self.nodes.insert(node.name().to_string(), node);
        }
        Ok(())
    }

    /// Validate a batch of connections, then fold each one in
    fn insert_connections(&mut self, connections: Vec<ConnectionDescriptor>) -> Result<()> {
        for conn in &connections {
            ensure_node!(self, &conn.from);
            ensure_node!(self, &conn.to);
            if conn.edges.is_empty() {
                return Err(GraphError::no_edges(&conn.from, &conn.to));
            }
        }

        for conn in &connections {
            self.fold_edges(&conn.from, &conn.to, &conn.edges);
        }
        Ok(())
    }

    /// Every edge goes `from -> to`; bidirectional ones also go `to -> from`
    fn fold_edges(&mut self, from: &str, to: &str, edges: &[Edge]) {
        self.storage.merge_edges(from, to, edges);

        let reverse: Vec<Edge> = edges
            .iter()
            .filter(|edge| edge.is_bidirectional())
            .copied()
            .collect();
        if !reverse.is_empty() {
            self.storage.merge_edges(to, from, &reverse);
        }
    }

    fn refresh_negative_edges(&mut self) {
        if let NegativeEdges::Detected(previous) = self.negative_edges {
            let current = self.storage.has_negative_edges();
            if current != previous {
                debug!(has_negative_edges = current, "negative_edges_changed");
            }
            self.negative_edges = NegativeEdges::Detected(current);
        }
    }

    fn invalidate_distances(&mut self) {
        if self.cache.is_valid() {
            debug!("distance_cache_invalidated");
        }
        self.cache.invalidate();
    }
}

impl<V: Clone> Clone for Graph<V> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

#[cfg(test)]
mod tests;
