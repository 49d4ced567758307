//! Adjacency storage flavors
//!
//! Both flavors implement [`Adjacency`]; the graph holds a [`Storage`] chosen
//! from [`StorageKind`] at construction and never inspects which one it got.

mod list;
mod matrix;

pub use list::ListAdjacency;
pub use matrix::MatrixAdjacency;

use crate::config::StorageKind;
use crate::edge::Edge;
use crate::graph::types::EdgeStatistics;

/// Directed adjacency keyed by node name.
///
/// Callers guarantee that every name passed in has been registered with
/// `insert_node` and not yet removed.
pub trait Adjacency {
    /// Register a node with no connections
    fn insert_node(&mut self, name: &str);

    /// Drop a node's row and every entry pointing at it
    fn remove_node(&mut self, name: &str);

    /// Fold a non-empty batch of edges into `from -> to`
    fn merge_edges(&mut self, from: &str, to: &str, edges: &[Edge]);

    /// Delete `from -> to`, if present
    fn remove_pair(&mut self, from: &str, to: &str);

    fn statistics(&self, from: &str, to: &str) -> Option<&EdgeStatistics>;

    /// Outgoing pairs of `from`, in the order each pair was first filled
    fn neighbors(&self, from: &str) -> Vec<(&str, &EdgeStatistics)>;

    /// Every pair as `(from, to, statistics)`
    fn pairs(&self) -> Vec<(&str, &str, &EdgeStatistics)>;
}

#[derive(Debug, Clone)]
pub enum Storage {
    List(ListAdjacency),
    Matrix(MatrixAdjacency),
}

impl Storage {
    pub fn new(kind: StorageKind) -> Self {
        match kind {
            StorageKind::List => Storage::List(ListAdjacency::default()),
            StorageKind::Matrix => Storage::Matrix(MatrixAdjacency::default()),
        }
    }

    pub fn kind(&self) -> StorageKind {
        match self {
            Storage::List(_) => StorageKind::List,
            Storage::Matrix(_) => StorageKind::Matrix,
        }
    }

    fn inner(&self) -> &dyn Adjacency {
        match self {
            Storage::List(list) => list,
            Storage::Matrix(matrix) => matrix,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Adjacency {
        match self {
            Storage::List(list) => list,
            Storage::Matrix(matrix) => matrix,
        }
    }

    pub fn has_negative_edges(&self) -> bool {
        self.pairs().iter().any(|(_, _, stats)| stats.has_negative())
    }
}

impl Adjacency for Storage {
    fn insert_node(&mut self, name: &str) {
        self.inner_mut().insert_node(name);
    }

    fn remove_node(&mut self, name: &str) {
        self.inner_mut().remove_node(name);
    }

    fn merge_edges(&mut self, from: &str, to: &str, edges: &[Edge]) {
        self.inner_mut().merge_edges(from, to, edges);
    }

    fn remove_pair(&mut self, from: &str, to: &str) {
        self.inner_mut().remove_pair(from, to);
    }

    fn statistics(&self, from: &str, to: &str) -> Option<&EdgeStatistics> {
        self.inner().statistics(from, to)
    }

    fn neighbors(&self, from: &str) -> Vec<(&str, &EdgeStatistics)> {
        self.inner().neighbors(from)
    }

    fn pairs(&self) -> Vec<(&str, &str, &EdgeStatistics)> {
        self.inner().pairs()
    }
}
