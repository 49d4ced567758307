//! Edgegraph Core Library
//!
//! Weighted multigraph with aggregated edge statistics, BFS/DFS traversal
//! and shortest-distance queries.

pub mod config;
pub mod edge;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod logging;
pub mod node;
pub mod primitive;

pub use config::{GraphOptions, StorageKind};
pub use edge::{Edge, EdgeInput};
pub use error::{GraphError, Result};
pub use graph::{ConnectionDescriptor, EdgeStatistics, Graph, GraphDescriptor, TraversalOrder, Visit};
pub use node::{Node, NodeDescriptor};
pub use primitive::Primitive;
