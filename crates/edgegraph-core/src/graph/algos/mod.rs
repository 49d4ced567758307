//! Shortest-distance algorithm implementations
//!
//! All three relax pairs by the lightest edge between them:
//! - `dijkstra`: single source, non-negative weights
//! - `bellman_ford`: single source, negative weights, negative-cycle detection
//! - `floyd_warshall`: all pairs, no negative-cycle detection

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use floyd_warshall::floyd_warshall;

use super::storage::Adjacency;

/// Starting distance of the source: its self-loop weight if it has one
pub(crate) fn source_seed(adjacency: &dyn Adjacency, from: &str) -> f64 {
    adjacency
        .statistics(from, from)
        .map(|stats| stats.min_weight())
        .unwrap_or(0.0)
}
