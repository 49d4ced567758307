use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::source_seed;
use crate::graph::storage::Adjacency;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance,
/// then by push order so equal distances settle first-come first-served)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node: String,
    pub distance: f64,
    pub seq: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState {
    distances: HashMap<String, f64>,
    settled: HashSet<String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    seq: usize,
}

impl DijkstraState {
    fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            distances: names
                .into_iter()
                .map(|name| (name.to_string(), f64::INFINITY))
                .collect(),
            settled: HashSet::new(),
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    fn push(&mut self, node: &str, distance: f64) {
        self.distances.insert(node.to_string(), distance);
        self.heap.push(Reverse(HeapEntry {
            node: node.to_string(),
            distance,
            seq: self.seq,
        }));
        self.seq += 1;
    }

    fn distance(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }
}

/// Tentative distances from `from` to every node in `names`.
///
/// Weights must be non-negative. Unreachable nodes stay at `f64::INFINITY`;
/// the run ends as soon as nothing reachable is left to settle.
#[tracing::instrument(skip(adjacency, names), fields(from = %from))]
pub fn dijkstra<'a>(
    adjacency: &dyn Adjacency,
    names: impl IntoIterator<Item = &'a str>,
    from: &str,
) -> HashMap<String, f64> {
    let mut state = DijkstraState::new(names);
    state.push(from, source_seed(adjacency, from));

    while let Some(Reverse(HeapEntry { node, distance, .. })) = state.heap.pop() {
        if !state.settled.insert(node.clone()) {
            continue;
        }

        for (neighbor, stats) in adjacency.neighbors(&node) {
            let candidate = distance + stats.min_weight();
            if candidate < state.distance(neighbor) && !state.settled.contains(neighbor) {
                state.push(neighbor, candidate);
            }
        }
    }

    tracing::debug!(settled = state.settled.len(), "dijkstra_done");
    state.distances
}
