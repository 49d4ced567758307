use std::collections::HashMap;

use super::source_seed;
use crate::graph::storage::Adjacency;

/// One relaxation sweep over every pair leaving a finite-distance node.
/// Returns whether any distance dropped.
fn relax_all(adjacency: &dyn Adjacency, names: &[&str], distances: &mut HashMap<String, f64>) -> bool {
    let mut updated = false;
    for from in names {
        let base = distances.get(*from).copied().unwrap_or(f64::INFINITY);
        if base == f64::INFINITY {
            continue;
        }
        for (to, stats) in adjacency.neighbors(from) {
            let candidate = base + stats.min_weight();
            if let Some(current) = distances.get_mut(to) {
                if candidate < *current {
                    *current = candidate;
                    updated = true;
                }
            }
        }
    }
    updated
}

/// Distances from `from` to every node in `names`, or `None` when a negative
/// cycle is reachable from `from`.
///
/// Relaxes every pair until a sweep changes nothing, capped at one sweep per
/// node; a final sweep that still finds an improvement means the distances
/// are unbounded.
#[tracing::instrument(skip(adjacency, names), fields(from = %from, nodes = names.len()))]
pub fn bellman_ford(
    adjacency: &dyn Adjacency,
    names: &[&str],
    from: &str,
) -> Option<HashMap<String, f64>> {
    let mut distances: HashMap<String, f64> = names
        .iter()
        .map(|name| (name.to_string(), f64::INFINITY))
        .collect();
    distances.insert(from.to_string(), source_seed(adjacency, from));

    let mut sweeps = 0;
    while sweeps < names.len() {
        sweeps += 1;
        if !relax_all(adjacency, names, &mut distances) {
            break;
        }
    }

    let mut probe = distances.clone();
    if relax_all(adjacency, names, &mut probe) {
        tracing::debug!(sweeps, "negative_cycle_detected");
        return None;
    }

    tracing::debug!(sweeps, "bellman_ford_done");
    Some(distances)
}
