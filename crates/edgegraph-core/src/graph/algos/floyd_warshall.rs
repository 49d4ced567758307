use std::time::Instant;

use crate::graph::storage::Adjacency;
use crate::trace_time;

/// All-pairs distance table; `table[i][j]` is the distance `names[i] -> names[j]`.
///
/// Seeds the diagonal with 0 unless a self-loop says otherwise. Negative
/// cycles are not detected: they leave some entries lower than any real
/// walk, and recomputing would lower them again.
#[tracing::instrument(skip_all, fields(nodes = names.len()))]
pub fn floyd_warshall(adjacency: &dyn Adjacency, names: &[&str]) -> Vec<Vec<f64>> {
    let start = Instant::now();
    let n = names.len();

    let mut table: Vec<Vec<f64>> = names
        .iter()
        .enumerate()
        .map(|(i, from)| {
            names
                .iter()
                .enumerate()
                .map(|(j, to)| match adjacency.statistics(from, to) {
                    Some(stats) => stats.min_weight(),
                    None if i == j => 0.0,
                    None => f64::INFINITY,
                })
                .collect()
        })
        .collect();

    for k in 0..n {
        for i in 0..n {
            let via = table[i][k];
            if via == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let rest = table[k][j];
                if rest == f64::INFINITY {
                    continue;
                }
                if via + rest < table[i][j] {
                    table[i][j] = via + rest;
                }
            }
        }
    }

    trace_time!(start, "floyd_warshall", nodes = n);
    table
}
