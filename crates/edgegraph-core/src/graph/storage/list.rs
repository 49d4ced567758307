use indexmap::IndexMap;

use super::Adjacency;
use crate::edge::Edge;
use crate::graph::types::EdgeStatistics;

/// Row-per-node adjacency with insertion-ordered rows
#[derive(Debug, Clone, Default)]
pub struct ListAdjacency {
    rows: IndexMap<String, IndexMap<String, EdgeStatistics>>,
}

impl Adjacency for ListAdjacency {
    fn insert_node(&mut self, name: &str) {
        self.rows.entry(name.to_string()).or_default();
    }

    fn remove_node(&mut self, name: &str) {
        self.rows.shift_remove(name);
        for row in self.rows.values_mut() {
            row.shift_remove(name);
        }
    }

    fn merge_edges(&mut self, from: &str, to: &str, edges: &[Edge]) {
        let row = self.rows.entry(from.to_string()).or_default();
        match row.get_mut(to) {
            Some(stats) => stats.extend(edges),
            None => {
                if let Some(stats) = EdgeStatistics::from_edges(edges) {
                    row.insert(to.to_string(), stats);
                }
            }
        }
    }

    fn remove_pair(&mut self, from: &str, to: &str) {
        if let Some(row) = self.rows.get_mut(from) {
            row.shift_remove(to);
        }
    }

    fn statistics(&self, from: &str, to: &str) -> Option<&EdgeStatistics> {
        self.rows.get(from)?.get(to)
    }

    fn neighbors(&self, from: &str) -> Vec<(&str, &EdgeStatistics)> {
        self.rows
            .get(from)
            .map(|row| row.iter().map(|(to, stats)| (to.as_str(), stats)).collect())
            .unwrap_or_default()
    }

    fn pairs(&self) -> Vec<(&str, &str, &EdgeStatistics)> {
        self.rows
            .iter()
            .flat_map(|(from, row)| {
                row.iter()
                    .map(move |(to, stats)| (from.as_str(), to.as_str(), stats))
            })
            .collect()
    }
}
