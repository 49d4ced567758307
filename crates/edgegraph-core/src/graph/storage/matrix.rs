use std::collections::HashMap;

use indexmap::IndexSet;

use super::Adjacency;
use crate::edge::Edge;
use crate::graph::types::EdgeStatistics;

/// Dense adjacency: `cells[i][j]` holds the statistics for `names[i] -> names[j]`.
///
/// `filled[i]` lists the targets of row `i` in the order their cells were
/// first filled, so neighbors iterate the same way as in list storage.
#[derive(Debug, Clone, Default)]
pub struct MatrixAdjacency {
    names: Vec<String>,
    index: HashMap<String, usize>,
    cells: Vec<Vec<Option<EdgeStatistics>>>,
    filled: Vec<IndexSet<String>>,
}

impl MatrixAdjacency {
    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn reindex(&mut self) {
        self.index = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
    }
}

impl Adjacency for MatrixAdjacency {
    fn insert_node(&mut self, name: &str) {
        if self.index.contains_key(name) {
            return;
        }
        for row in &mut self.cells {
            row.push(None);
        }
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), self.names.len() - 1);
        self.cells.push(vec![None; self.names.len()]);
        self.filled.push(IndexSet::new());
    }

    fn remove_node(&mut self, name: &str) {
        let Some(i) = self.position(name) else {
            return;
        };
        self.names.remove(i);
        self.cells.remove(i);
        self.filled.remove(i);
        for row in &mut self.cells {
            row.remove(i);
        }
        for targets in &mut self.filled {
            targets.shift_remove(name);
        }
        self.reindex();
    }

    fn merge_edges(&mut self, from: &str, to: &str, edges: &[Edge]) {
        let (Some(i), Some(j)) = (self.position(from), self.position(to)) else {
            return;
        };
        if let Some(stats) = self.cells[i][j].as_mut() {
            stats.extend(edges);
        } else if let Some(stats) = EdgeStatistics::from_edges(edges) {
            self.cells[i][j] = Some(stats);
            self.filled[i].insert(to.to_string());
        }
    }

    fn remove_pair(&mut self, from: &str, to: &str) {
        if let (Some(i), Some(j)) = (self.position(from), self.position(to)) {
            self.cells[i][j] = None;
            self.filled[i].shift_remove(to);
        }
    }

    fn statistics(&self, from: &str, to: &str) -> Option<&EdgeStatistics> {
        let (i, j) = (self.position(from)?, self.position(to)?);
        self.cells[i][j].as_ref()
    }

    fn neighbors(&self, from: &str) -> Vec<(&str, &EdgeStatistics)> {
        let Some(i) = self.position(from) else {
            return Vec::new();
        };
        self.filled[i]
            .iter()
            .filter_map(|to| {
                let j = self.position(to)?;
                self.cells[i][j].as_ref().map(|stats| (to.as_str(), stats))
            })
            .collect()
    }

    fn pairs(&self) -> Vec<(&str, &str, &EdgeStatistics)> {
        self.names
            .iter()
            .flat_map(|from| {
                self.neighbors(from)
                    .into_iter()
                    .map(move |(to, stats)| (from.as_str(), to, stats))
            })
            .collect()
    }
}
