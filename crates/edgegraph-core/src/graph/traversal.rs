use std::collections::{HashMap, HashSet};

use super::storage::{Adjacency, Storage};
use super::types::{TraversalOrder, Visit};
use super::Graph;
use crate::ensure_node;
use crate::error::Result;
use crate::frontier::{Discipline, Frontier};
use crate::node::Node;

impl TraversalOrder {
    pub fn discipline(self) -> Discipline {
        match self {
            TraversalOrder::BreadthFirst => Discipline::Fifo,
            TraversalOrder::DepthFirst => Discipline::Lifo,
        }
    }
}

/// Shared BFS/DFS loop over node names.
///
/// Visited suppression happens at pop time, so a name can sit in the
/// frontier more than once but is handed to `on_visit` at most once. A
/// node's step count is fixed by the first expansion that reaches it.
fn walk<F>(storage: &Storage, start: &str, discipline: Discipline, mut on_visit: F)
where
    F: FnMut(&str, usize) -> Visit,
{
    let mut frontier = Frontier::new(discipline);
    let mut visited: HashSet<String> = HashSet::new();
    let mut steps: HashMap<String, usize> = HashMap::from([(start.to_string(), 0)]);

    frontier.add(start.to_string());

    while let Some(current) = frontier.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }

        let current_steps = steps.get(&current).copied().unwrap_or_default();
        if on_visit(&current, current_steps) == Visit::Stop {
            break;
        }

        for (neighbor, _) in storage.neighbors(&current) {
            if visited.contains(neighbor) {
                continue;
            }
            steps
                .entry(neighbor.to_string())
                .or_insert(current_steps + 1);
            frontier.add(neighbor.to_string());
        }
    }
}

impl<V> Graph<V> {
    /// Traverse a copy of the graph and return it.
    ///
    /// The visitor may rewrite node values; those changes land on the
    /// returned copy only.
    pub fn walk<F, R>(&self, order: TraversalOrder, start: &str, visitor: F) -> Result<Self>
    where
        V: Clone,
        F: FnMut(&mut Node<V>, usize) -> R,
        R: Into<Visit>,
    {
        ensure_node!(self, start);
        let mut operating = self.copy();
        operating.walk_in_place(order, start, visitor)?;
        Ok(operating)
    }

    /// Traverse the graph itself; visitor changes land on `self`
    #[tracing::instrument(skip(self, visitor), fields(start = %start, order = ?order))]
    pub fn walk_in_place<F, R>(&mut self, order: TraversalOrder, start: &str, mut visitor: F) -> Result<()>
    where
        F: FnMut(&mut Node<V>, usize) -> R,
        R: Into<Visit>,
    {
        ensure_node!(self, start);

        let nodes = &mut self.nodes;
        let mut visits = 0usize;
        walk(&self.storage, start, order.discipline(), |name, step| {
            visits += 1;
            match nodes.get_mut(name) {
                Some(node) => visitor(node, step).into(),
                None => Visit::Continue,
            }
        });

        tracing::debug!(visits, "traversal_done");
        Ok(())
    }

    pub fn bfs<F, R>(&self, start: &str, visitor: F) -> Result<Self>
    where
        V: Clone,
        F: FnMut(&mut Node<V>, usize) -> R,
        R: Into<Visit>,
    {
        self.walk(TraversalOrder::BreadthFirst, start, visitor)
    }

    pub fn dfs<F, R>(&self, start: &str, visitor: F) -> Result<Self>
    where
        V: Clone,
        F: FnMut(&mut Node<V>, usize) -> R,
        R: Into<Visit>,
    {
        self.walk(TraversalOrder::DepthFirst, start, visitor)
    }

    pub fn bfs_in_place<F, R>(&mut self, start: &str, visitor: F) -> Result<()>
    where
        F: FnMut(&mut Node<V>, usize) -> R,
        R: Into<Visit>,
    {
        self.walk_in_place(TraversalOrder::BreadthFirst, start, visitor)
    }

    pub fn dfs_in_place<F, R>(&mut self, start: &str, visitor: F) -> Result<()>
    where
        F: FnMut(&mut Node<V>, usize) -> R,
        R: Into<Visit>,
    {
        self.walk_in_place(TraversalOrder::DepthFirst, start, visitor)
    }

    /// Names and step counts in visit order, without touching any payload
    pub fn visit_order(&self, order: TraversalOrder, start: &str) -> Result<Vec<(String, usize)>> {
        ensure_node!(self, start);

        let mut visited = Vec::new();
        walk(&self.storage, start, order.discipline(), |name, step| {
            visited.push((name.to_string(), step));
            Visit::Continue
        });
        Ok(visited)
    }

    /// Hop count of the first BFS visit to `to`, or `None` if never reached
    pub fn get_min_steps(&self, from: &str, to: &str) -> Result<Option<usize>> {
        ensure_node!(self, from);

        let mut found = None;
        walk(&self.storage, from, Discipline::Fifo, |name, step| {
            if name == to {
                found = Some(step);
                Visit::Stop
            } else {
                Visit::Continue
            }
        });
        Ok(found)
    }
}
