use std::fmt::{self, Display, Write};

use super::storage::Adjacency;
use super::Graph;
use crate::error::{GraphError, Result};
use crate::primitive::Primitive;

impl<V: Display> Graph<V> {
    /// Human-readable listing, one block per node in insertion order:
    ///
    /// ```text
    /// Node: A, Value: 1
    /// 	 Node: B, Value: 2 <-> Edge min: 3, max: 5, count: 2
    ///
    /// Node: B, Value: 2
    /// 	No connections
    ///
    /// ```
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_blocks(&mut out);
        out
    }

    fn write_blocks(&self, out: &mut impl Write) -> fmt::Result {
        for (name, node) in &self.nodes {
            writeln!(out, "Node: {}, Value: {}", name, node.value)?;

            let connections = self.storage.neighbors(name);
            if connections.is_empty() {
                writeln!(out, "\tNo connections")?;
            }

            for (to, stats) in connections {
                let value = self
                    .nodes
                    .get(to)
                    .map(|target| target.value.to_string())
                    .unwrap_or_default();
                writeln!(
                    out,
                    "\t Node: {}, Value: {} <-> Edge min: {}, max: {}, count: {}",
                    to,
                    value,
                    stats.min().weight(),
                    stats.max().weight(),
                    stats.count()
                )?;
            }

            writeln!(out)?;
        }
        Ok(())
    }
}

impl<V: Display> Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_blocks(f)
    }
}

/// A graph reads as its rendering and never as a number
impl<V: Display> Primitive for Graph<V> {
    fn to_text(&self) -> Result<String> {
        Ok(self.render_to_string())
    }

    fn to_number(&self) -> Result<f64> {
        Err(GraphError::invalid_conversion("graph", "a number"))
    }
}
