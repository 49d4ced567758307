//! Named graph vertices and their construction descriptors

use serde::Deserialize;

use crate::error::{GraphError, Result};
use crate::primitive::Primitive;

/// A uniquely named vertex carrying a caller-chosen payload.
///
/// The name is fixed at construction; the payload may be rewritten at any
/// time, typically by a traversal visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<V> {
    name: String,
    pub value: V,
}

impl<V> Node<V> {
    /// Create a node, rejecting empty names
    pub fn new(name: impl Into<String>, value: V) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GraphError::EmptyNodeName);
        }
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn set_value(&mut self, value: V) {
        self.value = value;
    }
}

impl<V> std::fmt::Display for Node<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Nodes read as their name; they have no numeric reading.
impl<V> Primitive for Node<V> {
    fn to_text(&self) -> Result<String> {
        Ok(self.name.clone())
    }

    fn to_number(&self) -> Result<f64> {
        Err(GraphError::invalid_conversion("node", "a number"))
    }
}

/// Descriptor used to insert a node: `{ name, value? }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeDescriptor<V> {
    pub name: String,
    #[serde(default)]
    pub value: V,
}

impl<V: Default> NodeDescriptor<V> {
    /// Descriptor with the payload's default value
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: V::default(),
        }
    }
}

impl<V> NodeDescriptor<V> {
    pub fn with_value(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub(crate) fn into_node(self) -> Result<Node<V>> {
        Node::new(self.name, self.value)
    }
}

impl<V: Default> From<&str> for NodeDescriptor<V> {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
