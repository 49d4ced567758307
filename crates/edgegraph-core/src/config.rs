//! Graph construction options
//!
//! Options can be built in code or loaded from a TOML file:
//!
//! ```toml
//! has-negative-edges = true
//! storage = "matrix"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Adjacency storage flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Ordered per-node maps
    #[default]
    List,
    /// Dense `n x n` cells
    Matrix,
}

impl std::str::FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(StorageKind::List),
            "matrix" => Ok(StorageKind::Matrix),
            other => Err(format!(
                "unknown storage '{}' (expected: list, matrix)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GraphOptions {
    /// Declared presence of negative weights; `None` means detect by scanning
    pub has_negative_edges: Option<bool>,
    pub storage: StorageKind,
}

impl GraphOptions {
    pub fn with_negative_edges(mut self, has_negative_edges: bool) -> Self {
        self.has_negative_edges = Some(has_negative_edges);
        self
    }

    pub fn with_storage(mut self, storage: StorageKind) -> Self {
        self.storage = storage;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
