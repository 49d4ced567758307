use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn edgegraph() -> Command {
    cargo_bin_cmd!("edgegraph")
}

/// Directed textbook graph: shortest A -> F is A -> C -> F = 5
pub const TEXTBOOK: &str = r#"{
    "nodes": [
        {"name": "A", "value": 1},
        {"name": "B", "value": 2},
        {"name": "C", "value": 3},
        {"name": "D", "value": 4},
        {"name": "F", "value": 5}
    ],
    "connections": {
        "A": {
            "B": {"weight": 7, "isBidirectional": false},
            "C": {"weight": 3, "isBidirectional": false},
            "D": {"weight": 4, "isBidirectional": false}
        },
        "C": {
            "B": {"weight": 12, "isBidirectional": false},
            "D": {"weight": 5, "isBidirectional": false},
            "F": {"weight": 2, "isBidirectional": false}
        }
    }
}"#;

/// Two nodes joined by a negative two-cycle
pub const NEGATIVE_CYCLE: &str = r#"{
    "nodes": [{"name": "X"}, {"name": "Y"}],
    "connections": {
        "X": {"Y": {"weight": -1, "isBidirectional": false}},
        "Y": {"X": {"weight": -1, "isBidirectional": false}}
    }
}"#;

/// A - B - D, A - C bidirectional; C -> E directed; F isolated
pub const TREE: &str = r#"{
    "nodes": [
        {"name": "A"}, {"name": "B"}, {"name": "C"},
        {"name": "D"}, {"name": "E"}, {"name": "F"}
    ],
    "connections": {
        "A": {"B": {"weight": 1}, "C": {"weight": 1}},
        "B": {"D": {"weight": 1}},
        "C": {"E": {"weight": 1, "isBidirectional": false}}
    }
}"#;

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
