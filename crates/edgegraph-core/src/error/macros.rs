//! Error macros for edgegraph

/// Return `UnknownNode` unless the graph contains the named node
#[macro_export]
macro_rules! ensure_node {
    ($graph:expr, $name:expr) => {
        if !$graph.contains_node($name) {
            return Err($crate::error::GraphError::unknown_node($name));
        }
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
