use edgegraph_core::config::StorageKind;
use edgegraph_core::graph::TraversalOrder;

/// Parse traversal order from string
pub fn parse_traversal_order(s: &str) -> std::result::Result<TraversalOrder, String> {
    s.parse::<TraversalOrder>()
}

/// Parse storage kind from string
pub fn parse_storage_kind(s: &str) -> std::result::Result<StorageKind, String> {
    s.parse::<StorageKind>()
}
