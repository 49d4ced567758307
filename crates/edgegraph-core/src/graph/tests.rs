use super::*;
use crate::primitive::Primitive;

fn names<V: Default>(names: &[&str]) -> Vec<NodeDescriptor<V>> {
    names.iter().map(|n| NodeDescriptor::from(*n)).collect()
}

fn both_flavors() -> [GraphOptions; 2] {
    [
        GraphOptions::default(),
        GraphOptions::default().with_storage(StorageKind::Matrix),
    ]
}

#[test]
fn test_duplicate_node_on_construction() {
    let err = Graph::<()>::new(names(&["A", "B", "A"]), vec![], GraphOptions::default())
        .unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode { name } if name == "A"));
}

#[test]
fn test_empty_node_name_rejected() {
    let err = Graph::<()>::new(names(&["A", ""]), vec![], GraphOptions::default()).unwrap_err();
    assert!(matches!(err, GraphError::EmptyNodeName));
}

#[test]
fn test_unknown_endpoint_on_construction() {
    let err = Graph::<()>::new(
        names(&["A"]),
        vec![ConnectionDescriptor::new("A", "B", Edge::new(1.0))],
        GraphOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::UnknownNode { name } if name == "B"));
}

#[test]
fn test_empty_edge_list_rejected() {
    let err = Graph::<()>::new(
        names(&["A", "B"]),
        vec![ConnectionDescriptor::many("A", "B", vec![])],
        GraphOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::NoEdgesProvided { .. }));
}

#[test]
fn test_bidirectional_expansion() {
    for options in both_flavors() {
        let g = Graph::<()>::new(
            names(&["A", "B", "C"]),
            vec![
                ConnectionDescriptor::new("A", "B", Edge::new(5.0)),
                ConnectionDescriptor::new("A", "C", Edge::directed(5.0)),
            ],
            options,
        )
        .unwrap();

        assert_eq!(g.statistics("A", "B").unwrap().all(), &[Edge::new(5.0)]);
        assert_eq!(g.statistics("B", "A").unwrap().all(), &[Edge::new(5.0)]);
        assert!(g.statistics("A", "C").is_some());
        assert!(g.statistics("C", "A").is_none());
    }
}

#[test]
fn test_mixed_batch_splits_by_direction() {
    let g = Graph::<()>::new(
        names(&["A", "B"]),
        vec![ConnectionDescriptor::many(
            "A",
            "B",
            vec![Edge::directed(1.0), Edge::new(8.0), Edge::new(3.0)],
        )],
        GraphOptions::default(),
    )
    .unwrap();

    let forward = g.statistics("A", "B").unwrap();
    assert_eq!(forward.count(), 3);
    assert_eq!(forward.min().weight(), 1.0);
    assert_eq!(forward.max().weight(), 8.0);

    let backward = g.statistics("B", "A").unwrap();
    assert_eq!(backward.count(), 2);
    assert_eq!(backward.min().weight(), 3.0);
    assert_eq!(backward.max().weight(), 8.0);
}

#[test]
fn test_add_connections_extends_statistics() {
    let mut g = Graph::<()>::new(
        names(&["A", "B"]),
        vec![ConnectionDescriptor::new("A", "B", Edge::directed(4.0))],
        GraphOptions::default(),
    )
    .unwrap();

    g.add_connections(vec![ConnectionDescriptor::many(
        "A",
        "B",
        vec![Edge::directed(2.0), Edge::directed(9.0)],
    )])
    .unwrap();

    let stats = g.statistics("A", "B").unwrap();
    assert_eq!(stats.count(), 3);
    assert_eq!(stats.min().weight(), 2.0);
    assert_eq!(stats.max().weight(), 9.0);
}

#[test]
fn test_failed_batch_applies_nothing() {
    let mut g = Graph::<()>::new(names(&["A", "B"]), vec![], GraphOptions::default()).unwrap();

    let err = g
        .add_connections(vec![
            ConnectionDescriptor::new("A", "B", Edge::new(1.0)),
            ConnectionDescriptor::new("A", "Z", Edge::new(1.0)),
        ])
        .unwrap_err();
    assert!(matches!(err, GraphError::UnknownNode { .. }));
    assert!(g.statistics("A", "B").is_none());

    let err = g
        .add_nodes(vec![NodeDescriptor::from("C"), NodeDescriptor::from("A")])
        .unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode { .. }));
    assert!(!g.contains_node("C"));

    let err = g.remove_nodes(["B", "Q"]).unwrap_err();
    assert!(matches!(err, GraphError::UnknownNode { .. }));
    assert!(g.contains_node("B"));
}

#[test]
fn test_add_nodes_rejects_repeat_within_batch() {
    let mut g = Graph::<()>::new(names(&["A"]), vec![], GraphOptions::default()).unwrap();
    let err = g
        .add_nodes(vec![NodeDescriptor::from("B"), NodeDescriptor::from("B")])
        .unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode { .. }));
    assert_eq!(g.node_count(), 1);
}

#[test]
fn test_remove_nodes_rejects_repeat_within_batch() {
    let mut g = Graph::<()>::new(names(&["A", "B"]), vec![], GraphOptions::default()).unwrap();
    assert!(g.remove_nodes(["A", "A"]).is_err());
    assert_eq!(g.node_count(), 2);
}

#[test]
fn test_remove_then_add_restores_empty_row() {
    for options in both_flavors() {
        let mut g = Graph::<()>::new(
            names(&["A", "B", "C"]),
            vec![
                ConnectionDescriptor::new("A", "B", Edge::new(1.0)),
                ConnectionDescriptor::new("B", "C", Edge::directed(2.0)),
                ConnectionDescriptor::new("C", "B", Edge::directed(3.0)),
            ],
            options,
        )
        .unwrap();

        g.remove_nodes(["B"]).unwrap();
        assert!(g.neighbors("A").unwrap().is_empty());
        assert!(g.neighbors("C").unwrap().is_empty());

        g.add_nodes(vec![NodeDescriptor::from("B")]).unwrap();
        assert!(g.neighbors("B").unwrap().is_empty());
        assert!(g.statistics("A", "B").is_none());
        assert!(g.statistics("C", "B").is_none());
    }
}

#[test]
fn test_remove_connections_is_symmetric() {
    for options in both_flavors() {
        let mut g = Graph::<()>::new(
            names(&["A", "B"]),
            vec![
                ConnectionDescriptor::new("A", "B", Edge::directed(1.0)),
                ConnectionDescriptor::new("B", "A", Edge::directed(2.0)),
            ],
            options,
        )
        .unwrap();

        g.remove_connections("A", "B").unwrap();

        // The independent B -> A connection goes too
        assert!(g.statistics("A", "B").is_none());
        assert!(g.statistics("B", "A").is_none());
    }
}

#[test]
fn test_remove_connections_validates_endpoints() {
    let mut g = Graph::<()>::new(names(&["A"]), vec![], GraphOptions::default()).unwrap();
    assert!(matches!(
        g.remove_connections("A", "B"),
        Err(GraphError::UnknownNode { .. })
    ));
}

#[test]
fn test_render_format() {
    let g = Graph::new(
        vec![
            NodeDescriptor::with_value("A", 1),
            NodeDescriptor::with_value("B", 2),
            NodeDescriptor::with_value("C", 3),
        ],
        vec![ConnectionDescriptor::many(
            "A",
            "B",
            vec![Edge::directed(3.0), Edge::new(5.0)],
        )],
        GraphOptions::default(),
    )
    .unwrap();

    let expected = "Node: A, Value: 1\n\
                    \t Node: B, Value: 2 <-> Edge min: 3, max: 5, count: 2\n\
                    \n\
                    Node: B, Value: 2\n\
                    \t Node: A, Value: 1 <-> Edge min: 5, max: 5, count: 1\n\
                    \n\
                    Node: C, Value: 3\n\
                    \tNo connections\n\
                    \n";
    assert_eq!(g.render_to_string(), expected);
    assert_eq!(g.to_string(), expected);
}

#[test]
fn test_render_fractional_and_negative_weights() {
    let g = Graph::<i32>::new(
        names(&["A", "B"]),
        vec![ConnectionDescriptor::many(
            "A",
            "B",
            vec![Edge::directed(-1.5), Edge::directed(2.25)],
        )],
        GraphOptions::default(),
    )
    .unwrap();

    assert!(g
        .render_to_string()
        .contains("Edge min: -1.5, max: 2.25, count: 2"));
}

#[test]
fn test_copy_is_independent() {
    let original = Graph::new(
        vec![NodeDescriptor::with_value("A", 1), NodeDescriptor::with_value("B", 2)],
        vec![ConnectionDescriptor::new("A", "B", Edge::new(1.0))],
        GraphOptions::default(),
    )
    .unwrap();
    let before = original.render_to_string();

    let mut copy = original.copy();
    copy.add_nodes(vec![NodeDescriptor::with_value("C", 3)]).unwrap();
    copy.add_connections(vec![ConnectionDescriptor::new("A", "B", Edge::new(7.0))])
        .unwrap();
    copy.remove_connections("A", "B").unwrap();
    copy.node_mut("A").unwrap().value = 100;

    assert_eq!(original.render_to_string(), before);
    assert_eq!(original.statistics("A", "B").unwrap().count(), 1);
    assert_ne!(copy.render_to_string(), before);
}

#[test]
fn test_copy_keeps_cache() {
    let mut original = Graph::<()>::new(
        names(&["A", "B"]),
        vec![ConnectionDescriptor::new("A", "B", Edge::new(2.0))],
        GraphOptions::default(),
    )
    .unwrap();
    original.calculate_all_distances();

    let mut copy = original.clone();
    assert!(copy.is_distance_cache_valid());

    copy.remove_nodes(["B"]).unwrap();
    assert!(!copy.is_distance_cache_valid());
    assert!(original.is_distance_cache_valid());
    assert_eq!(original.get_min_distance("A", "B").unwrap(), Some(2.0));
}

#[test]
fn test_graph_reads_as_text_only() {
    let g = Graph::<i32>::new(names(&["A"]), vec![], GraphOptions::default()).unwrap();
    assert_eq!(g.to_text().unwrap(), "Node: A, Value: 0\n\tNo connections\n\n");
    assert!(matches!(
        g.to_number(),
        Err(GraphError::InvalidNumericConversion { target: "graph", .. })
    ));
}

#[test]
fn test_from_descriptor() {
    let desc: GraphDescriptor<String> = serde_json::from_str(
        r#"{
            "nodes": [{"name": "A", "value": "start"}, {"name": "B"}],
            "connections": {"A": {"B": [{"weight": 2, "isBidirectional": false}, {"weight": -1}]}}
        }"#,
    )
    .unwrap();

    let g = Graph::from_descriptor(desc, GraphOptions::default()).unwrap();
    assert!(g.has_negative_edges());
    assert_eq!(g.statistics("A", "B").unwrap().count(), 2);
    assert_eq!(g.statistics("B", "A").unwrap().count(), 1);
    assert!(g.render_to_string().starts_with("Node: A, Value: start\n"));
    assert!(g.render_to_string().contains("Node: B, Value: \n"));
}

#[test]
fn test_accessors() {
    let g = Graph::<()>::new(
        names(&["B", "A"]),
        vec![],
        GraphOptions::default().with_storage(StorageKind::Matrix),
    )
    .unwrap();
    assert_eq!(g.node_names().collect::<Vec<_>>(), vec!["B", "A"]);
    assert_eq!(g.storage_kind(), StorageKind::Matrix);
    assert_eq!(g.node("A").unwrap().name(), "A");
    assert!(g.node("C").is_none());
    assert!(g.neighbors("C").is_err());
}
