use campusroute_lib::test_helpers::GraphModelBuilder;
use campusroute_lib::{validate, Error, Node, PathQuery, QueryEndpoint};

fn query() -> PathQuery {
    PathQuery::new("A", "B")
}

#[test]
fn clean_graph_passes_validation() {
    let graph = GraphModelBuilder::new()
        .node("A")
        .node("B")
        .edge("A", "B", 10.0)
        .build();

    let validated = validate(&graph, &query()).expect("valid graph");
    assert_eq!(validated.start(), 0);
    assert_eq!(validated.end(), 1);
}

#[test]
fn node_with_empty_id_is_malformed() {
    let graph = GraphModelBuilder::new()
        .node("A")
        .raw_node(Node {
            id: String::new(),
            label: "nameless".to_string(),
            lat: 13.0,
            lng: 80.2,
        })
        .node("B")
        .build();

    let error = validate(&graph, &query()).expect_err("rejected");
    assert!(matches!(error, Error::MalformedNode { position: 1, .. }));
}

#[test]
fn node_with_non_finite_coordinates_is_malformed() {
    let graph = GraphModelBuilder::new()
        .raw_node(Node {
            id: "A".to_string(),
            label: "Main Gate".to_string(),
            lat: f64::NAN,
            lng: 80.2,
        })
        .node("B")
        .build();

    let error = validate(&graph, &query()).expect_err("rejected");
    assert!(matches!(error, Error::MalformedNode { position: 0, .. }));
}

#[test]
fn duplicate_node_ids_are_rejected() {
    let graph = GraphModelBuilder::new()
        .node("A")
        .node("B")
        .node("A")
        .build();

    let error = validate(&graph, &query()).expect_err("rejected");
    assert!(matches!(error, Error::DuplicateNodeId { ref id } if id == "A"));
}

#[test]
fn edge_with_non_finite_distance_is_malformed() {
    let graph = GraphModelBuilder::new()
        .node("A")
        .node("B")
        .edge("A", "B", f64::INFINITY)
        .build();

    let error = validate(&graph, &query()).expect_err("rejected");
    assert!(matches!(error, Error::MalformedEdge { position: 0, .. }));
}

#[test]
fn edge_with_empty_endpoint_is_malformed() {
    let graph = GraphModelBuilder::new()
        .node("A")
        .node("B")
        .edge("A", "", 5.0)
        .build();

    let error = validate(&graph, &query()).expect_err("rejected");
    assert!(matches!(error, Error::MalformedEdge { position: 0, .. }));
}

#[test]
fn dangling_edge_identifies_the_missing_reference() {
    let graph = GraphModelBuilder::new()
        .node("A")
        .node("B")
        .edge("A", "B", 10.0)
        .edge("B", "X", 20.0)
        .build();

    let error = validate(&graph, &query()).expect_err("rejected");
    match error {
        Error::DanglingEdge {
            position,
            source,
            target,
            missing,
        } => {
            assert_eq!(position, 1);
            assert_eq!(source, "B");
            assert_eq!(target, "X");
            assert_eq!(missing, "X");
        }
        other => panic!("expected DanglingEdge, got {other:?}"),
    }
}

#[test]
fn first_offending_edge_wins() {
    let graph = GraphModelBuilder::new()
        .node("A")
        .node("B")
        .edge("A", "X", 1.0)
        .edge("A", "Y", 2.0)
        .build();

    let error = validate(&graph, &query()).expect_err("rejected");
    assert!(matches!(error, Error::DanglingEdge { position: 0, .. }));
}

#[test]
fn node_violations_are_reported_before_edge_violations() {
    let graph = GraphModelBuilder::new()
        .raw_node(Node {
            id: "A".to_string(),
            label: "Main Gate".to_string(),
            lat: f64::INFINITY,
            lng: 80.2,
        })
        .node("B")
        .edge("A", "X", 1.0)
        .build();

    let error = validate(&graph, &query()).expect_err("rejected");
    assert!(matches!(error, Error::MalformedNode { .. }));
}

#[test]
fn edge_violations_are_reported_before_endpoint_violations() {
    let graph = GraphModelBuilder::new()
        .node("A")
        .edge("A", "X", 1.0)
        .build();

    let error = validate(&graph, &PathQuery::new("A", "Z")).expect_err("rejected");
    assert!(matches!(error, Error::DanglingEdge { .. }));
}

#[test]
fn unknown_start_endpoint_is_identified() {
    let graph = GraphModelBuilder::new().node("A").node("B").build();

    let error = validate(&graph, &PathQuery::new("Q", "B")).expect_err("rejected");
    assert!(matches!(
        error,
        Error::UnknownEndpoint {
            endpoint: QueryEndpoint::Start,
            ref name,
            ..
        } if name == "Q"
    ));
}

#[test]
fn unknown_end_endpoint_is_identified() {
    let graph = GraphModelBuilder::new().node("A").node("B").build();

    let error = validate(&graph, &PathQuery::new("A", "Z")).expect_err("rejected");
    assert!(matches!(
        error,
        Error::UnknownEndpoint {
            endpoint: QueryEndpoint::End,
            ref name,
            ..
        } if name == "Z"
    ));
}

#[test]
fn empty_endpoint_is_unknown_without_suggestions() {
    let graph = GraphModelBuilder::new().node("A").node("B").build();

    let error = validate(&graph, &PathQuery::new("", "B")).expect_err("rejected");
    match error {
        Error::UnknownEndpoint {
            endpoint,
            name,
            suggestions,
        } => {
            assert_eq!(endpoint, QueryEndpoint::Start);
            assert!(name.is_empty());
            assert!(suggestions.is_empty());
        }
        other => panic!("expected UnknownEndpoint, got {other:?}"),
    }
}

#[test]
fn near_miss_endpoint_gets_a_suggestion() {
    let graph = GraphModelBuilder::new()
        .node("Library")
        .node("CoffeeHut")
        .build();

    let error = validate(&graph, &PathQuery::new("Librari", "CoffeeHut")).expect_err("rejected");
    match error {
        Error::UnknownEndpoint { suggestions, .. } => {
            assert!(suggestions.contains(&"Library".to_string()));
        }
        other => panic!("expected UnknownEndpoint, got {other:?}"),
    }
}
