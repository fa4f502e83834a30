use flightpath_core::{FailureKind, RouteGraph};

#[test]
fn test_add_edge_is_symmetric() {
    let mut graph = RouteGraph::new();
    graph.add_edge("Dubai", "Karachi", 65).unwrap();
    graph.add_edge("Karachi", "London", 420).unwrap();

    for (from, to, distance) in [("Dubai", "Karachi", 65), ("Karachi", "London", 420)] {
        assert_eq!(graph.neighbors(from).unwrap().get(to), Some(distance));
        assert_eq!(graph.neighbors(to).unwrap().get(from), Some(distance));
    }
}

#[test]
fn test_add_edge_creates_missing_airports() {
    let mut graph = RouteGraph::new();
    graph.add_edge("Tokyo", "Sydney", 770).unwrap();

    assert!(graph.contains("Tokyo"));
    assert!(graph.contains("Sydney"));
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.route_count(), 1);
}

#[test]
fn test_re_adding_edge_overwrites_distance() {
    let mut graph = RouteGraph::new();
    graph.add_edge("Berlin", "Toronto", 900).unwrap();
    graph.add_edge("Toronto", "Berlin", 850).unwrap();

    assert_eq!(graph.neighbors("Berlin").unwrap().get("Toronto"), Some(850));
    assert_eq!(graph.neighbors("Toronto").unwrap().get("Berlin"), Some(850));
    assert_eq!(graph.neighbors("Berlin").unwrap().len(), 1);
    assert_eq!(graph.route_count(), 1);
}

#[test]
fn test_add_node_is_idempotent() {
    let mut graph = RouteGraph::new();
    graph.add_node("Singapore");
    graph.add_edge("Singapore", "Tokyo", 180).unwrap();
    graph.add_node("Singapore");

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.neighbors("Singapore").unwrap().get("Tokyo"), Some(180));
}

#[test]
fn test_isolated_airport_has_no_neighbors() {
    let mut graph = RouteGraph::new();
    graph.add_node("Reykjavik");

    let neighbors = graph.neighbors("Reykjavik").unwrap();
    assert!(neighbors.is_empty());
    assert!(graph.neighbors("Nowhere").is_none());
}

#[test]
fn test_negative_weight_is_rejected() {
    let mut graph = RouteGraph::new();
    let result = graph.add_edge("London", "Paris", -1);

    let error = result.unwrap_err();
    assert_eq!(error.kind(), FailureKind::InvalidWeight);
    assert!(graph.is_empty());
}

#[test]
fn test_negative_weight_keeps_existing_route() {
    let mut graph = RouteGraph::new();
    graph.add_edge("London", "Paris", 340).unwrap();
    assert!(graph.add_edge("London", "Paris", -340).is_err());

    assert_eq!(graph.neighbors("London").unwrap().get("Paris"), Some(340));
    assert_eq!(graph.neighbors("Paris").unwrap().get("London"), Some(340));
}

#[test]
fn test_zero_weight_is_accepted() {
    let mut graph = RouteGraph::new();
    graph.add_edge("Terminal 1", "Terminal 2", 0).unwrap();

    assert_eq!(graph.neighbors("Terminal 1").unwrap().get("Terminal 2"), Some(0));
}

#[test]
fn test_list_nodes_returns_every_airport() {
    let mut graph = RouteGraph::new();
    graph.add_node("Beijing");
    graph.add_edge("Dubai", "Karachi", 65).unwrap();

    let airports = graph.list_nodes();
    assert_eq!(airports.len(), 3);
    for airport in ["Beijing", "Dubai", "Karachi"] {
        assert!(airports.contains(airport));
    }
}

#[test]
fn test_empty_graph() {
    let graph = RouteGraph::new();

    assert!(graph.is_empty());
    assert!(graph.list_nodes().is_empty());
    assert_eq!(graph.route_count(), 0);
}
