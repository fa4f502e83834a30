
use flightpath_core::RouteGraph;

pub fn graph_from(routes: &[(&str, &str, i64)]) -> RouteGraph {
    let mut graph = RouteGraph::new();
    for &(from, to, distance) in routes {
        graph.add_edge(from, to, distance).unwrap();
    }
    graph
}
