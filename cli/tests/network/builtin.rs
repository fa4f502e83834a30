use flightpath::builtin_network;

#[test]
fn test_builtin_network_size() {
    let graph = builtin_network().unwrap();

    assert_eq!(graph.len(), 10);
    assert_eq!(graph.route_count(), 45);
}

#[test]
fn test_builtin_network_is_fully_connected() {
    let graph = builtin_network().unwrap();

    for airport in graph.list_nodes() {
        assert_eq!(graph.neighbors(airport).unwrap().len(), 9, "{airport}");
    }
}

#[test]
fn test_builtin_karachi_to_beijing_goes_via_dubai() {
    let graph = builtin_network().unwrap();

    let route = graph.find_shortest_route("Karachi", "Beijing").unwrap();

    assert_eq!(route.path, vec!["Karachi", "Dubai", "Beijing"]);
    assert_eq!(route.total_distance, 125);
    assert_eq!(route.hops, 2);
    assert_eq!(route.minutes, 10);
}

#[test]
fn test_builtin_direct_flight_when_shortest() {
    let graph = builtin_network().unwrap();

    let route = graph.find_shortest_route("Singapore", "Tokyo").unwrap();

    assert_eq!(route.path, vec!["Singapore", "Tokyo"]);
    assert_eq!(route.total_distance, 180);
    assert_eq!(route.minutes, 14);
}
