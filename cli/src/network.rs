use flightpath_core::{RouteError, RouteGraph};
use serde::{Deserialize, Serialize};
use std::{error::Error, path::Path};
use tracing::debug;

/// Distances in kilometers between the airports of the built-in network.
const BUILTIN_ROUTES: &[(&str, &str, i64)] = &[
    ("Dubai", "Karachi", 65),
    ("Dubai", "London", 420),
    ("Dubai", "New York", 550),
    ("Dubai", "Singapore", 600),
    ("Dubai", "Tokyo", 700),
    ("Dubai", "Sydney", 960),
    ("Dubai", "Berlin", 510),
    ("Dubai", "Toronto", 600),
    ("Dubai", "Beijing", 60),
    ("Karachi", "London", 420),
    ("Karachi", "New York", 550),
    ("Karachi", "Singapore", 430),
    ("Karachi", "Tokyo", 600),
    ("Karachi", "Sydney", 750),
    ("Karachi", "Berlin", 800),
    ("Karachi", "Toronto", 500),
    ("Karachi", "Beijing", 400),
    ("London", "New York", 550),
    ("London", "Singapore", 700),
    ("London", "Tokyo", 850),
    ("London", "Sydney", 960),
    ("London", "Berlin", 900),
    ("London", "Toronto", 550),
    ("London", "Beijing", 800),
    ("New York", "Singapore", 880),
    ("New York", "Tokyo", 950),
    ("New York", "Sydney", 870),
    ("New York", "Berlin", 1000),
    ("New York", "Toronto", 700),
    ("New York", "Beijing", 850),
    ("Singapore", "Tokyo", 180),
    ("Singapore", "Sydney", 450),
    ("Singapore", "Berlin", 700),
    ("Singapore", "Toronto", 500),
    ("Singapore", "Beijing", 600),
    ("Tokyo", "Sydney", 770),
    ("Tokyo", "Berlin", 800),
    ("Tokyo", "Toronto", 280),
    ("Tokyo", "Beijing", 500),
    ("Sydney", "Berlin", 510),
    ("Sydney", "Toronto", 250),
    ("Sydney", "Beijing", 450),
    ("Berlin", "Toronto", 900),
    ("Berlin", "Beijing", 700),
    ("Toronto", "Beijing", 400),
];

/// On-disk route network: optional standalone airports plus routes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteFile {
    #[serde(default)]
    pub airports: Vec<String>,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    pub from: String,
    pub to: String,
    pub distance: i64,
}

impl RouteFile {
    pub fn into_graph(self) -> Result<RouteGraph, RouteError> {
        let mut graph = RouteGraph::new();

        for airport in &self.airports {
            graph.add_node(airport);
        }
        for route in &self.routes {
            graph.add_edge(&route.from, &route.to, route.distance)?;
        }

        Ok(graph)
    }
}

pub fn builtin_network() -> Result<RouteGraph, RouteError> {
    let mut graph = RouteGraph::new();
    for &(from, to, distance) in BUILTIN_ROUTES {
        graph.add_edge(from, to, distance)?;
    }
    Ok(graph)
}

pub fn parse_route_file(contents: &str) -> Result<RouteGraph, Box<dyn Error>> {
    let route_file: RouteFile = serde_json::from_str(contents)?;
    Ok(route_file.into_graph()?)
}

pub fn load_route_file(path: &Path) -> Result<RouteGraph, Box<dyn Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read route file {:?}: {}", path, e))?;
    let graph = parse_route_file(&contents)?;

    debug!(
        path = %path.display(),
        airports = graph.len(),
        routes = graph.route_count(),
        "loaded route file"
    );

    Ok(graph)
}
