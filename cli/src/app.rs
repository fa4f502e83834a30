use flightpath_core::RouteGraph;
use std::{error::Error, path::Path};

use crate::network::{builtin_network, load_route_file};

pub struct FlightPathApp {
    pub graph: RouteGraph,
    pub source: String,
}

impl FlightPathApp {
    pub fn new(routes_path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let (graph, source) = match routes_path {
            Some(path) => {
                if !path.exists() {
                    return Err(format!("Route file does not exist: {:?}", path).into());
                }
                (load_route_file(path)?, path.display().to_string())
            }
            None => (builtin_network()?, "built-in network".to_string()),
        };

        Ok(Self { graph, source })
    }

    /// Airport names sorted for display.
    pub fn sorted_airports(&self) -> Vec<&str> {
        let mut airports: Vec<&str> = self.graph.list_nodes().into_iter().collect();
        airports.sort_unstable();
        airports
    }
}
