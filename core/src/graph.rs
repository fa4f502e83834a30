use crate::error::RouteError;
use crate::pathfinding::{QueryResult, dijkstra_find_route};
use crate::route_config::RouteConfig;
use crate::string_normalization::normalize_airport_name;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

/// Direct routes out of a single airport, keyed by destination.
#[derive(Debug, Clone, Default)]
pub struct Neighbors {
    routes: FxHashMap<String, u64>,
}

impl Neighbors {
    pub fn get(&self, airport: &str) -> Option<u64> {
        self.routes.get(airport).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.routes
            .iter()
            .map(|(airport, &distance)| (airport.as_str(), distance))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn insert(&mut self, airport: &str, distance: u64) {
        self.routes.insert(airport.to_string(), distance);
    }
}

/// Undirected airport network with non-negative route distances.
///
/// Every route is stored from both ends, so `neighbors(a).get(b)` and
/// `neighbors(b).get(a)` always agree. [`RouteGraph::add_edge`] is the only
/// place that writes adjacency entries.
///
/// The graph is built with `&mut self` and queried with `&self`; each query
/// owns its search state, so a finished graph can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    airports: FxHashMap<String, Neighbors>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an airport. Adding a known airport is a no-op.
    pub fn add_node(&mut self, airport: &str) {
        if !self.airports.contains_key(airport) {
            self.airports.insert(airport.to_string(), Neighbors::default());
        }
    }

    /// Adds or replaces the route between `from` and `to` in both directions.
    ///
    /// Unknown endpoints are registered first. A negative `weight` is rejected
    /// with [`RouteError::InvalidWeight`] and leaves the graph untouched.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<(), RouteError> {
        let distance = u64::try_from(weight).map_err(|_| {
            warn!(from, to, weight, "rejected route with negative distance");
            RouteError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            }
        })?;

        self.add_node(from);
        self.add_node(to);

        if let Some(neighbors) = self.airports.get_mut(from) {
            neighbors.insert(to, distance);
        }
        if let Some(neighbors) = self.airports.get_mut(to) {
            neighbors.insert(from, distance);
        }

        Ok(())
    }

    /// All known airports. Iteration order carries no meaning.
    pub fn list_nodes(&self) -> FxHashSet<&str> {
        self.airports.keys().map(String::as_str).collect()
    }

    pub fn neighbors(&self, airport: &str) -> Option<&Neighbors> {
        self.airports.get(airport)
    }

    pub fn contains(&self, airport: &str) -> bool {
        self.airports.contains_key(airport)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Number of distinct routes, counting each airport pair once.
    pub fn route_count(&self) -> usize {
        self.airports
            .iter()
            .map(|(airport, neighbors)| {
                neighbors
                    .iter()
                    .filter(|(other, _)| airport.as_str() <= *other)
                    .count()
            })
            .sum()
    }

    /// Looks up an airport by name, ignoring case, extra whitespace and accents.
    ///
    /// An exact match always wins. Among several normalized matches the
    /// alphabetically first name is returned so lookups stay deterministic.
    pub fn find_airport(&self, name: &str) -> Option<&str> {
        if let Some(airport) = self.airport_key(name) {
            return Some(airport);
        }

        let wanted = normalize_airport_name(name);
        if wanted.is_empty() {
            return None;
        }

        self.airports
            .keys()
            .filter(|airport| normalize_airport_name(airport) == wanted)
            .map(String::as_str)
            .min()
    }

    /// Shortest route using the default cruise speed for the time estimate.
    pub fn find_shortest_route(&self, start: &str, end: &str) -> QueryResult {
        self.find_shortest_route_with(start, end, &RouteConfig::default())
    }

    pub fn find_shortest_route_with(
        &self,
        start: &str,
        end: &str,
        config: &RouteConfig,
    ) -> QueryResult {
        dijkstra_find_route(self, start, end, config)
    }

    /// The stored key for `airport`, borrowed from the graph.
    pub(crate) fn airport_key(&self, airport: &str) -> Option<&str> {
        self.airports
            .get_key_value(airport)
            .map(|(key, _)| key.as_str())
    }
}
