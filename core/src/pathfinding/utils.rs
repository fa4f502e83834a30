use crate::error::RouteError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single shortest route query.
pub type QueryResult = Result<Route, RouteError>;

/// A shortest route from departure to destination, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<String>,
    pub total_distance: u64,
    /// Number of flights taken, one less than the number of airports on the path
    pub hops: usize,
    /// Estimated flight time, rounded up to the next whole minute
    pub minutes: u64,
}

impl Route {
    pub fn origin(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Consecutive `(from, to)` airport pairs along the path.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shortest Time: {} minutes", self.minutes)?;
        writeln!(f, "Path: {}", self.path.join(" -> "))?;
        write!(f, "Connections: {}", self.hops)
    }
}

/// Minutes needed to fly `total_distance` at `cruise_speed` units per hour.
pub fn travel_minutes(total_distance: u64, cruise_speed: f64) -> u64 {
    (total_distance as f64 / cruise_speed * 60.0).ceil() as u64
}

/// Walks predecessor links back from `target` and returns the path start-first.
pub fn reconstruct_path(
    predecessors: &FxHashMap<&str, &str>,
    start: &str,
    target: &str,
) -> Vec<String> {
    let mut path = vec![target.to_string()];
    let mut current_airport = target;

    while current_airport != start {
        let Some(&previous_airport) = predecessors.get(current_airport) else {
            break;
        };
        path.push(previous_airport.to_string());
        current_airport = previous_airport;
    }

    path.reverse();
    path
}
