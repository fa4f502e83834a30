pub mod error;
pub mod graph;
pub mod pathfinding;
pub mod route_config;
pub mod string_normalization;

// Re-export commonly used items
pub use error::{FailureKind, RouteError};
pub use graph::{Neighbors, RouteGraph};
pub use pathfinding::{QueryResult, Route, dijkstra_find_route, travel_minutes};
pub use route_config::RouteConfig;
