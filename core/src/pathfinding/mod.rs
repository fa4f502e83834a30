pub mod dijkstra;
pub mod utils;

// Re-export the public functions
pub use dijkstra::dijkstra_find_route;
pub use utils::{QueryResult, Route, travel_minutes};
