use flightpath_core::{QueryResult, RouteConfig, RouteGraph};
use std::time::Instant;

use crate::args::Args;

pub struct SearchRequest {
    pub from_airport: String,
    pub to_airport: String,
    pub config: RouteConfig,
}

pub struct SearchResult {
    pub outcome: QueryResult,
    pub search_duration: f64,
    pub from_name: String,
    pub to_name: String,
    pub cruise_speed: f64,
}

pub fn find_best_airport_match(name: &str, graph: &RouteGraph) -> Result<String, String> {
    graph
        .find_airport(name)
        .map(str::to_string)
        .ok_or_else(|| format!("Airport '{}' not found", name))
}

pub fn create_search_request(args: &Args, graph: &RouteGraph) -> Result<SearchRequest, String> {
    let (Some(from_name), Some(to_name)) = (&args.from, &args.to) else {
        return Err("Please select both departure and destination airports.".to_string());
    };

    if !args.speed.is_finite() || args.speed <= 0.0 {
        return Err(format!(
            "Cruise speed must be a positive number, got {}",
            args.speed
        ));
    }

    let from_airport = find_best_airport_match(from_name, graph)?;
    let to_airport = find_best_airport_match(to_name, graph)?;

    Ok(SearchRequest {
        from_airport,
        to_airport,
        config: RouteConfig::new(args.speed),
    })
}

pub fn execute_search(request: &SearchRequest, graph: &RouteGraph) -> SearchResult {
    let search_timer = Instant::now();
    let outcome =
        graph.find_shortest_route_with(&request.from_airport, &request.to_airport, &request.config);

    SearchResult {
        outcome,
        search_duration: search_timer.elapsed().as_secs_f64(),
        from_name: request.from_airport.clone(),
        to_name: request.to_airport.clone(),
        cruise_speed: request.config.cruise_speed,
    }
}
