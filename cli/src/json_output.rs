use flightpath_core::RouteGraph;
use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub cruise_speed: f64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonStop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStop {
    pub airport: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_previous: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub airports: usize,
    pub routes: usize,
}

pub fn create_json_output(result: &SearchResult, graph: &RouteGraph) -> JsonOutput {
    let json_result = match &result.outcome {
        Ok(route) => {
            let stops = route
                .path
                .iter()
                .enumerate()
                .map(|(i, airport)| JsonStop {
                    airport: airport.clone(),
                    distance_from_previous: i
                        .checked_sub(1)
                        .and_then(|previous| graph.neighbors(&route.path[previous]))
                        .and_then(|neighbors| neighbors.get(airport)),
                })
                .collect();

            JsonResult {
                found: true,
                path: Some(stops),
                total_distance: Some(route.total_distance),
                connections: Some(route.hops),
                minutes: Some(route.minutes),
                error: None,
            }
        }
        Err(error) => JsonResult {
            found: false,
            path: None,
            total_distance: None,
            connections: None,
            minutes: None,
            error: Some(error.to_string()),
        },
    };

    JsonOutput {
        query: JsonQuery {
            from: result.from_name.clone(),
            to: result.to_name.clone(),
            options: JsonOptions {
                cruise_speed: result.cruise_speed,
            },
        },
        result: json_result,
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            airports: graph.len(),
            routes: graph.route_count(),
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
