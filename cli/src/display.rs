use flightpath_core::{Route, RouteError, RouteGraph};
use flightpath_core::route_config::DEFAULT_CRUISE_SPEED;

use crate::app::FlightPathApp;
use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, app: &FlightPathApp, colors: &ColorScheme) {
    println!(
        "✈️  Finding route from {} to {}",
        colors.quoted_airport(&request.from_airport),
        colors.quoted_airport(&request.to_airport)
    );

    println!(
        "🗺️  Using {} ({} airports, {} routes)",
        app.source,
        colors.number(&format_number(app.graph.len() as u64)),
        colors.number(&format_number(app.graph.route_count() as u64))
    );

    if request.config.cruise_speed != DEFAULT_CRUISE_SPEED {
        println!(
            "⚡ Estimating travel time at {} km/h",
            colors.number(&request.config.cruise_speed.to_string())
        );
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(
    result: &SearchResult,
    args: &Args,
    graph: &RouteGraph,
    colors: &ColorScheme,
) {
    if args.verbose {
        println!("\n---\n");
    }

    match &result.outcome {
        Ok(route) => display_successful_route(route, args, graph, colors),
        Err(error) => display_failure(error, result, colors),
    }

    if args.verbose {
        display_search_statistics(graph.len(), result.search_duration, colors);
    }
}

fn display_successful_route(route: &Route, args: &Args, graph: &RouteGraph, colors: &ColorScheme) {
    if args.verbose {
        println!("{}\n", format_route_header(route, colors));
    }

    let path_flow = route
        .path
        .iter()
        .map(|airport| colors.quoted_airport(airport).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", path_flow);

    if args.quiet {
        return;
    }

    println!();
    for (step_index, airport) in route.path.iter().enumerate() {
        let step_number = format!("{}.", step_index + 1);
        let leg_distance = step_index
            .checked_sub(1)
            .and_then(|previous| graph.neighbors(&route.path[previous]))
            .and_then(|neighbors| neighbors.get(airport));

        println!(
            "{}",
            format_path_step(&step_number, airport, leg_distance, colors)
        );
    }

    println!("\n{}", route);
}

pub fn format_route_header(route: &Route, colors: &ColorScheme) -> String {
    format!(
        "{} Found route from {} to {} with {} connections:",
        colors.success("✅"),
        colors.quoted_airport(route.origin().unwrap_or_default()),
        colors.quoted_airport(route.destination().unwrap_or_default()),
        colors.number(&route.hops.to_string())
    )
}

pub fn format_path_step(
    step_number: &str,
    airport: &str,
    leg_distance: Option<u64>,
    colors: &ColorScheme,
) -> String {
    let mut formatted_line = format!(
        "{:>3} {}",
        colors.step_number(step_number),
        colors.quoted_airport(airport)
    );

    if let Some(distance) = leg_distance {
        formatted_line.push_str(&format!(" {}", colors.leg_distance(distance)));
    }

    formatted_line
}

fn display_failure(error: &RouteError, result: &SearchResult, colors: &ColorScheme) {
    match error {
        RouteError::NoPath { .. } => println!(
            "{} {} and {}",
            colors.error("❌ No path exists between"),
            colors.quoted_airport(&result.from_name),
            colors.quoted_airport(&result.to_name)
        ),
        _ => println!("{}", colors.error(&format!("❌ {}", error))),
    }
}

pub fn display_airport_list(airports: &[&str], colors: &ColorScheme) {
    for airport in airports {
        println!("{}", colors.airport_name(airport));
    }
}

fn display_search_statistics(airport_count: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Searched {} airports in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(airport_count as u64)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
