use clap::Parser;
use flightpath::app::FlightPathApp;
use flightpath::colors::ColorScheme;
use flightpath::display::{display_airport_list, display_search_info, display_search_results};
use flightpath::json_output::{create_json_output, print_json_output};
use flightpath::logging::init_tracing;
use flightpath::*;

fn main() {
    let args = Args::parse();
    init_tracing(&args);

    let colors = ColorScheme::new(!args.no_color && !args.json);

    let app = match FlightPathApp::new(args.routes.as_deref()) {
        Ok(app) => app,
        Err(error) => exit_with_error(&error.to_string(), &colors),
    };

    if args.list {
        let airports = app.sorted_airports();
        if args.json {
            match serde_json::to_string_pretty(&airports) {
                Ok(json_string) => println!("{}", json_string),
                Err(e) => eprintln!("Error serializing to JSON: {}", e),
            }
        } else {
            display_airport_list(&airports, &colors);
        }
        return;
    }

    let search_request = match create_search_request(&args, &app.graph) {
        Ok(request) => request,
        Err(error_message) => exit_with_error(&error_message, &colors),
    };

    if args.verbose && !args.json {
        display_search_info(&search_request, &app, &colors);
    }

    let search_result = execute_search(&search_request, &app.graph);

    if args.json {
        print_json_output(&create_json_output(&search_result, &app.graph));
    } else {
        display_search_results(&search_result, &args, &app.graph, &colors);
    }
}

fn exit_with_error(message: &str, colors: &ColorScheme) -> ! {
    eprintln!("{}", colors.error(&format!("❌ Error: {}", message)));
    std::process::exit(1);
}
