use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "flightpath")]
#[command(about = "Find the shortest flight route between two airports")]
pub struct Args {
    /// Departure airport
    pub from: Option<String>,

    /// Destination airport
    pub to: Option<String>,

    /// Load airports and routes from a JSON file instead of the built-in network
    #[arg(short, long, value_name = "FILE", env = "FLIGHTPATH_ROUTES")]
    pub routes: Option<PathBuf>,

    /// Cruise speed used for the travel time estimate
    #[arg(short, long, value_name = "KMH", default_value = "800")]
    pub speed: f64,

    /// List all known airports and exit
    #[arg(short, long)]
    pub list: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}
