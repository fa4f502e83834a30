use tracing_subscriber::EnvFilter;

use crate::args::Args;

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,flightpath_core=debug"
    } else {
        "warn"
    }
}

/// Log lines carry ANSI colors unless `--no-color` was given.
pub fn use_ansi(args: &Args) -> bool {
    !args.no_color
}

pub fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(args.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi(args))
        .with_writer(std::io::stderr)
        .init();
}
