//! csvprof CLI - per-column profiling for CSV files.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Install the log subscriber. Logs go to stderr so stdout stays clean for
/// `summary --json`; `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Profile {
            file,
            out_dir,
            report_name,
            preview,
            options,
        } => commands::profile::run(file, out_dir, report_name, preview, options, cli.verbose),

        Commands::Summary {
            file,
            json,
            options,
        } => commands::summary::run(file, json, options),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
