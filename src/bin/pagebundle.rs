//! Pagebundle CLI Binary
//!
//! `pagebundle <SOURCE> <DESTINATION>`

use clap::Parser;
use pagebundle::cli::{format_summary, logging_config, map_error, Cli, RunContext};
use pagebundle::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Initialize logging early
    if let Err(e) = init_logging(&logging_config(&cli)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let context = match RunContext::new(&cli.source, &cli.destination) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error resolving roots: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute() {
        Ok(report) => {
            info!("Run completed successfully");
            if !cli.quiet {
                println!("{}", format_summary(&report));
            }
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
