//! ghreport - GitHub profile analysis reports
//!
//! A command line tool that fetches a GitHub user's profile and public
//! repositories, summarizes stars, forks and languages, and exports the
//! summary as a PDF report.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod commands;
mod config;
mod error;
mod github;
mod operations;
mod render;
mod report;
mod store;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::{Cli, Commands};
use error::Result;

/// Install the log subscriber: `RUST_LOG` wins, then `--verbose`, else warnings only
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => {
            let settings = commands::load_settings(cli.config.as_deref())?;
            commands::analyze::run(settings, &cli.session, args)
        }
        Commands::Export(args) => {
            let settings = commands::load_settings(cli.config.as_deref())?;
            commands::export::run(settings, &cli.session, args)
        }
        Commands::Sessions(args) => {
            let settings = commands::load_settings(cli.config.as_deref())?;
            commands::sessions::run(settings, args)
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
