//! querylens - classify the intent behind developer queries from the command line
#![cfg_attr(
    test,
    allow(
        dead_code,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        clippy::print_stdout,
        clippy::print_stderr,
        reason = "Allow for tests"
    )
)]

use anyhow::Result;
use clap::Parser as _;
use cli::{Cli, Commands};
use handlers::Runner;
use std::process::ExitCode;

mod cli;
mod handlers;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    handlers::init_logging();

    let config = match handlers::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Failed to load configuration: {error}");
            return handlers::emit_failure(&error, cli.pretty);
        }
    };

    match cli.command {
        Commands::Analyze { query, context } => {
            Runner::new(&config, cli.pretty).analyze(query, context)
        }
        Commands::Classify {
            query,
            context,
            session,
        } => Runner::new(&config, cli.pretty).classify(query, context, session),
        Commands::Resolve { path } => Runner::new(&config, cli.pretty).resolve(&path),
        Commands::Config { full } => handlers::handle_config(cli.config, &config, full, cli.pretty),
    }
}
