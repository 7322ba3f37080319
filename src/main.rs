mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

use cinesort::config::Config;
use cinesort::runner;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "cinesort=debug".to_string()
        } else {
            "cinesort=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let config = Config {
        token: cli.token,
        src: cli.src,
        dst: cli.dst,
        dry_run: cli.dryrun,
    };

    let rt = tokio::runtime::Runtime::new()?;
    let summary = rt.block_on(runner::run(&config))?;

    if summary.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
