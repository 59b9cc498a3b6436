//! kennel - CLI tool for poking at a dog-service REST API.
//!
//! This is a thin wrapper over the kennel client crates, intended for manual
//! exploration and debugging against a dog service.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::List(args) => commands::list::run(&cli.url, args).await,
        Commands::Get(args) => commands::get::run(&cli.url, args).await,
        Commands::Create(args) => commands::create::run(&cli.url, args).await,
        Commands::Update(args) => commands::update::run(&cli.url, args).await,
        Commands::Delete(args) => commands::delete::run(&cli.url, args).await,
        Commands::Demo(args) => commands::demo::run(&cli.url, args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
