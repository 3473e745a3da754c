//! weft - CLI tool for exploring a content delivery space.
//!
//! A thin wrapper over `weft-http` and `weft-blog`, intended for inspecting
//! schemas, raw pages and resolved entries.

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

    init_logging(cli.verbose, cli.json_logs);

    let client = cli.connection.client()?;
    match cli.command {
        Commands::Schema(args) => commands::schema::run(args, &client).await,
        Commands::Locales(args) => commands::locales::run(args, &client).await,
        Commands::Entries(args) => commands::entries::run(args, &client).await,
        Commands::Posts(args) => commands::posts::run(args, &client).await,
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

    // Logs go to stderr so command output stays pipeable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
