//! countries - terminal front end for the country service.
//!
//! A thin host over `country-core`: it executes the core's requests with
//! ureq and prints the resulting view state.

mod cli;
mod commands;
mod output;
mod transport;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use country_core::CountryClient;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use commands::Context;
use transport::Transport;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let client = CountryClient::new(&cli.base_url).context("Invalid --base-url")?;
    let ctx = Context {
        client,
        transport: Transport::new(),
        json: cli.json,
    };

    match cli.command {
        Commands::List => commands::list(&ctx).await,
        Commands::Show(args) => commands::show(&ctx, args).await,
        Commands::Region(args) => commands::region(&ctx, args).await,
        Commands::Search(args) => commands::search(&ctx, args).await,
        Commands::Browse => commands::browse::run(&ctx).await,
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
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
