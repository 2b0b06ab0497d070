//! scorta-cli: terminal client for the Scorta inventory store.

mod args;
mod client;
mod commands;
mod render;
mod state;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use args::Cli;
use client::{CliError, Remote};

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_tracing();

    let cli = Cli::parse();
    let remote = Remote::new(&cli.endpoint)?;
    commands::dispatch(&remote, cli.command).await
}
