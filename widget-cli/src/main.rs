//! Binary crate for the weather widget.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive settings prompt
//! - Terminal rendering of the widget panels

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
