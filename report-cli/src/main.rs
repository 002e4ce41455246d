//! Binary crate for the `weather-report` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Reading credentials and location from the environment
//! - Emitting the rendered report to standard output

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
