mod cli;
mod client;
mod config;
mod error;
mod gateway;
mod invoker;
mod pipeline;
mod session;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.run().await
}
