use anyhow::Result;
use clap::Parser;

use super::commands;

/// Entry point for the `scout` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "scout",
    about = "Conversational research assistant",
    version,
    long_about = None
)]
pub struct Cli {
    /// Enable verbose logging of completion and gateway traffic
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Set the completion-service API key and save it
    #[arg(long)]
    pub api_key: Option<String>,

    /// Set the capability-gateway API key and save it
    #[arg(long)]
    pub gateway_key: Option<String>,

    /// Set the capability-gateway endpoint URL and save it
    #[arg(long)]
    pub gateway_url: Option<String>,

    /// Set the research model and save it
    #[arg(long)]
    pub model: Option<String>,

    /// Set the completion request timeout in seconds and save it
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Set the max completion tokens and save it
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Research query; leave empty for an interactive session
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        commands::run(self).await
    }
}
