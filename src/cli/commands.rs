use anyhow::Result;

use crate::client::set_verbose_logging;
use crate::config::Config;

use super::args::Cli;
use super::session;

pub(crate) async fn run(cli: Cli) -> Result<()> {
    set_verbose_logging(cli.verbose);

    if has_config_updates(&cli) {
        return apply_config_updates(&cli);
    }

    let config = Config::load()?;
    let query = cli.query.join(" ").trim().to_owned();

    if query.is_empty() {
        session::run_interactive(&config).await
    } else {
        session::run_once(&config, &query).await
    }
}

fn has_config_updates(cli: &Cli) -> bool {
    cli.api_key.is_some()
        || cli.gateway_key.is_some()
        || cli.gateway_url.is_some()
        || cli.model.is_some()
        || cli.timeout.is_some()
        || cli.max_tokens.is_some()
}

fn apply_config_updates(cli: &Cli) -> Result<()> {
    let mut config = Config::load_unchecked()?;

    if let Some(api_key) = &cli.api_key {
        config.llm.api_key = api_key.clone();
        println!("✅ Completion API key updated");
    }
    if let Some(gateway_key) = &cli.gateway_key {
        config.gateway.api_key = gateway_key.clone();
        println!("✅ Gateway API key updated");
    }
    if let Some(gateway_url) = &cli.gateway_url {
        config.gateway.endpoint = gateway_url.clone();
        println!("✅ Gateway endpoint set to {gateway_url}");
    }
    if let Some(model) = &cli.model {
        config.models.research = model.clone();
        println!("✅ Research model set to {model}");
    }
    if let Some(timeout) = cli.timeout {
        config.llm.timeout_secs = timeout;
        println!("✅ Timeout set to {timeout}s");
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.models.max_tokens = max_tokens;
        println!("✅ Max tokens set to {max_tokens}");
    }

    config.save()?;
    println!("Configuration saved to {}", Config::config_path()?.display());
    Ok(())
}
