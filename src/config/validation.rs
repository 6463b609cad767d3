use anyhow::{Result, anyhow};

use super::types::Config;

/// Both secrets are required at startup; a missing one is fatal.
pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(anyhow!(
            "OpenRouter API key not found. Set OPENROUTER_API_KEY or add it to {}",
            Config::config_path()?.display()
        ));
    }

    if config.gateway.api_key.trim().is_empty() {
        return Err(anyhow!(
            "Firecrawl API key not found. Set FIRECRAWL_API_KEY or add it to {}",
            Config::config_path()?.display()
        ));
    }

    Ok(())
}
