use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(api_key) = env_string("OPENROUTER_API_KEY")? {
        builder = builder.with_llm(|llm| llm.api_key = api_key.clone());
    }

    if let Some(base_url) = env_string("SCOUT_LLM_BASE_URL")? {
        builder = builder.with_llm(|llm| llm.base_url = base_url.clone());
    }

    if let Some(timeout) = env_u64("SCOUT_TIMEOUT_SECS")? {
        builder = builder.with_llm(|llm| llm.timeout_secs = timeout);
    }

    if let Some(model) = env_string("SCOUT_MODEL")? {
        builder = builder.with_models(|models| models.research = model.clone());
    }

    if let Some(max_tokens) = env_u32("SCOUT_MAX_TOKENS")? {
        builder = builder.with_models(|models| models.max_tokens = max_tokens);
    }

    if let Some(api_key) = env_string("FIRECRAWL_API_KEY")? {
        builder = builder.with_gateway(|gateway| gateway.api_key = api_key.clone());
    }

    if let Some(endpoint) = env_string("SCOUT_GATEWAY_URL")? {
        builder = builder.with_gateway(|gateway| gateway.endpoint = endpoint.clone());
    }

    if let Some(timeout) = env_u64("SCOUT_CONNECT_TIMEOUT_SECS")? {
        builder = builder.with_gateway(|gateway| gateway.connect_timeout_secs = timeout);
    }

    if let Some(timeout) = env_u64("SCOUT_STAGE_TIMEOUT_SECS")? {
        builder = builder.with_pipeline(|pipeline| pipeline.stage_timeout_secs = timeout);
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_u32(key: &str) -> Result<Option<u32>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u32>()
            .with_context(|| format!("Failed to parse {key} as u32"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}
