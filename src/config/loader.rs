use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path};

use super::Config;
use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::{FileConfig, PersistedConfig};
use super::validation::validate;

impl Config {
    pub fn config_path() -> Result<std::path::PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".scout/config");
        Ok(path)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn load() -> Result<Self> {
        let config = Self::load_unchecked()?;
        validate(&config)?;
        Ok(config)
    }

    /// Load without requiring the secrets; used when persisting settings
    /// before the keys exist.
    pub fn load_unchecked() -> Result<Self> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            builder = Self::apply_file(builder, &path)?;
        }

        builder = apply_env_overrides(builder)?;
        builder.build()
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        let payload = PersistedConfig::from(self);
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize configuration to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let raw: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        Ok(raw.apply(builder))
    }
}

impl FileConfig {
    pub fn apply(self, mut builder: ConfigBuilder) -> ConfigBuilder {
        if let Some(llm) = self.llm {
            builder = builder.with_llm(|settings| {
                if let Some(api_key) = llm.api_key.clone() {
                    settings.api_key = api_key;
                }
                if let Some(base_url) = llm.base_url.clone() {
                    settings.base_url = base_url;
                }
                if let Some(timeout) = llm.timeout_secs {
                    settings.timeout_secs = timeout;
                }
                if let Some(user_agent) = llm.user_agent.clone() {
                    settings.user_agent = user_agent;
                }
            });
        }

        if let Some(models) = self.models {
            builder = builder.with_models(|settings| {
                if let Some(research) = models.research.clone() {
                    settings.research = research;
                }
                if let Some(max_tokens) = models.max_tokens {
                    settings.max_tokens = max_tokens;
                }
            });
        }

        if let Some(gateway) = self.gateway {
            builder = builder.with_gateway(|settings| {
                if let Some(api_key) = gateway.api_key.clone() {
                    settings.api_key = api_key;
                }
                if let Some(endpoint) = gateway.endpoint.clone() {
                    settings.endpoint = endpoint;
                }
                if let Some(timeout) = gateway.connect_timeout_secs {
                    settings.connect_timeout_secs = timeout;
                }
            });
        }

        if let Some(pipeline) = self.pipeline {
            builder = builder.with_pipeline(|settings| {
                if let Some(timeout) = pipeline.stage_timeout_secs {
                    settings.stage_timeout_secs = timeout;
                }
            });
        }

        builder
    }
}
