use super::types::{Config, GatewaySettings, LlmSettings, ModelSettings, PipelineSettings};
use anyhow::Result;

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) llm: LlmSettings,
    pub(super) models: ModelSettings,
    pub(super) gateway: GatewaySettings,
    pub(super) pipeline: PipelineSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            llm: LlmSettings::default(),
            models: ModelSettings::default(),
            gateway: GatewaySettings::default(),
            pipeline: PipelineSettings::default(),
        }
    }

    pub fn with_llm<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut LlmSettings),
    {
        update(&mut self.llm);
        self
    }

    pub fn with_models<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut ModelSettings),
    {
        update(&mut self.models);
        self
    }

    pub fn with_gateway<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut GatewaySettings),
    {
        update(&mut self.gateway);
        self
    }

    pub fn with_pipeline<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut PipelineSettings),
    {
        update(&mut self.pipeline);
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            llm: self.llm,
            models: self.models,
            gateway: self.gateway,
            pipeline: self.pipeline,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
