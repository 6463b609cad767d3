use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub models: ModelSettings,
    pub gateway: GatewaySettings,
    pub pipeline: PipelineSettings,
}

/// Connection settings for the OpenAI-compatible completion service.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub research: String,
    pub max_tokens: u32,
}

/// Connection settings for the search/scrape capability gateway.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub api_key: String,
    pub endpoint: String,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub stage_timeout_secs: u64,
}

// File configuration types
#[derive(Debug, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub llm: Option<FileLlmSettings>,
    #[serde(default)]
    pub models: Option<FileModelSettings>,
    #[serde(default)]
    pub gateway: Option<FileGatewaySettings>,
    #[serde(default)]
    pub pipeline: Option<FilePipelineSettings>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileLlmSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileModelSettings {
    pub research: Option<String>,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileGatewaySettings {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FilePipelineSettings {
    pub stage_timeout_secs: Option<u64>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub llm: PersistedLlm<'a>,
    pub models: PersistedModels<'a>,
    pub gateway: PersistedGateway<'a>,
    pub pipeline: PersistedPipeline,
}

#[derive(Serialize)]
pub(super) struct PersistedLlm<'a> {
    pub api_key: &'a str,
    pub base_url: &'a str,
    pub timeout_secs: u64,
    pub user_agent: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedModels<'a> {
    pub research: &'a str,
    pub max_tokens: u32,
}

#[derive(Serialize)]
pub(super) struct PersistedGateway<'a> {
    pub api_key: &'a str,
    pub endpoint: &'a str,
    pub connect_timeout_secs: u64,
}

#[derive(Serialize)]
pub(super) struct PersistedPipeline {
    pub stage_timeout_secs: u64,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            llm: PersistedLlm {
                api_key: &config.llm.api_key,
                base_url: &config.llm.base_url,
                timeout_secs: config.llm.timeout_secs,
                user_agent: &config.llm.user_agent,
            },
            models: PersistedModels {
                research: &config.models.research,
                max_tokens: config.models.max_tokens,
            },
            gateway: PersistedGateway {
                api_key: &config.gateway.api_key,
                endpoint: &config.gateway.endpoint,
                connect_timeout_secs: config.gateway.connect_timeout_secs,
            },
            pipeline: PersistedPipeline {
                stage_timeout_secs: config.pipeline.stage_timeout_secs,
            },
        }
    }
}
