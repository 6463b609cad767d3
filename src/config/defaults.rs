use super::constants::*;
use super::types::{GatewaySettings, LlmSettings, ModelSettings, PipelineSettings};

pub fn default_user_agent() -> String {
    format!("scout/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_OPENROUTER_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            research: DEFAULT_RESEARCH_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_GATEWAY_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            stage_timeout_secs: DEFAULT_STAGE_TIMEOUT_SECS,
        }
    }
}
