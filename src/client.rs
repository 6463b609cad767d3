use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::LlmSettings;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose_logging(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Operator-visibility logging, gated behind `--verbose`.
pub(crate) fn verbose_log(label: &str, payload: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[{label}] {payload}").dimmed());
    }
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct AIClient {
    http: Client,
    base_url: String,
    api_key: String,
    user_agent: String,
}

impl AIClient {
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        Self::with_base_url(settings, settings.base_url.clone())
    }

    pub fn with_base_url(settings: &LlmSettings, base_url: impl Into<String>) -> Result<Self> {
        let timeout = Duration::from_secs(settings.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            user_agent: settings.user_agent.clone(),
        })
    }

    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        if let Ok(body) = serde_json::to_string(&request) {
            verbose_log("llm request", &body);
        }

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("User-Agent", &self.user_agent)
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", "https://github.com/scout-cli/scout")
            .header("X-Title", "scout CLI")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to chat completions endpoint")?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let parsed = response
                    .json::<ChatCompletionResponse>()
                    .await
                    .context("Failed to parse chat completion response JSON")?;
                verbose_log("llm response", &format!("{} choice(s)", parsed.choices.len()));
                Ok(parsed)
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!(
                    "Too many requests. Please wait before trying again. (API response: {})",
                    error_text
                ))
            }
            reqwest::StatusCode::UNAUTHORIZED => Err(anyhow!(
                "Invalid API key. Please check your API key configuration."
            )),
            reqwest::StatusCode::BAD_REQUEST => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!("Invalid request: {}", error_text))
            }
            reqwest::StatusCode::INTERNAL_SERVER_ERROR | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
                Err(anyhow!("Service is temporarily unavailable. Please try again later."))
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow!("API error (status {}): {}", status, error_text))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatMessageRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatMessageRole::System,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatMessageRole::User,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn assistant_with_calls(content: Option<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            role: ChatMessageRole::Assistant,
            content,
            tool_calls: Some(tool_calls),
            tool_call_id: None,
        }
    }

    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: ChatMessageRole::Tool,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    System,
    User,
    Assistant,
    Tool,
}

/// A capability advertised to the model, OpenAI function-calling shape.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}
