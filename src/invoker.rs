//! One bounded agent invocation against the completion service.
//!
//! The invoker owns the tool-use loop: it sends the stage instructions
//! and input, executes any capability calls the model makes through the
//! stage's metered gateway, and returns the model's final text. The
//! `max_turns` budget caps the number of completion round trips; nothing
//! here is retried.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::client::{
    AIClient, ChatCompletionRequest, ChatMessage, FunctionDefinition, ToolDefinition, verbose_log,
};
use crate::config::ModelSettings;
use crate::error::{GatewayError, InvokeError};
use crate::gateway::{MeteredGateway, ToolDescriptor};

/// One stage invocation: instructions, input, a turn budget, and an
/// optional capability grant.
pub struct AgentCall<'a> {
    pub instructions: &'a str,
    pub input: &'a str,
    pub max_turns: u32,
    pub capabilities: Option<&'a MeteredGateway<'a>>,
}

#[async_trait]
pub trait AgentRunner: Send + Sync {
    async fn run_agent(&self, call: AgentCall<'_>) -> Result<String, InvokeError>;
}

pub struct AgentInvoker {
    client: AIClient,
    model: String,
    max_tokens: u32,
}

impl AgentInvoker {
    pub fn new(client: AIClient, models: &ModelSettings) -> Self {
        Self {
            client,
            model: models.research.clone(),
            max_tokens: models.max_tokens,
        }
    }
}

#[async_trait]
impl AgentRunner for AgentInvoker {
    async fn run_agent(&self, call: AgentCall<'_>) -> Result<String, InvokeError> {
        let tools: Option<Vec<ToolDefinition>> = call
            .capabilities
            .map(|caps| caps.tools().into_iter().map(tool_definition).collect::<Vec<_>>())
            .filter(|defs: &Vec<ToolDefinition>| !defs.is_empty());

        let mut messages = vec![
            ChatMessage::system(call.instructions),
            ChatMessage::user(call.input),
        ];

        for _ in 0..call.max_turns {
            let request = ChatCompletionRequest {
                model: self.model.clone(),
                messages: messages.clone(),
                max_tokens: Some(self.max_tokens),
                temperature: None,
                tools: tools.clone(),
            };

            let response = self.client.chat_completion(request).await?;
            let choice = response
                .choices
                .into_iter()
                .next()
                .ok_or(InvokeError::EmptyResponse)?;

            let message = choice.message;
            let tool_calls = message.tool_calls.clone().unwrap_or_default();

            let caps = match call.capabilities {
                Some(caps) if !tool_calls.is_empty() => caps,
                _ => {
                    let content = message.content.unwrap_or_default();
                    let text = content.trim();
                    if text.is_empty() {
                        return Err(InvokeError::EmptyResponse);
                    }
                    return Ok(text.to_string());
                }
            };

            messages.push(ChatMessage::assistant_with_calls(
                message.content.clone(),
                tool_calls.clone(),
            ));

            for tool_call in &tool_calls {
                let result_text = match parse_arguments(&tool_call.function.arguments) {
                    Ok(arguments) => {
                        match caps.call(&tool_call.function.name, arguments).await {
                            Ok(text) => text,
                            // Ceiling and grant violations are answered in-band so
                            // the model finishes from what it already has; only
                            // transport-level failures abort the invocation.
                            Err(
                                err @ (GatewayError::BudgetExhausted { .. }
                                | GatewayError::UnknownCapability { .. }),
                            ) => {
                                verbose_log("invoker", &err.to_string());
                                format!(
                                    "{err}. Produce your final answer from the information you already have."
                                )
                            }
                            Err(err) => return Err(InvokeError::Capability(err)),
                        }
                    }
                    Err(parse_err) => format!(
                        "Invalid arguments for '{}': {parse_err}. Correct the call or produce your final answer.",
                        tool_call.function.name
                    ),
                };

                messages.push(ChatMessage::tool_result(&tool_call.id, result_text));
            }
        }

        Err(InvokeError::TurnsExhausted(call.max_turns))
    }
}

fn parse_arguments(raw: &str) -> Result<Value, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(raw)
}

fn tool_definition(descriptor: &ToolDescriptor) -> ToolDefinition {
    ToolDefinition {
        kind: "function".to_string(),
        function: FunctionDefinition {
            name: descriptor.name.clone(),
            description: descriptor.description.clone(),
            parameters: descriptor.input_schema.clone(),
        },
    }
}
