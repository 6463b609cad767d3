//! JSON-RPC 2.0 wire types for the capability gateway.

use serde::Deserialize;
use serde_json::{Value, json};

/// Protocol revision sent during the initialize handshake.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcError {
    pub code: i64,
    pub message: String,
}

/// A capability advertised by the gateway via `tools/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "inputSchema", default = "empty_schema")]
    pub input_schema: Value,
}

fn empty_schema() -> Value {
    json!({ "type": "object" })
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToolsListResult {
    pub tools: Vec<ToolDescriptor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToolCallResult {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError", default)]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Concatenate the text blocks of a tool result, skipping non-text
    /// content (images, resources).
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ContentBlock {
    Text { text: String },
    Other(Value),
}
