//! Persistent connection to the external search/scrape capability
//! provider, speaking JSON-RPC 2.0 over HTTP POST.
//!
//! The gateway is connected once per session (`connect` performs the
//! initialize handshake and tool discovery under a deadline) and is then
//! read-only: every pipeline stage that needs capabilities calls through
//! it, usually via the per-stage [`MeteredGateway`] wrapper.

mod meter;
mod protocol;

pub use meter::MeteredGateway;
pub use protocol::ToolDescriptor;

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};

use crate::client::verbose_log;
use crate::config::GatewaySettings;
use crate::error::GatewayError;
use protocol::{PROTOCOL_VERSION, RpcResponse, ToolCallResult, ToolsListResult};

const SESSION_HEADER: &str = "Mcp-Session-Id";

#[derive(Debug)]
pub struct ToolGateway {
    http: Client,
    endpoint: String,
    api_key: String,
    session_id: Option<String>,
    tools: Vec<ToolDescriptor>,
    next_id: AtomicI64,
}

impl ToolGateway {
    /// Connect to the gateway: initialize handshake, initialized
    /// notification, and tool discovery, all under one deadline.
    pub async fn connect(settings: &GatewaySettings) -> Result<Self, GatewayError> {
        let secs = settings.connect_timeout_secs;
        match tokio::time::timeout(Duration::from_secs(secs), Self::handshake(settings)).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::HandshakeTimeout { secs }),
        }
    }

    async fn handshake(settings: &GatewaySettings) -> Result<Self, GatewayError> {
        // No per-request timeout here: the handshake is bounded by the
        // connect deadline and later tool calls by the stage deadline.
        let http = Client::builder().build()?;
        let endpoint = settings.endpoint.clone();
        let api_key = settings.api_key.clone();

        let init_params = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {},
            "clientInfo": { "name": "scout", "version": env!("CARGO_PKG_VERSION") }
        });

        let (init_result, session_id) =
            match Self::post_rpc(&http, &endpoint, &api_key, None, 1, "initialize", init_params)
                .await
            {
                Ok(outcome) => outcome,
                Err(GatewayError::Transport(source)) => {
                    return Err(GatewayError::Connect { endpoint, source });
                }
                Err(other) => return Err(other),
            };

        if let Some(name) = init_result["serverInfo"]["name"].as_str() {
            verbose_log("gateway", &format!("connected to {name}"));
        }

        Self::post_notification(
            &http,
            &endpoint,
            &api_key,
            session_id.as_deref(),
            "notifications/initialized",
        )
        .await?;

        let (tools_result, _) = Self::post_rpc(
            &http,
            &endpoint,
            &api_key,
            session_id.as_deref(),
            2,
            "tools/list",
            json!({}),
        )
        .await?;

        let listed: ToolsListResult = serde_json::from_value(tools_result)
            .map_err(|err| GatewayError::Malformed(format!("tools/list result: {err}")))?;

        verbose_log("gateway", &format!("{} tool(s) advertised", listed.tools.len()));

        Ok(Self {
            http,
            endpoint,
            api_key,
            session_id,
            tools: listed.tools,
            next_id: AtomicI64::new(3),
        })
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn tool(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// Execute one capability call and return the joined text content.
    ///
    /// A result flagged `isError` is still returned as text: the calling
    /// agent sees the failure and can adapt. Only transport and JSON-RPC
    /// failures are hard errors.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<String, GatewayError> {
        verbose_log("gateway call", &format!("{name} {arguments}"));

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let params = json!({ "name": name, "arguments": arguments });
        let (result, _) = Self::post_rpc(
            &self.http,
            &self.endpoint,
            &self.api_key,
            self.session_id.as_deref(),
            id,
            "tools/call",
            params,
        )
        .await?;

        let parsed: ToolCallResult = serde_json::from_value(result)
            .map_err(|err| GatewayError::Malformed(format!("tools/call result: {err}")))?;

        if parsed.is_error {
            verbose_log("gateway call", &format!("{name} reported a tool error"));
        }

        Ok(parsed.joined_text())
    }

    async fn post_rpc(
        http: &Client,
        endpoint: &str,
        api_key: &str,
        session: Option<&str>,
        id: i64,
        method: &str,
        params: Value,
    ) -> Result<(Value, Option<String>), GatewayError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let mut request = http
            .post(endpoint)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json, text/event-stream")
            .json(&body);
        if let Some(session) = session {
            request = request.header(SESSION_HEADER, session);
        }

        let response = request.send().await?;
        let status = response.status();
        let session_id = response
            .headers()
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RpcResponse = response
            .json()
            .await
            .map_err(|err| GatewayError::Malformed(err.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(GatewayError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        let result = parsed
            .result
            .ok_or_else(|| GatewayError::Malformed(format!("{method} response has no result")))?;

        Ok((result, session_id))
    }

    async fn post_notification(
        http: &Client,
        endpoint: &str,
        api_key: &str,
        session: Option<&str>,
        method: &str,
    ) -> Result<(), GatewayError> {
        let body = json!({ "jsonrpc": "2.0", "method": method });

        let mut request = http
            .post(endpoint)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json, text/event-stream")
            .json(&body);
        if let Some(session) = session {
            request = request.header(SESSION_HEADER, session);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testutil;

#[cfg(test)]
mod tests;
