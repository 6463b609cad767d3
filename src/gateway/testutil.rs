//! Canned gateway fixtures shared by gateway and invoker tests.

use httpmock::prelude::*;
use serde_json::json;

use crate::config::GatewaySettings;

use super::ToolGateway;

pub(crate) const SEARCH_RESULT: &str = "Sources found: https://example.com/remote-work (productivity studies), https://example.com/surveys (workplace surveys)";
pub(crate) const SCRAPE_RESULT: &str =
    "Scraped article body: productivity rose in distributed teams.";

pub(crate) fn settings_for(server: &MockServer) -> GatewaySettings {
    GatewaySettings {
        api_key: "crawl-key".to_string(),
        endpoint: format!("{}/mcp", server.base_url()),
        connect_timeout_secs: 5,
    }
}

pub(crate) struct GatewayMocks<'a> {
    pub search: httpmock::Mock<'a>,
    pub scrape: httpmock::Mock<'a>,
}

/// Mount the initialize / initialized / tools/list handshake plus
/// `tools/call` responders with canned search and scrape output.
pub(crate) async fn mount_gateway(server: &MockServer) -> GatewayMocks<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/mcp")
                .body_contains(r#""method":"initialize""#);
            then.status(200)
                .header("Mcp-Session-Id", "sess-123")
                .json_body(json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": {
                        "protocolVersion": "2024-11-05",
                        "capabilities": { "tools": {} },
                        "serverInfo": { "name": "firecrawl-mcp", "version": "1.0.0" }
                    }
                }));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/mcp")
                .body_contains("notifications/initialized");
            then.status(202);
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/mcp")
                .body_contains(r#""method":"tools/list""#);
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 2,
                "result": {
                    "tools": [
                        {
                            "name": "firecrawl_search",
                            "description": "Search the web",
                            "inputSchema": {
                                "type": "object",
                                "properties": { "query": { "type": "string" } },
                                "required": ["query"]
                            }
                        },
                        {
                            "name": "firecrawl_scrape",
                            "description": "Scrape a URL",
                            "inputSchema": {
                                "type": "object",
                                "properties": { "url": { "type": "string" } },
                                "required": ["url"]
                            }
                        }
                    ]
                }
            }));
        })
        .await;

    let search = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/mcp")
                .body_contains(r#""name":"firecrawl_search""#);
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 3,
                "result": {
                    "content": [ { "type": "text", "text": SEARCH_RESULT } ],
                    "isError": false
                }
            }));
        })
        .await;

    let scrape = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/mcp")
                .body_contains(r#""name":"firecrawl_scrape""#);
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 3,
                "result": {
                    "content": [ { "type": "text", "text": SCRAPE_RESULT } ],
                    "isError": false
                }
            }));
        })
        .await;

    GatewayMocks { search, scrape }
}

pub(crate) async fn connected_gateway(server: &MockServer) -> ToolGateway {
    mount_gateway(server).await;
    ToolGateway::connect(&settings_for(server))
        .await
        .expect("canned gateway should connect")
}

/// A gateway that never connected; used where tests need a session with
/// a gateway object but no live provider behind it.
pub(crate) fn offline_gateway() -> ToolGateway {
    ToolGateway {
        http: reqwest::Client::new(),
        endpoint: "http://localhost:0/mcp".to_string(),
        api_key: String::new(),
        session_id: None,
        tools: Vec::new(),
        next_id: std::sync::atomic::AtomicI64::new(1),
    }
}
