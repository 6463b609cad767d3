use httpmock::prelude::*;
use serde_json::json;

use crate::error::GatewayError;

use super::testutil::{connected_gateway, mount_gateway, offline_gateway, settings_for};
use super::{MeteredGateway, ToolGateway};

#[tokio::test]
async fn connect_performs_handshake_and_discovers_tools() {
    let server = MockServer::start_async().await;
    let gateway = connected_gateway(&server).await;

    let names: Vec<&str> = gateway.tools().iter().map(|tool| tool.name.as_str()).collect();
    assert_eq!(names, vec!["firecrawl_search", "firecrawl_scrape"]);
    assert_eq!(gateway.session_id.as_deref(), Some("sess-123"));
}

#[tokio::test]
async fn call_echoes_session_id_and_joins_text_content() {
    let server = MockServer::start_async().await;
    mount_gateway(&server).await;

    let call_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/mcp")
                .header("Mcp-Session-Id", "sess-123")
                .body_contains(r#""name":"firecrawl_map""#);
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 3,
                "result": {
                    "content": [
                        { "type": "text", "text": "first" },
                        { "type": "text", "text": "second" }
                    ]
                }
            }));
        })
        .await;

    let gateway = ToolGateway::connect(&settings_for(&server)).await.unwrap();
    let text = gateway
        .call("firecrawl_map", json!({ "url": "https://example.com" }))
        .await
        .unwrap();

    assert_eq!(text, "first\nsecond");
    call_mock.assert_async().await;
}

#[tokio::test]
async fn call_surfaces_rpc_errors() {
    let server = MockServer::start_async().await;
    mount_gateway(&server).await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/mcp")
                .body_contains(r#""name":"firecrawl_broken""#);
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 3,
                "error": { "code": -32602, "message": "invalid params" }
            }));
        })
        .await;

    let gateway = ToolGateway::connect(&settings_for(&server)).await.unwrap();
    let err = gateway
        .call("firecrawl_broken", json!({}))
        .await
        .unwrap_err();

    match err {
        GatewayError::Rpc { code, message } => {
            assert_eq!(code, -32602);
            assert_eq!(message, "invalid params");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn connect_fails_on_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/mcp");
            then.status(500).body("boom");
        })
        .await;

    let err = ToolGateway::connect(&settings_for(&server)).await.unwrap_err();
    match err {
        GatewayError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn connect_times_out_when_gateway_hangs() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/mcp");
            then.status(200)
                .delay(std::time::Duration::from_secs(5))
                .json_body(json!({ "jsonrpc": "2.0", "id": 1, "result": {} }));
        })
        .await;

    let mut settings = settings_for(&server);
    settings.connect_timeout_secs = 0;

    let err = ToolGateway::connect(&settings).await.unwrap_err();
    match err {
        GatewayError::HandshakeTimeout { secs } => assert_eq!(secs, 0),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn meter_enforces_call_ceilings() {
    let server = MockServer::start_async().await;
    let gateway = connected_gateway(&server).await;

    let metered = MeteredGateway::new(&gateway, &[("firecrawl_search", 1)]);

    metered
        .call("firecrawl_search", json!({ "query": "rust" }))
        .await
        .unwrap();

    let err = metered
        .call("firecrawl_search", json!({ "query": "rust again" }))
        .await
        .unwrap_err();

    match err {
        GatewayError::BudgetExhausted { name, limit } => {
            assert_eq!(name, "firecrawl_search");
            assert_eq!(limit, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn meter_rejects_ungranted_capabilities() {
    let server = MockServer::start_async().await;
    let gateway = connected_gateway(&server).await;

    let metered = MeteredGateway::new(&gateway, &[("firecrawl_search", 1)]);
    let err = metered
        .call("firecrawl_scrape", json!({ "url": "https://example.com" }))
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::UnknownCapability { .. }));
}

#[test]
fn meter_drops_grants_the_provider_does_not_advertise() {
    let gateway = offline_gateway();
    let metered = MeteredGateway::new(&gateway, &[("firecrawl_search", 1)]);
    assert!(metered.tools().is_empty());
}
