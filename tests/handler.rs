// Handler tests
#![allow(clippy::unwrap_used)]

use serde_json::json;
use wireless_scanner_mcp::handler::route_tool;
use wireless_scanner_mcp::tools::definitions::tool_definitions;

#[tokio::test]
async fn test_route_tool_unknown() {
    let event_payload = json!({"name": "unknown_tool"});
    let result = route_tool("unknown_tool", event_payload).await;
    assert!(result.is_err(), "Expected error for unknown tool");

    if let Err(err) = result {
        assert_eq!(err.error_type, "UnknownTool");
        assert!(err.error_message.contains("Unknown tool: unknown_tool"));
    }
}

#[tokio::test]
async fn test_analyze_anomaly_missing_field() {
    // packetSample is missing; must fail before any generation request
    let mcp_payload = json!({
        "method": "tools/call",
        "params": {
            "arguments": {
                "type": "Rogue AP",
                "severity": "Critical",
                "description": "Unauthorized AP detected"
            }
        }
    });

    let result = route_tool("analyze_anomaly", mcp_payload).await;
    let err = result.unwrap_err();
    assert_eq!(err.error_type, "InvalidInput");
    assert!(err.error_message.contains("packetSample"));
}

#[tokio::test]
async fn test_analyze_anomaly_wrong_type() {
    let mcp_payload = json!({
        "method": "tools/call",
        "params": {
            "arguments": {
                "type": "Rogue AP",
                "severity": 4,
                "description": "Unauthorized AP detected",
                "packetSample": "Frame 1"
            }
        }
    });

    let err = route_tool("analyze_anomaly", mcp_payload).await.unwrap_err();
    assert_eq!(err.error_type, "InvalidInput");
}

#[tokio::test]
async fn test_summarize_protocol_empty_field() {
    let mcp_payload = json!({
        "method": "tools/call",
        "params": {
            "arguments": {
                "protocol": "DNS",
                "packetSummary": "   "
            }
        }
    });

    let err = route_tool("summarize_protocol_behavior", mcp_payload)
        .await
        .unwrap_err();
    assert_eq!(err.error_type, "InvalidInput");
    assert!(err.error_message.contains("packetSummary"));
}

#[tokio::test]
async fn test_list_packets_routing() {
    let mcp_payload = json!({
        "method": "tools/call",
        "params": {
            "arguments": {
                "protocol": "DNS",
                "page": 2,
                "seed": 11
            }
        }
    });

    let response = route_tool("list_packets", mcp_payload).await.unwrap();
    assert_eq!(response["page"], 2);
    assert_eq!(response["totalMatches"], 21);
    assert_eq!(response["totalPages"], 3);
    let packets = response["packets"].as_array().unwrap();
    assert_eq!(packets.len(), 10);
    assert!(packets.iter().all(|p| p["protocol"] == "DNS"));
}

#[tokio::test]
async fn test_list_packets_unknown_protocol() {
    let err = route_tool("list_packets", json!({"protocol": "ICMP"}))
        .await
        .unwrap_err();
    assert_eq!(err.error_type, "InvalidInput");
}

#[tokio::test]
async fn test_arguments_without_mcp_envelope() {
    let response = route_tool("list_anomalies", json!({"severity": "High"}))
        .await
        .unwrap();
    let anomalies = response["anomalies"].as_array().unwrap();
    assert_eq!(anomalies.len(), 2);
}

#[tokio::test]
async fn test_live_capture_requires_session() {
    let mcp_payload = json!({
        "method": "tools/call",
        "params": {
            "arguments": {
                "interface": "wlan0"
            }
        }
    });

    let err = route_tool("start_live_capture", mcp_payload).await.unwrap_err();
    assert_eq!(err.error_type, "PermissionDenied");
}

#[tokio::test]
async fn test_upload_pcap_with_session() {
    let mcp_payload = json!({
        "method": "tools/call",
        "params": {
            "arguments": {
                "fileName": "guest-wifi-traffic.pcapng",
                "session": {
                    "userId": "user-123",
                    "userName": "Wireless Hunter",
                    "roles": ["wireless-hunter"]
                }
            }
        }
    });

    let response = route_tool("upload_pcap", mcp_payload).await.unwrap();
    assert_eq!(response["scan"]["status"], "queued");
    assert_eq!(response["scan"]["mode"], "upload");
    assert_eq!(response["scan"]["userId"], "user-123");
    assert_eq!(response["scan"]["fileName"], "guest-wifi-traffic.pcapng");
}

#[tokio::test]
async fn test_every_defined_tool_is_routed() {
    for tool in tool_definitions() {
        // Empty arguments may be rejected, but never as an unknown tool
        if let Err(err) = route_tool(tool.name, json!({})).await {
            assert_ne!(err.error_type, "UnknownTool", "{} is not routed", tool.name);
        }
    }
}
