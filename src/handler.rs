use anyhow::Result;
use lambda_runtime::tracing::{debug, error, info};
use lambda_runtime::{Context, Diagnostic, LambdaEvent};
use serde_json::Value;

use crate::models::error::AppError;
use crate::models::validation::parse_validated;
use crate::models::{
    AnomalyAnalysisRequest, ListAnomaliesRequest, ListPacketsRequest, ListScansRequest,
    LiveCaptureRequest, ProtocolStatisticsRequest, ProtocolSummaryRequest, UploadPcapRequest,
};
use crate::tools::definitions::{
    ANALYZE_ANOMALY, GET_PROTOCOL_STATISTICS, LIST_ANOMALIES, LIST_PACKETS, LIST_SCANS,
    START_LIVE_CAPTURE, SUMMARIZE_PROTOCOL_BEHAVIOR, UPLOAD_PCAP,
};
use crate::tools::{
    analyze_anomaly, get_protocol_statistics, list_anomalies, list_packets, list_scans,
    start_live_capture, summarize_protocol_behavior, upload_pcap,
};
use crate::utils::strip_gateway_prefix;

/// Extracts tool name from Lambda context or MCP event payload.
///
/// The gateway passes the tool name in
/// `context.client_context.custom[bedrockAgentCoreToolName]`; direct MCP
/// callers send a `tools/call` payload instead.
pub fn extract_tool_name(event_payload: &Value, context: &Context) -> String {
    debug!(
        "Extracting tool name from context: {:?}",
        context.client_context
    );

    if let Some(tool_name) = context
        .client_context
        .as_ref()
        .and_then(|cc| cc.custom.get("bedrockAgentCoreToolName"))
        .map(String::as_str)
    {
        debug!("Found tool name in context: {}", tool_name);
        return strip_gateway_prefix(tool_name);
    }

    if let Some(method) = event_payload.get("method").and_then(|m| m.as_str())
        && method == "tools/call"
        && let Some(params) = event_payload.get("params")
        && let Some(name) = params.get("name").and_then(|n| n.as_str())
    {
        debug!("Found tool name in MCP payload: {}", name);
        return strip_gateway_prefix(name);
    }

    debug!("Tool name not found, using unknown");
    "unknown".to_string()
}

fn diagnostic(error: &AppError) -> Diagnostic {
    Diagnostic {
        error_type: error.error_type().to_string(),
        error_message: error.to_string(),
    }
}

/// Routes a tool request to the appropriate handler.
///
/// # Errors
///
/// Returns a `Diagnostic` error if the tool is unknown, the arguments are
/// invalid, or tool execution fails.
pub async fn route_tool(tool_name: &str, event_payload: Value) -> Result<Value, Diagnostic> {
    debug!(tool_name = %tool_name, "Entering route_tool function");
    debug!(
        "Routing tool: {} with payload: {:?}",
        tool_name, event_payload
    );

    // Extract arguments from MCP request structure if present
    let tool_args = event_payload
        .get("params")
        .and_then(|params| params.get("arguments"))
        .unwrap_or(&event_payload)
        .clone();

    macro_rules! handle_tool {
        (@respond $result:expr) => {{
            let response = $result.map_err(|e: AppError| {
                error!(error = %e, error_type = e.error_type(), "Tool execution failed");
                diagnostic(&e)
            })?;

            serde_json::to_value(response).map_err(|e| {
                error!(error = %e, "Failed to serialize response");
                Diagnostic {
                    error_type: "SerializationError".to_string(),
                    error_message: format!("Failed to serialize response: {e}"),
                }
            })
        }};
        (@parse $request_type:ty, $tool_args:expr) => {{
            parse_validated::<$request_type>($tool_args).map_err(|e| {
                error!(error = %e, "Failed to parse request");
                diagnostic(&e)
            })?
        }};
        (async $tool_fn:expr, $request_type:ty, $tool_args:expr) => {{
            let request = handle_tool!(@parse $request_type, $tool_args);
            handle_tool!(@respond $tool_fn(request).await)
        }};
        ($tool_fn:expr, $request_type:ty, $tool_args:expr) => {{
            let request = handle_tool!(@parse $request_type, $tool_args);
            handle_tool!(@respond $tool_fn(request))
        }};
    }

    match tool_name {
        ANALYZE_ANOMALY => {
            handle_tool!(async analyze_anomaly, AnomalyAnalysisRequest, tool_args)
        }
        SUMMARIZE_PROTOCOL_BEHAVIOR => handle_tool!(
            async summarize_protocol_behavior,
            ProtocolSummaryRequest,
            tool_args
        ),
        LIST_ANOMALIES => handle_tool!(list_anomalies, ListAnomaliesRequest, tool_args),
        GET_PROTOCOL_STATISTICS => {
            handle_tool!(get_protocol_statistics, ProtocolStatisticsRequest, tool_args)
        }
        LIST_PACKETS => handle_tool!(list_packets, ListPacketsRequest, tool_args),
        START_LIVE_CAPTURE => handle_tool!(start_live_capture, LiveCaptureRequest, tool_args),
        UPLOAD_PCAP => handle_tool!(upload_pcap, UploadPcapRequest, tool_args),
        LIST_SCANS => handle_tool!(list_scans, ListScansRequest, tool_args),
        _ => {
            error!(tool_name = %tool_name, "Unknown tool requested");
            Err(Diagnostic {
                error_type: "UnknownTool".to_string(),
                error_message: format!("Unknown tool: {tool_name}"),
            })
        }
    }
}

/// Lambda event handler. Routes to tools based on `client_context.custom` or the
/// MCP payload. Logs full event only when `RUST_LOG=debug/trace`.
///
/// # Errors
///
/// Returns a `Diagnostic` error with one of the following types:
///
/// - `InvalidInput`: arguments are missing, mistyped or fail validation
/// - `GenerationError`: the generation service failed or returned bad output
/// - `PermissionDenied`: the caller session lacks a required role
/// - `ToolError`: any other tool failure
/// - `SerializationError`: the tool response could not be serialized
/// - `UnknownTool`: the requested tool name was not recognized
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Diagnostic> {
    let (event_payload, context) = event.into_parts();

    let tool_name = extract_tool_name(&event_payload, &context);

    // API Gateway events carry the MCP request as a JSON string in `body`
    let payload_for_tool =
        if let Some(body_str) = event_payload.get("body").and_then(|b| b.as_str()) {
            serde_json::from_str(body_str).unwrap_or(event_payload)
        } else {
            event_payload
        };

    let tool_name = if tool_name == "unknown" {
        extract_tool_name(&payload_for_tool, &context)
    } else {
        tool_name
    };

    info!(tool_name = %tool_name, request_id = %context.request_id, "Invoking tool");

    route_tool(&tool_name, payload_for_tool).await
}
