use serde_json::{Value, json};

use crate::models::{
    AnomalyAnalysisRequest, AnomalyAnalysisResponse, AnomalyList, ListAnomaliesRequest,
    ListPacketsRequest, ListScansRequest, LiveCaptureRequest, LiveCaptureResponse, PacketPage,
    ProtocolStatisticsList, ProtocolStatisticsRequest, ProtocolSummaryRequest,
    ProtocolSummaryResponse, ScanList, UploadPcapRequest, UploadPcapResponse,
};
use crate::utils::schema::tool_schema;

pub const ANALYZE_ANOMALY: &str = "analyze_anomaly";
pub const SUMMARIZE_PROTOCOL_BEHAVIOR: &str = "summarize_protocol_behavior";
pub const LIST_ANOMALIES: &str = "list_anomalies";
pub const GET_PROTOCOL_STATISTICS: &str = "get_protocol_statistics";
pub const LIST_PACKETS: &str = "list_packets";
pub const START_LIVE_CAPTURE: &str = "start_live_capture";
pub const UPLOAD_PCAP: &str = "upload_pcap";
pub const LIST_SCANS: &str = "list_scans";

// Represents a tool with its metadata and schemas
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    pub output_schema: Value,
}

impl ToolDefinition {
    /// Tool entry in the gateway's `tool_schema.json` format
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema,
            "outputSchema": self.output_schema
        })
    }
}

/// Definitions of every tool served by the Lambda, in routing order
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: ANALYZE_ANOMALY,
            description: "Analyze a detected wireless network security anomaly. Returns an expert analysis of the risk and impact, and an actionable mitigation recommendation for a network administrator.",
            input_schema: tool_schema::<AnomalyAnalysisRequest>(),
            output_schema: tool_schema::<AnomalyAnalysisResponse>(),
        },
        ToolDefinition {
            name: SUMMARIZE_PROTOCOL_BEHAVIOR,
            description: "Summarize the observed behavior of a network protocol (e.g. 802.11, DHCP, HTTP, DNS) from a summary of its captured packets.",
            input_schema: tool_schema::<ProtocolSummaryRequest>(),
            output_schema: tool_schema::<ProtocolSummaryResponse>(),
        },
        ToolDefinition {
            name: LIST_ANOMALIES,
            description: "List security anomalies identified during scans, optionally filtered by severity (Low, Medium, High, Critical).",
            input_schema: tool_schema::<ListAnomaliesRequest>(),
            output_schema: tool_schema::<AnomalyList>(),
        },
        ToolDefinition {
            name: GET_PROTOCOL_STATISTICS,
            description: "Get aggregated packet count, data volume and anomaly count for each protocol detected.",
            input_schema: tool_schema::<ProtocolStatisticsRequest>(),
            output_schema: tool_schema::<ProtocolStatisticsList>(),
        },
        ToolDefinition {
            name: LIST_PACKETS,
            description: "Browse captured packets ten per page, filtered by protocol and by a search term matched against source, destination and summary.",
            input_schema: tool_schema::<ListPacketsRequest>(),
            output_schema: tool_schema::<PacketPage>(),
        },
        ToolDefinition {
            name: START_LIVE_CAPTURE,
            description: "Run a live wireless capture on a capture agent interface (wlan0, wlan1, mon0) and return per-second packet counts and the capture log. Requires the admin, analyst or wireless-hunter role.",
            input_schema: tool_schema::<LiveCaptureRequest>(),
            output_schema: tool_schema::<LiveCaptureResponse>(),
        },
        ToolDefinition {
            name: UPLOAD_PCAP,
            description: "Register an uploaded .pcap or .pcapng capture file and queue it for analysis. Requires the admin, analyst or wireless-hunter role.",
            input_schema: tool_schema::<UploadPcapRequest>(),
            output_schema: tool_schema::<UploadPcapResponse>(),
        },
        ToolDefinition {
            name: LIST_SCANS,
            description: "List the caller's previously uploaded capture files and their analysis status.",
            input_schema: tool_schema::<ListScansRequest>(),
            output_schema: tool_schema::<ScanList>(),
        },
    ]
}
