use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::error::AppError;
use crate::models::validation::{Validate, require_non_empty};

/// Request for a behavioral summary of one protocol
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolSummaryRequest {
    #[schemars(description = "The name of the protocol to summarize (e.g., 802.11, DHCP, HTTP).")]
    pub protocol: String,
    #[schemars(description = "A summary of the network packets for the specified protocol.")]
    pub packet_summary: String,
}

impl Validate for ProtocolSummaryRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_empty("protocol", &self.protocol)?;
        require_non_empty("packetSummary", &self.packet_summary)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProtocolSummaryResponse {
    #[schemars(description = "An AI-generated summary of the protocol behavior.")]
    pub summary: String,
}

impl Validate for ProtocolSummaryResponse {
    fn validate(&self) -> Result<(), AppError> {
        require_non_empty("summary", &self.summary)
    }
}
