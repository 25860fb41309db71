use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::error::AppError;
use crate::models::scanner::{Anomaly, Packet, Protocol, ProtocolStatistics, Severity};
use crate::models::validation::Validate;

/// Protocol filter value that matches every packet
pub const ALL_PROTOCOLS: &str = "all";

/// Request for one page of captured traffic
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPacketsRequest {
    #[serde(default)]
    #[schemars(description = "Protocol to keep (\"all\", \"802.11\", \"ARP\", \"DHCP\", \"HTTP\", \"DNS\", \"TCP\" or \"UDP\"). Defaults to all.")]
    pub protocol: Option<String>,
    #[serde(default)]
    #[schemars(description = "Substring matched against source, destination and summary")]
    pub search: Option<String>,
    #[serde(default)]
    #[schemars(description = "1-based page number. Defaults to 1.")]
    pub page: Option<usize>,
    #[serde(default)]
    #[schemars(description = "Seed for a reproducible packet set")]
    pub seed: Option<u64>,
}

impl ListPacketsRequest {
    /// Resolved protocol filter; `None` keeps every protocol
    #[must_use]
    pub fn protocol_filter(&self) -> Option<Protocol> {
        self.protocol
            .as_deref()
            .filter(|p| !p.trim().eq_ignore_ascii_case(ALL_PROTOCOLS))
            .and_then(Protocol::from_name)
    }
}

impl Validate for ListPacketsRequest {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(protocol) = self.protocol.as_deref()
            && !protocol.trim().eq_ignore_ascii_case(ALL_PROTOCOLS)
            && Protocol::from_name(protocol).is_none()
        {
            return Err(AppError::Validation(format!("unknown protocol: {protocol}")));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PacketPage {
    pub packets: Vec<Packet>,
    #[schemars(description = "Current page, 0 when nothing matched")]
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListAnomaliesRequest {
    #[serde(default)]
    #[schemars(description = "Only return anomalies with this severity")]
    pub severity: Option<Severity>,
}

impl Validate for ListAnomaliesRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnomalyList {
    pub anomalies: Vec<Anomaly>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolStatisticsRequest {
    #[serde(default)]
    #[schemars(description = "Only return statistics for this protocol")]
    pub protocol: Option<Protocol>,
}

impl Validate for ProtocolStatisticsRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProtocolStatisticsList {
    pub protocols: Vec<ProtocolStatistics>,
}
