//! Records served by the simulated scanner tools.
//!
//! None of these are derived from real traffic; they mirror the shapes the
//! dashboard renders.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocols the scanner reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Protocol {
    #[serde(rename = "802.11")]
    Ieee80211,
    #[serde(rename = "ARP")]
    Arp,
    #[serde(rename = "DHCP")]
    Dhcp,
    #[serde(rename = "HTTP")]
    Http,
    #[serde(rename = "DNS")]
    Dns,
    #[serde(rename = "TCP")]
    Tcp,
    #[serde(rename = "UDP")]
    Udp,
}

impl Protocol {
    pub const ALL: [Self; 7] = [
        Self::Ieee80211,
        Self::Arp,
        Self::Dhcp,
        Self::Http,
        Self::Dns,
        Self::Tcp,
        Self::Udp,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ieee80211 => "802.11",
            Self::Arp => "ARP",
            Self::Dhcp => "DHCP",
            Self::Http => "HTTP",
            Self::Dns => "DNS",
            Self::Tcp => "TCP",
            Self::Udp => "UDP",
        }
    }

    /// Looks up a protocol by its display name (case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single captured packet as listed in the traffic explorer
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Packet {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub protocol: Protocol,
    pub source: String,
    pub destination: String,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AnomalyType {
    #[serde(rename = "DHCP Flood")]
    DhcpFlood,
    #[serde(rename = "Spoofed MAC")]
    SpoofedMac,
    #[serde(rename = "Beacon Flood")]
    BeaconFlood,
    #[serde(rename = "Rogue AP")]
    RogueAp,
}

impl AnomalyType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DhcpFlood => "DHCP Flood",
            Self::SpoofedMac => "Spoofed MAC",
            Self::BeaconFlood => "Beacon Flood",
            Self::RogueAp => "Rogue AP",
        }
    }
}

impl fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anomaly severity, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hypothesized security event shown in the anomaly review table
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub id: String,
    #[serde(rename = "type")]
    pub anomaly_type: AnomalyType,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    #[schemars(description = "Raw packet trace captured with the anomaly, suitable for analyze_anomaly")]
    pub packet_sample: String,
}

/// Aggregated traffic counters for one protocol
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolStatistics {
    pub protocol: Protocol,
    pub packet_count: u64,
    #[schemars(description = "Data volume in bytes")]
    pub data_volume: u64,
    #[schemars(description = "Data volume formatted for display, e.g. \"1.51 MB\"")]
    pub data_volume_display: String,
    pub anomaly_count: u32,
    #[schemars(description = "Summary of captured packets, suitable for summarize_protocol_behavior")]
    pub packet_summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    Live,
    Upload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Queued,
    Running,
    Completed,
    Failed,
}

/// A live capture or PCAP upload job record
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WirelessScan {
    pub id: String,
    pub mode: ScanMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    pub status: ScanStatus,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// One timestamped packet count produced by a capture source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CaptureSample {
    pub timestamp: DateTime<Utc>,
    pub packets: u32,
}
