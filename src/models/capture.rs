use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::error::AppError;
use crate::models::scanner::{CaptureSample, WirelessScan};
use crate::models::session::Session;
use crate::models::validation::{Validate, require_non_empty};

/// Capture interfaces offered by the capture agent
pub const CAPTURE_INTERFACES: [&str; 3] = ["wlan0", "wlan1", "mon0"];
pub const DEFAULT_INTERFACE: &str = "wlan0";
pub const DEFAULT_CAPTURE_SECS: u32 = 10;
pub const MAX_CAPTURE_SECS: u32 = 60;

/// Accepted upload file extensions
pub const PCAP_EXTENSIONS: [&str; 2] = [".pcap", ".pcapng"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiveCaptureRequest {
    #[serde(default)]
    #[schemars(description = "Capture interface: wlan0, wlan1 or mon0. Defaults to wlan0.")]
    pub interface: Option<String>,
    #[serde(default)]
    #[schemars(description = "Seconds of traffic to capture, 1 to 60. Defaults to 10.")]
    pub duration_secs: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Seed for a reproducible capture")]
    pub seed: Option<u64>,
    #[serde(default)]
    #[schemars(description = "Caller session, injected by the gateway interceptor")]
    pub session: Option<Session>,
}

impl LiveCaptureRequest {
    #[must_use]
    pub fn interface(&self) -> &str {
        self.interface.as_deref().unwrap_or(DEFAULT_INTERFACE)
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs.unwrap_or(DEFAULT_CAPTURE_SECS)
    }
}

impl Validate for LiveCaptureRequest {
    fn validate(&self) -> Result<(), AppError> {
        let interface = self.interface();
        if !CAPTURE_INTERFACES.contains(&interface) {
            return Err(AppError::Validation(format!(
                "unknown capture interface: {interface}"
            )));
        }
        let duration = self.duration_secs();
        if !(1..=MAX_CAPTURE_SECS).contains(&duration) {
            return Err(AppError::Validation(format!(
                "durationSecs must be between 1 and {MAX_CAPTURE_SECS}, got {duration}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LiveCaptureResponse {
    pub scan: WirelessScan,
    #[schemars(description = "Most recent per-second packet counts")]
    pub samples: Vec<CaptureSample>,
    #[schemars(description = "Capture log lines")]
    pub log: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadPcapRequest {
    #[schemars(description = "Name of the capture file; must end in .pcap or .pcapng")]
    pub file_name: String,
    #[serde(default)]
    #[schemars(description = "Caller session, injected by the gateway interceptor")]
    pub session: Option<Session>,
}

// Extension is checked by the tool, after the permission check.
impl Validate for UploadPcapRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_empty("fileName", &self.file_name)
    }
}

/// Whether `file_name` ends in one of [`PCAP_EXTENSIONS`]
#[must_use]
pub fn has_pcap_extension(file_name: &str) -> bool {
    PCAP_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UploadPcapResponse {
    pub scan: WirelessScan,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListScansRequest {
    #[serde(default)]
    #[schemars(description = "Caller session, injected by the gateway interceptor")]
    pub session: Option<Session>,
}

impl Validate for ListScansRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanList {
    pub scans: Vec<WirelessScan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcap_extension() {
        assert!(has_pcap_extension("capture_01.pcapng"));
        assert!(has_pcap_extension("office-network.pcap"));
        assert!(!has_pcap_extension("notes.txt"));
        assert!(!has_pcap_extension("capture.pcap.zip"));
    }

    #[test]
    fn test_live_capture_defaults() {
        let request = LiveCaptureRequest::default();
        assert_eq!(request.interface(), "wlan0");
        assert_eq!(request.duration_secs(), 10);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_live_capture_rejects_bad_input() {
        let request = LiveCaptureRequest {
            interface: Some("eth0".into()),
            ..LiveCaptureRequest::default()
        };
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));

        let request = LiveCaptureRequest {
            duration_secs: Some(0),
            ..LiveCaptureRequest::default()
        };
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }
}
