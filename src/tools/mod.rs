pub mod analysis;
pub mod capture;
pub mod definitions;
pub mod traffic;

pub use analysis::{analyze_anomaly, summarize_protocol_behavior};
pub use capture::{list_scans, start_live_capture, upload_pcap};
pub use traffic::{get_protocol_statistics, list_anomalies, list_packets};
