//! Sample data served by the scanner tools.
//!
//! Fixed records are rebuilt on every call with timestamps relative to `now`;
//! packets are drawn from a caller-supplied random source.

pub mod capture;

pub use capture::{CaptureSource, RandomCaptureSource};

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::scanner::{
    Anomaly, AnomalyType, Packet, Protocol, ProtocolStatistics, ScanMode, ScanStatus, Severity,
    WirelessScan,
};
use crate::utils::format_bytes;

pub const SAMPLE_PACKET_COUNT: usize = 150;

/// The four anomalies shown in the anomaly review table
#[must_use]
pub fn anomalies(now: DateTime<Utc>) -> Vec<Anomaly> {
    vec![
        Anomaly {
            id: "anom-1".to_string(),
            anomaly_type: AnomalyType::DhcpFlood,
            severity: Severity::High,
            timestamp: now - Duration::hours(1),
            description: "Excessive DHCP requests from MAC 00:1B:44:11:3A:B7".to_string(),
            packet_sample: SAMPLE_PACKET_TRACE.to_string(),
        },
        Anomaly {
            id: "anom-2".to_string(),
            anomaly_type: AnomalyType::SpoofedMac,
            severity: Severity::Medium,
            timestamp: now - Duration::hours(2),
            description: "MAC address 0A:1B:4C:11:3A:B7 seen on multiple IPs".to_string(),
            packet_sample: SAMPLE_PACKET_TRACE.to_string(),
        },
        Anomaly {
            id: "anom-3".to_string(),
            anomaly_type: AnomalyType::BeaconFlood,
            severity: Severity::High,
            timestamp: now - Duration::hours(24),
            description: "High volume of 802.11 beacon frames detected".to_string(),
            packet_sample: SAMPLE_PACKET_TRACE.to_string(),
        },
        Anomaly {
            id: "anom-4".to_string(),
            anomaly_type: AnomalyType::RogueAp,
            severity: Severity::Critical,
            timestamp: now - Duration::hours(48),
            description: "Unauthorized AP \"Free-Wifi-No-Virus\" detected".to_string(),
            packet_sample: SAMPLE_PACKET_TRACE.to_string(),
        },
    ]
}

/// Raw trace attached to anomalies in incident review
pub const SAMPLE_PACKET_TRACE: &str = "\
Frame 1: 42 bytes on wire (336 bits), 42 bytes captured (336 bits)
Ethernet II, Src: PcsCompu_3a:b7:c8 (00:1b:44:11:3a:b7), Dst: Broadcast (ff:ff:ff:ff:ff:ff)
Address Resolution Protocol (request)
    Hardware type: Ethernet (1)
    Protocol type: IPv4 (0x0800)
    Hardware size: 6
    Protocol size: 4
    Opcode: request (1)
    Sender MAC address: PcsCompu_3a:b7:c8 (00:1b:44:11:3a:b7)
    Sender IP address: 192.168.1.101
    Target MAC address: 00:00:00:00:00:00 (00:00:00:00:00:00)
    Target IP address: 192.168.1.1";

/// Per-protocol counters shown on the protocol analysis view
#[must_use]
pub fn protocol_statistics() -> Vec<ProtocolStatistics> {
    [
        (Protocol::Ieee80211, 12_543, 1_578_654, 12),
        (Protocol::Dhcp, 234, 74_880, 5),
        (Protocol::Http, 8_765, 12_345_678, 2),
        (Protocol::Dns, 4_321, 345_680, 0),
    ]
    .into_iter()
    .map(|(protocol, packet_count, data_volume, anomaly_count)| ProtocolStatistics {
        protocol,
        packet_count,
        data_volume,
        data_volume_display: format_bytes(data_volume, 2),
        anomaly_count,
        packet_summary: protocol_packet_summary(protocol),
    })
    .collect()
}

/// Packet summary handed to the protocol summary flow for `protocol`
#[must_use]
pub fn protocol_packet_summary(protocol: Protocol) -> String {
    format!(
        "Packets for {protocol} show frequent handshakes and data transfers. Some retransmissions observed."
    )
}

/// Generates the traffic explorer's packet set.
///
/// Protocols cycle by index; addresses and timestamps (within the last 24
/// hours) are random.
pub fn packets<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<Packet> {
    (0..SAMPLE_PACKET_COUNT)
        .map(|i| Packet {
            id: format!("pkt-{i}"),
            timestamp: now - Duration::milliseconds(rng.gen_range(0..86_400_000)),
            protocol: Protocol::ALL[i % Protocol::ALL.len()],
            source: format!("192.168.1.{}", rng.gen_range(1..=254)),
            destination: format!("10.0.0.{}", rng.gen_range(1..=254)),
            summary: format!("Packet summary for packet number {i}"),
        })
        .collect()
}

/// Previously uploaded captures owned by `user_id`, newest first
#[must_use]
pub fn uploads(user_id: &str, now: DateTime<Utc>) -> Vec<WirelessScan> {
    [
        ("scan-3", ScanStatus::Queued, Duration::zero(), "guest-wifi-traffic.pcap"),
        ("scan-2", ScanStatus::Running, Duration::hours(1), "office-network.pcap"),
        ("scan-1", ScanStatus::Completed, Duration::hours(24), "capture_01.pcapng"),
    ]
    .into_iter()
    .map(|(id, status, age, file_name)| WirelessScan {
        id: id.to_string(),
        mode: ScanMode::Upload,
        interface: None,
        status,
        user_id: user_id.to_string(),
        created_at: now - age,
        file_name: Some(file_name.to_string()),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_anomalies_are_fixed() {
        let now = Utc::now();
        let anomalies = anomalies(now);
        assert_eq!(anomalies.len(), 4);
        assert_eq!(anomalies[3].anomaly_type, AnomalyType::RogueAp);
        assert_eq!(anomalies[3].severity, Severity::Critical);
        assert_eq!(anomalies[0].timestamp, now - Duration::hours(1));
    }

    #[test]
    fn test_packets_cycle_protocols() {
        let mut rng = StdRng::seed_from_u64(7);
        let packets = packets(&mut rng, Utc::now());
        assert_eq!(packets.len(), SAMPLE_PACKET_COUNT);
        assert_eq!(packets[0].protocol, Protocol::Ieee80211);
        assert_eq!(packets[7].protocol, Protocol::Ieee80211);
        assert_eq!(packets[6].protocol, Protocol::Udp);
        assert!(packets.iter().all(|p| p.source.starts_with("192.168.1.")));
        assert!(packets.iter().all(|p| p.destination.starts_with("10.0.0.")));
    }

    #[test]
    fn test_same_seed_same_packets() {
        let now = Utc::now();
        let a = packets(&mut StdRng::seed_from_u64(42), now);
        let b = packets(&mut StdRng::seed_from_u64(42), now);
        assert!(
            a.iter()
                .zip(&b)
                .all(|(x, y)| x.source == y.source && x.timestamp == y.timestamp)
        );
    }

    #[test]
    fn test_protocol_statistics_display() {
        let stats = protocol_statistics();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].data_volume_display, "1.51 MB");
        assert_eq!(stats[1].data_volume_display, "73.13 KB");
    }

    #[test]
    fn test_anomalies_carry_packet_trace() {
        let anomalies = anomalies(Utc::now());
        assert!(anomalies.iter().all(|a| a.packet_sample == SAMPLE_PACKET_TRACE));
        assert!(SAMPLE_PACKET_TRACE.starts_with("Frame 1: 42 bytes on wire"));
    }

    #[test]
    fn test_statistics_carry_packet_summary() {
        let stats = protocol_statistics();
        assert_eq!(stats[2].protocol, Protocol::Http);
        assert_eq!(
            stats[2].packet_summary,
            "Packets for HTTP show frequent handshakes and data transfers. Some retransmissions observed."
        );
    }

    #[test]
    fn test_uploads_newest_first() {
        let scans = uploads("user-123", Utc::now());
        assert_eq!(scans.len(), 3);
        assert!(scans.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert!(scans.iter().all(|s| s.user_id == "user-123"));
    }
}
