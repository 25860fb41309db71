// Tests for the simulated scanner tools
#![allow(clippy::unwrap_used, clippy::panic)]

use chrono::{DateTime, TimeZone, Utc};
use wireless_scanner_mcp::models::capture::MAX_CAPTURE_SECS;
use wireless_scanner_mcp::models::scanner::CaptureSample;
use wireless_scanner_mcp::models::{
    AppError, ListScansRequest, LiveCaptureRequest, ScanMode, ScanStatus, Session,
    UploadPcapRequest,
};
use wireless_scanner_mcp::sample_data::{CaptureSource, RandomCaptureSource};
use wireless_scanner_mcp::tools::capture::{
    MAX_CHART_SAMPLES, MAX_LOG_LINES, list_scans, run_live_capture, upload_pcap,
};

/// Reports an increasing packet count each second
struct CountingSource {
    ticks: u32,
}

impl CaptureSource for CountingSource {
    fn next_sample(&mut self, at: DateTime<Utc>) -> CaptureSample {
        self.ticks += 1;
        CaptureSample {
            timestamp: at,
            packets: self.ticks,
        }
    }

    fn log_line(&mut self, _at: DateTime<Utc>) -> String {
        format!("tick {}", self.ticks)
    }
}

fn session(roles: &[&str]) -> Session {
    Session {
        user_id: "user-123".to_string(),
        user_name: "Wireless Hunter".to_string(),
        roles: roles.iter().map(ToString::to_string).collect(),
    }
}

fn started_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn capture_request(duration_secs: u32) -> LiveCaptureRequest {
    LiveCaptureRequest {
        interface: Some("wlan1".to_string()),
        duration_secs: Some(duration_secs),
        seed: None,
        session: Some(session(&["wireless-hunter"])),
    }
}

#[test]
fn test_live_capture_keeps_latest_samples() {
    let mut source = CountingSource { ticks: 0 };

    let response = run_live_capture(&capture_request(25), &mut source, started_at()).unwrap();

    assert_eq!(response.samples.len(), MAX_CHART_SAMPLES);
    let counts: Vec<u32> = response.samples.iter().map(|s| s.packets).collect();
    assert_eq!(counts, (16..=25).collect::<Vec<_>>());
    let last = response.samples.last().unwrap();
    assert_eq!((last.timestamp - started_at()).num_seconds(), 25);

    assert_eq!(response.log.len(), 27);
    assert_eq!(response.log[0], "[12:00:00] Starting live capture on wlan1...");
    assert_eq!(response.log[1], "tick 1");
    assert_eq!(response.log[26], "[12:00:25] Scan completed after 25s.");

    assert_eq!(response.scan.mode, ScanMode::Live);
    assert_eq!(response.scan.status, ScanStatus::Completed);
    assert_eq!(response.scan.interface.as_deref(), Some("wlan1"));
    assert_eq!(response.scan.user_id, "user-123");
    assert_eq!(response.scan.id, format!("scan-{}", started_at().timestamp_millis()));
}

#[test]
fn test_live_capture_log_is_bounded() {
    let mut request = capture_request(MAX_CAPTURE_SECS);
    request.interface = None;
    let mut source = RandomCaptureSource::new(Some(3));

    let response = run_live_capture(&request, &mut source, started_at()).unwrap();

    assert!(response.log.len() <= MAX_LOG_LINES);
    assert_eq!(response.log.len(), usize::try_from(MAX_CAPTURE_SECS).unwrap() + 2);
    assert!(response.log[0].contains("wlan0"));
    assert!(response.samples.iter().all(|s| (50..150).contains(&s.packets)));
}

#[test]
fn test_seeded_capture_is_reproducible() {
    let request = capture_request(5);
    let mut first_source = RandomCaptureSource::new(Some(9));
    let mut second_source = RandomCaptureSource::new(Some(9));

    let first = run_live_capture(&request, &mut first_source, started_at()).unwrap();
    let second = run_live_capture(&request, &mut second_source, started_at()).unwrap();

    assert_eq!(first.log, second.log);
    assert_eq!(first.samples, second.samples);
}

#[test]
fn test_live_capture_requires_scan_role() {
    let mut source = CountingSource { ticks: 0 };

    let mut request = capture_request(5);
    request.session = Some(session(&["viewer"]));
    let result = run_live_capture(&request, &mut source, started_at());
    assert!(matches!(result, Err(AppError::PermissionDenied(_))));

    request.session = None;
    let result = run_live_capture(&request, &mut source, started_at());
    assert!(matches!(result, Err(AppError::PermissionDenied(_))));
    assert_eq!(source.ticks, 0);
}

#[test]
fn test_live_capture_rejects_bad_arguments() {
    let mut source = CountingSource { ticks: 0 };

    let mut request = capture_request(0);
    assert!(matches!(
        run_live_capture(&request, &mut source, started_at()),
        Err(AppError::Validation(_))
    ));

    request.duration_secs = Some(MAX_CAPTURE_SECS + 1);
    assert!(matches!(
        run_live_capture(&request, &mut source, started_at()),
        Err(AppError::Validation(_))
    ));

    request.duration_secs = Some(5);
    request.interface = Some("eth0".to_string());
    match run_live_capture(&request, &mut source, started_at()) {
        Err(AppError::Validation(msg)) => assert!(msg.contains("eth0")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_upload_pcap_queues_scan() {
    let response = upload_pcap(UploadPcapRequest {
        file_name: "office-network.pcapng".to_string(),
        session: Some(session(&["Analyst"])),
    })
    .unwrap();

    assert_eq!(response.scan.mode, ScanMode::Upload);
    assert_eq!(response.scan.status, ScanStatus::Queued);
    assert_eq!(response.scan.file_name.as_deref(), Some("office-network.pcapng"));
    assert_eq!(
        response.message,
        "office-network.pcapng has been uploaded and is queued for analysis."
    );
}

#[test]
fn test_upload_pcap_rejects_other_files() {
    let result = upload_pcap(UploadPcapRequest {
        file_name: "notes.txt".to_string(),
        session: Some(session(&["admin"])),
    });

    match result {
        Err(AppError::Validation(msg)) => assert!(msg.contains("notes.txt")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_upload_pcap_checks_permission_first() {
    let result = upload_pcap(UploadPcapRequest {
        file_name: "notes.txt".to_string(),
        session: Some(session(&["viewer"])),
    });

    assert!(matches!(result, Err(AppError::PermissionDenied(_))));
}

#[test]
fn test_list_scans_for_session() {
    let scans = list_scans(ListScansRequest {
        session: Some(session(&["viewer"])),
    })
    .unwrap()
    .scans;

    assert_eq!(scans.len(), 3);
    assert!(scans.iter().all(|s| s.user_id == "user-123"));
    assert!(scans.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn test_list_scans_requires_session() {
    let result = list_scans(ListScansRequest::default());
    assert!(matches!(result, Err(AppError::PermissionDenied(_))));
}
