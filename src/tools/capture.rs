use chrono::{DateTime, Duration, Utc};
use lambda_runtime::tracing::{info, warn};

use crate::models::capture::has_pcap_extension;
use crate::models::error::AppError;
use crate::models::scanner::{CaptureSample, ScanMode, ScanStatus, WirelessScan};
use crate::models::session::require_scan_permission;
use crate::models::validation::Validate;
use crate::models::{
    ListScansRequest, LiveCaptureRequest, LiveCaptureResponse, ScanList, UploadPcapRequest,
    UploadPcapResponse,
};
use crate::sample_data::{self, CaptureSource, RandomCaptureSource};

/// Samples kept for the packets-per-second chart
pub const MAX_CHART_SAMPLES: usize = 10;
/// Log lines kept in the capture log
pub const MAX_LOG_LINES: usize = 200;

/// Runs a simulated live capture with a random capture source.
///
/// # Errors
///
/// Returns [`AppError::PermissionDenied`] without a scanning role and
/// [`AppError::Validation`] for an unknown interface or out-of-range duration.
pub fn start_live_capture(request: LiveCaptureRequest) -> Result<LiveCaptureResponse, AppError> {
    let mut source = RandomCaptureSource::new(request.seed);
    run_live_capture(&request, &mut source, Utc::now())
}

/// Runs a live capture of `request.duration_secs()` simulated seconds from
/// `source`, starting at `started_at`.
///
/// # Errors
///
/// See [`start_live_capture`].
pub fn run_live_capture(
    request: &LiveCaptureRequest,
    source: &mut dyn CaptureSource,
    started_at: DateTime<Utc>,
) -> Result<LiveCaptureResponse, AppError> {
    let session = require_scan_permission(request.session.as_ref(), "start a scan")
        .inspect_err(|e| warn!(error = %e, "Live capture rejected"))?;
    request.validate()?;

    let interface = request.interface();
    let duration = request.duration_secs();
    info!(user_id = %session.user_id, interface = %interface, duration, "Starting live capture");

    let mut log = vec![format!(
        "[{}] Starting live capture on {interface}...",
        started_at.format("%H:%M:%S")
    )];
    let mut samples: Vec<CaptureSample> = Vec::with_capacity(MAX_CHART_SAMPLES);

    for tick in 1..=duration {
        let at = started_at + Duration::seconds(i64::from(tick));
        samples.push(source.next_sample(at));
        log.push(source.log_line(at));
        trim_front(&mut samples, MAX_CHART_SAMPLES);
        trim_front(&mut log, MAX_LOG_LINES);
    }

    let finished_at = started_at + Duration::seconds(i64::from(duration));
    log.push(format!(
        "[{}] Scan completed after {duration}s.",
        finished_at.format("%H:%M:%S")
    ));
    trim_front(&mut log, MAX_LOG_LINES);

    Ok(LiveCaptureResponse {
        scan: WirelessScan {
            id: format!("scan-{}", started_at.timestamp_millis()),
            mode: ScanMode::Live,
            interface: Some(interface.to_string()),
            status: ScanStatus::Completed,
            user_id: session.user_id.clone(),
            created_at: started_at,
            file_name: None,
        },
        samples,
        log,
    })
}

/// Registers an uploaded capture file and queues it for analysis.
///
/// # Errors
///
/// Returns [`AppError::PermissionDenied`] without a scanning role and
/// [`AppError::Validation`] if the file is not a `.pcap` or `.pcapng`.
pub fn upload_pcap(request: UploadPcapRequest) -> Result<UploadPcapResponse, AppError> {
    let session = require_scan_permission(request.session.as_ref(), "upload files")
        .inspect_err(|e| warn!(error = %e, "Upload rejected"))?;
    request.validate()?;

    if !has_pcap_extension(&request.file_name) {
        return Err(AppError::Validation(format!(
            "invalid file type: {}; please select a .pcap or .pcapng file",
            request.file_name
        )));
    }

    let now = Utc::now();
    let scan = WirelessScan {
        id: format!("scan-{}", now.timestamp_millis()),
        mode: ScanMode::Upload,
        interface: None,
        status: ScanStatus::Queued,
        user_id: session.user_id.clone(),
        created_at: now,
        file_name: Some(request.file_name.clone()),
    };

    info!(user_id = %session.user_id, file_name = %request.file_name, scan_id = %scan.id, "Queued upload");

    Ok(UploadPcapResponse {
        message: format!(
            "{} has been uploaded and is queued for analysis.",
            request.file_name
        ),
        scan,
    })
}

/// Lists the caller's previous uploads, newest first.
///
/// # Errors
///
/// Returns [`AppError::PermissionDenied`] when no session was supplied.
pub fn list_scans(request: ListScansRequest) -> Result<ScanList, AppError> {
    let session = request.session.as_ref().ok_or_else(|| {
        AppError::PermissionDenied("no authenticated session; cannot list scans".to_string())
    })?;

    Ok(ScanList {
        scans: sample_data::uploads(&session.user_id, Utc::now()),
    })
}

fn trim_front<T>(items: &mut Vec<T>, max: usize) {
    if items.len() > max {
        items.drain(..items.len() - max);
    }
}
