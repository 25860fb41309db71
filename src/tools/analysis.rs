use lambda_runtime::tracing::info;

use crate::flows;
use crate::generator::ChatCompletionsGenerator;
use crate::models::error::AppError;
use crate::models::{
    AnomalyAnalysisRequest, AnomalyAnalysisResponse, ProtocolSummaryRequest,
    ProtocolSummaryResponse,
};

/// Produces an AI risk analysis and remediation recommendation for an anomaly.
///
/// Uses the generation service configured in the environment.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if a field is empty and
/// [`AppError::Generation`] if the generation service call fails or its output
/// is incomplete.
pub async fn analyze_anomaly(
    request: AnomalyAnalysisRequest,
) -> Result<AnomalyAnalysisResponse, AppError> {
    info!(
        anomaly_type = %request.anomaly_type,
        severity = %request.severity,
        "Starting anomaly analysis"
    );
    let generator = ChatCompletionsGenerator::from_env();
    flows::analyze_anomaly(&generator, request).await
}

/// Produces an AI summary of a protocol's observed behavior.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if a field is empty and
/// [`AppError::Generation`] if the generation service call fails or its output
/// is incomplete.
pub async fn summarize_protocol_behavior(
    request: ProtocolSummaryRequest,
) -> Result<ProtocolSummaryResponse, AppError> {
    info!(protocol = %request.protocol, "Starting protocol summary");
    let generator = ChatCompletionsGenerator::from_env();
    flows::summarize_protocol_behavior(&generator, request).await
}
