use std::fmt::Write;

use super::{PromptFlow, run_flow};
use crate::generator::TextGenerator;
use crate::models::error::AppError;
use crate::models::{AnomalyAnalysisRequest, AnomalyAnalysisResponse};

/// Risk analysis and remediation advice for a detected anomaly
pub struct AnalyzeAnomalyFlow;

impl PromptFlow for AnalyzeAnomalyFlow {
    type Input = AnomalyAnalysisRequest;
    type Output = AnomalyAnalysisResponse;

    const NAME: &'static str = "analyze_anomaly";

    fn render(input: &Self::Input) -> String {
        let mut prompt = String::from(
            "You are an expert network security analyst providing insights for the \
             AgenticWireless tool. Your task is to analyze a detected security anomaly and \
             provide a clear, concise analysis and an actionable recommendation.\n\n",
        );

        prompt.push_str("**Anomaly Details:**\n");
        let _ = writeln!(prompt, "- **Type:** {}", input.anomaly_type);
        let _ = writeln!(prompt, "- **Severity:** {}", input.severity);
        let _ = writeln!(prompt, "- **Description:** {}", input.description);

        prompt.push_str("\n**Raw Packet Sample:**\n```\n");
        prompt.push_str(&input.packet_sample);
        prompt.push_str("\n```\n\n");
        prompt.push_str("Based on the information above, provide your expert assessment.");

        prompt
    }
}

/// Analyzes a network security anomaly.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for a malformed request and
/// [`AppError::Generation`] if the generation service fails.
pub async fn analyze_anomaly(
    generator: &dyn TextGenerator,
    request: AnomalyAnalysisRequest,
) -> Result<AnomalyAnalysisResponse, AppError> {
    run_flow::<AnalyzeAnomalyFlow>(generator, request).await
}
