use super::{PromptFlow, run_flow};
use crate::generator::TextGenerator;
use crate::models::error::AppError;
use crate::models::{ProtocolSummaryRequest, ProtocolSummaryResponse};

/// One-paragraph behavioral summary of a protocol's observed traffic
pub struct SummarizeProtocolFlow;

impl PromptFlow for SummarizeProtocolFlow {
    type Input = ProtocolSummaryRequest;
    type Output = ProtocolSummaryResponse;

    const NAME: &'static str = "summarize_protocol_behavior";

    fn render(input: &Self::Input) -> String {
        format!(
            "You are an expert network analyst. Summarize the behavior of the following network \
             protocol based on the packet summary provided.\n\n\
             Protocol: {}\n\
             Packet Summary: {}\n\n\
             Summary:",
            input.protocol, input.packet_summary
        )
    }
}

/// Summarizes the behavior of a network protocol.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for a malformed request and
/// [`AppError::Generation`] if the generation service fails.
pub async fn summarize_protocol_behavior(
    generator: &dyn TextGenerator,
    request: ProtocolSummaryRequest,
) -> Result<ProtocolSummaryResponse, AppError> {
    run_flow::<SummarizeProtocolFlow>(generator, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let request = ProtocolSummaryRequest {
            protocol: "DNS".into(),
            packet_summary: "steady low-volume query/response pairs".into(),
        };
        let prompt = SummarizeProtocolFlow::render(&request);
        assert!(prompt.contains("Protocol: DNS\n"));
        assert!(prompt.contains("Packet Summary: steady low-volume query/response pairs\n"));
        assert!(prompt.ends_with("Summary:"));
    }
}
