use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::error::AppError;
use crate::models::validation::{Validate, require_non_empty};

/// Request for an analysis of a detected network anomaly
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyAnalysisRequest {
    #[serde(rename = "type")]
    #[schemars(description = "The type of the anomaly (e.g., \"DHCP Flood\", \"Rogue AP\").")]
    pub anomaly_type: String,
    #[schemars(description = "The severity of the anomaly (e.g., \"High\", \"Critical\").")]
    pub severity: String,
    #[schemars(description = "A brief description of the detected anomaly.")]
    pub description: String,
    #[schemars(description = "A small sample of raw packet data associated with the anomaly.")]
    pub packet_sample: String,
}

impl Validate for AnomalyAnalysisRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_empty("type", &self.anomaly_type)?;
        require_non_empty("severity", &self.severity)?;
        require_non_empty("description", &self.description)?;
        require_non_empty("packetSample", &self.packet_sample)
    }
}

/// Risk analysis and remediation advice for an anomaly
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnomalyAnalysisResponse {
    #[schemars(
        description = "A detailed analysis of what the anomaly is and what it means. Explain the potential risks and impact in a concise paragraph."
    )]
    pub analysis: String,
    #[schemars(
        description = "A concrete, actionable recommendation for a network administrator to mitigate the threat. Provide specific steps if possible."
    )]
    pub recommendation: String,
}

impl Validate for AnomalyAnalysisResponse {
    fn validate(&self) -> Result<(), AppError> {
        require_non_empty("analysis", &self.analysis)?;
        require_non_empty("recommendation", &self.recommendation)
    }
}
