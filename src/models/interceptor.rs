//! Gateway interceptor event and response models.
//!
//! The interceptor sees every MCP request before it reaches the tool Lambda and
//! may rewrite headers and body; it is used to attach the caller's session.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// AWS Bedrock `AgentCore` Gateway interceptor event structure
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InterceptorEvent {
    pub interceptor_input_version: String,
    pub mcp: McpData,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct McpData {
    pub gateway_request: GatewayRequest,
}

/// Only headers and body can be transformed
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InterceptorResponse {
    pub interceptor_output_version: String,
    pub mcp: McpResponse,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct McpResponse {
    pub transformed_gateway_request: GatewayRequest,
}

impl InterceptorResponse {
    #[must_use]
    pub fn passthrough(gateway_request: GatewayRequest) -> Self {
        Self {
            interceptor_output_version: "1.0".to_string(),
            mcp: McpResponse {
                transformed_gateway_request: gateway_request,
            },
        }
    }
}

/// JWT claims read by the interceptor. Signatures are not verified here; the
/// gateway authorizer has already done that.
#[derive(Debug, Deserialize, Default)]
pub struct TokenClaims {
    pub exp: Option<u64>,
    pub sub: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, rename = "cognito:groups")]
    pub groups: Vec<String>,
}
