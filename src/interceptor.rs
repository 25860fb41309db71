//! Gateway request interceptor.
//!
//! Attaches the caller's [`Session`] to tool calls that are role gated. The
//! session is derived from the bearer token only; a `session` argument supplied
//! by the caller is always removed first.

use jsonwebtoken::dangerous::insecure_decode;
use lambda_runtime::tracing::{debug, info, warn};
use serde_json::{Value, json};
use std::collections::HashMap;

use crate::models::interceptor::{GatewayRequest, InterceptorEvent, InterceptorResponse, TokenClaims};
use crate::models::session::Session;
use crate::tools::definitions::{LIST_SCANS, START_LIVE_CAPTURE, UPLOAD_PCAP};
use crate::utils::strip_gateway_prefix;

/// Tools that receive an injected `session` argument
pub const SESSION_TOOLS: [&str; 3] = [START_LIVE_CAPTURE, UPLOAD_PCAP, LIST_SCANS];

const SESSION_ARG: &str = "session";

/// Extract authorization token from headers (case-insensitive).
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn extract_auth_token(headers: &HashMap<String, String>) -> Option<&str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("authorization"))
        .map(|(_, v)| v.strip_prefix("Bearer ").unwrap_or(v))
}

/// Extract tool name from an MCP request body
#[must_use]
pub fn extract_tool_name(body: &Value) -> Option<String> {
    body.get("params")
        .and_then(|params| params.get("name"))
        .and_then(Value::as_str)
        .map(strip_gateway_prefix)
}

/// Builds a session from an unverified JWT.
///
/// Roles come from the `roles` claim, falling back to `cognito:groups`.
///
/// Returns `None` if the token cannot be decoded, is expired, or carries no
/// user identifier.
#[must_use]
pub fn session_from_token(token: &str) -> Option<Session> {
    let claims = insecure_decode::<TokenClaims>(token).map(|d| d.claims).ok()?;
    session_from_claims(claims, unix_now()?)
}

fn session_from_claims(claims: TokenClaims, now: u64) -> Option<Session> {
    if claims.exp.is_some_and(|exp| exp < now) {
        warn!(message = "Token is expired");
        return None;
    }

    let user_id = claims
        .sub
        .or_else(|| claims.preferred_username.clone())
        .or_else(|| claims.email.clone())?;

    let user_name = claims
        .name
        .or(claims.preferred_username)
        .unwrap_or_else(|| user_id.split('@').next().unwrap_or(&user_id).to_string());

    let roles = if claims.roles.is_empty() {
        claims.groups
    } else {
        claims.roles
    };

    Some(Session {
        user_id,
        user_name,
        roles,
    })
}

fn unix_now() -> Option<u64> {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs())
}

/// Rewrites a gateway request, injecting the caller session into role-gated
/// tool calls. Non tool-call requests pass through untouched.
#[must_use]
pub fn transform_request(mut gateway_request: GatewayRequest) -> GatewayRequest {
    let is_tool_call = gateway_request
        .body
        .as_ref()
        .and_then(|b| b.get("method"))
        .is_some_and(|m| m == "tools/call");

    if !is_tool_call {
        debug!(message = "Skipping non-tool request");
        return gateway_request;
    }

    let needs_session = gateway_request
        .body
        .as_ref()
        .and_then(extract_tool_name)
        .is_some_and(|name| SESSION_TOOLS.contains(&name.as_str()));

    let session = if needs_session {
        gateway_request
            .headers
            .as_ref()
            .and_then(extract_auth_token)
            .and_then(session_from_token)
    } else {
        None
    };

    let Some(arguments) = gateway_request
        .body
        .as_mut()
        .and_then(|b| b.get_mut("params"))
        .and_then(|p| p.get_mut("arguments"))
        .and_then(Value::as_object_mut)
    else {
        return gateway_request;
    };

    if arguments.remove(SESSION_ARG).is_some() {
        warn!(message = "Dropped caller-supplied session argument");
    }

    match session {
        Some(session) => {
            info!(user_id = %session.user_id, roles = ?session.roles, "Injecting session into arguments");
            arguments.insert(SESSION_ARG.to_string(), json!(session));
        }
        None if needs_session => warn!(message = "Could not derive session from token"),
        None => {}
    }

    gateway_request
}

/// Processes an interceptor event into the gateway's expected response.
#[must_use]
pub fn process_interceptor_event(event: InterceptorEvent) -> InterceptorResponse {
    InterceptorResponse::passthrough(transform_request(event.mcp.gateway_request))
}
