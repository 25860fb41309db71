use lambda_runtime::{
    Error, LambdaEvent, service_fn,
    tracing::{debug, info},
};
use serde_json::Value;
use wireless_scanner_mcp::interceptor::process_interceptor_event;
use wireless_scanner_mcp::models::interceptor::{InterceptorEvent, InterceptorResponse};

/// Handles interceptor events from the Bedrock `AgentCore` Gateway.
///
/// Parses the event, and for role-gated tool calls injects the caller session
/// derived from the bearer token before the request reaches the tool Lambda.
async fn interceptor_handler(event: LambdaEvent<Value>) -> Result<InterceptorResponse, Error> {
    info!(request_id = %event.context.request_id, "Interceptor handler invoked");
    debug!(payload = ?event.payload, "Interceptor payload");

    let interceptor_event: InterceptorEvent = serde_json::from_value(event.payload)?;
    Ok(process_interceptor_event(interceptor_event))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();
    lambda_runtime::run(service_fn(interceptor_handler)).await
}
